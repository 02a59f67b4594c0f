/// Formats a value the way it is shown on the display.
///
/// Rust prints the shortest decimal text that reads back as the same value and
/// never uses an exponent, so the text can always be fed back to the lexer
/// when it becomes part of an expression.
pub fn format_value(val: f64) -> String {
    if val == 0.0 {
        // hide the sign of negative zero
        return "0".to_string();
    }
    val.to_string()
}
