//! Maps the labels of keypad buttons and keyboard keys to calculator inputs.
//!
//! This is what an input dispatcher uses before calling into the state
//! machine. The multiplication and division glyphs are normalized here, so
//! they never reach the lexer.

use std::convert::TryFrom;

use crate::calculator::{Digit, Input, InputError, Operator};

/// Reads a single key label, such as `7`, `×`, `Enter`, `sqrt` or `M+`.
pub fn parse_key(key: &str) -> Option<Input> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Ok(digit) = Digit::try_from(c) {
            return Some(Input::Digit(digit));
        }
        let c = match c {
            '×' => '*',
            '÷' => '/',
            c => c,
        };
        if let Ok(op) = Operator::try_from(c) {
            return Some(Input::Operator(op));
        }
    }

    Some(match key {
        "=" | "Enter" => Input::Equals,
        "Escape" | "Esc" => Input::Escape,
        "C" | "AC" | "Clear" => Input::Clear,
        _ => {
            if let Ok(op) = key.parse() {
                Input::Memory(op)
            } else {
                Input::Function(key.parse().ok()?)
            }
        }
    })
}

/// Reads whitespace separated key labels, like `2 + 3 =`.
pub fn parse_keys(keys: &str) -> Result<Vec<Input>, InputError> {
    keys.split_whitespace()
        .map(|key| parse_key(key).ok_or_else(|| InputError::UnknownKey(key.to_string())))
        .collect()
}
