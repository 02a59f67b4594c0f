pub mod calculator;
pub mod keymap;
pub mod lexer;
pub mod node;
pub mod parser;

mod error;

pub use error::EngineError;

use lexer::tokenize;
use parser::Parser;

/// Evaluates an arithmetic expression such as `2+3*(4-1)`.
///
/// The evaluation is pure: the same string always gives the same result.
pub fn evaluate(expr: &str) -> Result<f64, EngineError> {
    let tokens = tokenize(expr)?;
    let root_node = Parser::new(&tokens).parse()?;
    Ok(root_node.eval()?)
}
