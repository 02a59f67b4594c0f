use thiserror::Error;

use crate::lexer::LexerError;
use crate::node::EvalError;
use crate::parser::ParseError;

/// Everything that can go wrong while evaluating an expression string.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum EngineError {
    #[error("lexing failed: {0}")]
    Lex(#[from] LexerError),
    #[error("parsing failed: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),
}
