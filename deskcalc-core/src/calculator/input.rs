use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Raised when text does not name a known input.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum InputError {
    #[error("{0:?} is not a digit")]
    NotADigit(char),
    #[error("{0:?} is not an operator")]
    NotAnOperator(char),
    #[error("unknown function {0:?}")]
    UnknownFunction(String),
    #[error("unknown memory operation {0:?}")]
    UnknownMemoryOp(String),
    #[error("unknown key {0:?}")]
    UnknownKey(String),
}

/// A decimal digit or the decimal point.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(c: char) -> Result<Digit, InputError> {
        match c {
            '0'..='9' | '.' => Ok(Digit(c)),
            _ => Err(InputError::NotADigit(c)),
        }
    }
}

/// The characters that are appended to the expression verbatim.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
    OpenParen,
    CloseParen,
}

impl Operator {
    pub fn as_char(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Times => '*',
            Operator::Divide => '/',
            Operator::OpenParen => '(',
            Operator::CloseParen => ')',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = InputError;

    fn try_from(c: char) -> Result<Operator, InputError> {
        Ok(match c {
            '+' => Operator::Plus,
            '-' => Operator::Minus,
            '*' => Operator::Times,
            '/' => Operator::Divide,
            '(' => Operator::OpenParen,
            ')' => Operator::CloseParen,
            _ => return Err(InputError::NotAnOperator(c)),
        })
    }
}

/// A function applied directly to the displayed value.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Sqrt,
}

impl UnaryFunction {
    pub fn name(self) -> &'static str {
        match self {
            UnaryFunction::Sin => "sin",
            UnaryFunction::Cos => "cos",
            UnaryFunction::Tan => "tan",
            UnaryFunction::Log10 => "log10",
            UnaryFunction::Ln => "ln",
            UnaryFunction::Sqrt => "sqrt",
        }
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnaryFunction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<UnaryFunction, InputError> {
        Ok(match &*s.to_ascii_lowercase() {
            "sin" | "sine" => UnaryFunction::Sin,
            "cos" | "cosine" => UnaryFunction::Cos,
            "tan" | "tangent" => UnaryFunction::Tan,
            "log" | "log10" => UnaryFunction::Log10,
            "ln" => UnaryFunction::Ln,
            "sqrt" | "√" => UnaryFunction::Sqrt,
            _ => return Err(InputError::UnknownFunction(s.to_string())),
        })
    }
}

/// An operation on the memory register.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MemoryOp {
    /// Memory clear
    Clear,
    /// Memory recall
    Recall,
    Add,
    Subtract,
    /// Memory store
    Store,
}

impl FromStr for MemoryOp {
    type Err = InputError;

    fn from_str(s: &str) -> Result<MemoryOp, InputError> {
        Ok(match s {
            "MC" => MemoryOp::Clear,
            "MR" => MemoryOp::Recall,
            "M+" => MemoryOp::Add,
            "M-" => MemoryOp::Subtract,
            "MS" => MemoryOp::Store,
            _ => return Err(InputError::UnknownMemoryOp(s.to_string())),
        })
    }
}

/// One discrete event delivered to the calculator.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Input {
    Digit(Digit),
    Operator(Operator),
    Equals,
    Clear,
    /// Behaves like `Clear`, but comes from a different key.
    Escape,
    Function(UnaryFunction),
    Memory(MemoryOp),
}
