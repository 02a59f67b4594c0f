//! The calculator state machine.
//!
//! Every key press is one [`Input`]. A transition takes the current
//! [`CalculatorState`] and the input and returns the next state; the
//! expression is only evaluated when `=` is pressed.

mod format;
mod function;
mod history;
mod input;
mod transition;

#[cfg(test)]
mod proptests;

pub use self::format::format_value;
pub use self::history::{History, HistoryEntry, HISTORY_CAPACITY};
pub use self::input::{Digit, Input, InputError, MemoryOp, Operator, UnaryFunction};
pub use self::transition::{transition, CalcError};

/// What the display shows after a failure.
pub const ERROR_DISPLAY: &str = "Error";

/// What the last input did, which decides what the next one does.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    /// A number is being typed.
    Entry,
    /// The display holds the `0` placeholder, for example after an operator.
    AwaitingOperand,
    /// The display holds the result of the last evaluation.
    Result,
    /// The display shows `Error`.
    Error,
}

#[derive(Debug, PartialEq, Clone)]
pub struct CalculatorState {
    display: String,
    expression: String,
    memory: f64,
    history: History,
    phase: Phase,
}

impl Default for CalculatorState {
    fn default() -> CalculatorState {
        CalculatorState {
            display: "0".to_string(),
            expression: String::new(),
            memory: 0.0,
            history: History::default(),
            phase: Phase::AwaitingOperand,
        }
    }
}

impl CalculatorState {
    pub fn new() -> CalculatorState {
        CalculatorState::default()
    }

    /// The text on the display. Never empty.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The part of the expression typed before the displayed number.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_error(&self) -> bool {
        self.phase == Phase::Error
    }

    /// The displayed number, if the display shows one.
    pub fn display_value(&self) -> Option<f64> {
        if self.is_error() {
            return None;
        }
        self.display.parse().ok()
    }

    pub fn apply(&self, input: Input) -> CalculatorState {
        transition(self, input)
    }

    pub fn apply_digit(&self, digit: Digit) -> CalculatorState {
        self.apply(Input::Digit(digit))
    }

    pub fn apply_operator(&self, op: Operator) -> CalculatorState {
        self.apply(Input::Operator(op))
    }

    pub fn apply_equals(&self) -> CalculatorState {
        self.apply(Input::Equals)
    }

    pub fn apply_function(&self, function: UnaryFunction) -> CalculatorState {
        self.apply(Input::Function(function))
    }

    pub fn apply_memory(&self, op: MemoryOp) -> CalculatorState {
        self.apply(Input::Memory(op))
    }

    pub fn clear(&self) -> CalculatorState {
        self.apply(Input::Clear)
    }

    pub fn escape(&self) -> CalculatorState {
        self.apply(Input::Escape)
    }
}
