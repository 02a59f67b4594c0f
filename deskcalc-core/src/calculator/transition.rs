use thiserror::Error;
use tracing::{debug, warn};

use super::format::format_value;
use super::history::HistoryEntry;
use super::input::{Digit, Input, MemoryOp, Operator, UnaryFunction};
use super::{CalculatorState, Phase, ERROR_DISPLAY};
use crate::{evaluate, EngineError};

/// Why the display switched to `Error`.
///
/// These never leave the state machine, they are only logged.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum CalcError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("{function} is undefined for {input}")]
    Domain {
        function: UnaryFunction,
        input: f64,
    },
    #[error("the result is not a finite number")]
    NonFinite,
}

/// Computes the state that follows `state` once `input` is received.
///
/// This is a pure function: the old state is left untouched.
pub fn transition(state: &CalculatorState, input: Input) -> CalculatorState {
    debug!(
        ?input,
        display = %state.display,
        expression = %state.expression,
        "applying input"
    );

    let mut next = state.clone();
    match input {
        Input::Digit(digit) => next.push_digit(digit),
        Input::Operator(op) => next.push_operator(op),
        Input::Equals => next.equals(),
        Input::Clear | Input::Escape => next.reset(),
        Input::Function(function) => next.apply_function_to_display(function),
        Input::Memory(op) => next.apply_memory_to_display(op),
    }
    next
}

impl CalculatorState {
    fn reset(&mut self) {
        self.display = "0".to_string();
        self.expression.clear();
        self.phase = Phase::AwaitingOperand;
    }

    /// Leaves the error state, forgetting the expression that failed.
    fn recover(&mut self) {
        if self.phase == Phase::Error {
            self.reset();
        }
    }

    fn fail(&mut self, err: CalcError) {
        debug!(%err, "showing error");
        self.display = ERROR_DISPLAY.to_string();
        self.phase = Phase::Error;
    }

    fn push_digit(&mut self, digit: Digit) {
        self.recover();

        match self.phase {
            Phase::Entry if self.display != "0" => {
                // only one decimal point per number
                if digit.is_point() && self.display.contains('.') {
                    return;
                }
                self.display.push(digit.as_char());
            }
            _ => {
                self.display.clear();
                if digit.is_point() {
                    self.display.push('0');
                }
                self.display.push(digit.as_char());
            }
        }

        self.phase = Phase::Entry;
    }

    /// True when the display holds the `0` placeholder after `)` or when
    /// opening a parenthesis, where appending it would break the expression.
    fn skips_placeholder(&self, op: Operator) -> bool {
        self.phase == Phase::AwaitingOperand
            && (op == Operator::OpenParen || self.expression.ends_with(')'))
    }

    fn push_operator(&mut self, op: Operator) {
        self.recover();

        if !self.skips_placeholder(op) {
            self.expression.push_str(&self.display);
        }
        self.expression.push(op.as_char());
        self.display = "0".to_string();
        self.phase = Phase::AwaitingOperand;
    }

    fn equals(&mut self) {
        let text = if self.skips_placeholder(Operator::CloseParen) {
            self.expression.clone()
        } else {
            format!("{}{}", self.expression, self.display)
        };

        let result = evaluate(&text).map_err(CalcError::from).and_then(|val| {
            if val.is_finite() {
                Ok(val)
            } else {
                Err(CalcError::NonFinite)
            }
        });

        match result {
            Ok(val) => {
                let result = format_value(val);
                debug!(expression = %text, %result, "evaluated");
                self.history.push(HistoryEntry {
                    expression: text,
                    result: result.clone(),
                });
                self.display = result;
                self.expression.clear();
                self.phase = Phase::Result;
            }
            // the expression and the history stay as they were
            Err(err) => self.fail(err),
        }
    }

    fn apply_function_to_display(&mut self, function: UnaryFunction) {
        self.recover();

        // outside of the error state the display always holds a number
        let input = self.display_value().unwrap_or(0.0);
        match function.apply(input) {
            Some(val) => {
                self.display = format_value(val);
                self.phase = Phase::Entry;
            }
            None => self.fail(CalcError::Domain { function, input }),
        }
    }

    fn apply_memory_to_display(&mut self, op: MemoryOp) {
        self.recover();

        let updated = match op {
            MemoryOp::Recall => {
                self.display = format_value(self.memory);
                self.phase = Phase::Entry;
                return;
            }
            MemoryOp::Clear => Some(0.0),
            MemoryOp::Store => self.display_value(),
            MemoryOp::Add => self.display_value().map(|val| self.memory + val),
            MemoryOp::Subtract => self.display_value().map(|val| self.memory - val),
        };

        match updated {
            Some(val) if val.is_finite() => self.memory = val,
            _ => warn!(
                ?op,
                memory = self.memory,
                display = %self.display,
                "rejected memory update"
            ),
        }
    }
}
