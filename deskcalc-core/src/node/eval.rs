use thiserror::Error;

use super::{BinOpKind, Node};

/// A description of the error of a calculation.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivideByZero,
}

/// Reduces the tree to a number, depth first.
///
/// No partial result is kept: the first division by zero anywhere in the tree
/// fails the whole evaluation.
pub fn eval(node: &Node) -> Result<f64, EvalError> {
    Ok(match node {
        Node::Literal(val) => *val,
        Node::Negate(inner) => -eval(inner)?,
        Node::Binary { op, left, right } => {
            let left = eval(left)?;
            let right = eval(right)?;
            match op {
                BinOpKind::Add => left + right,
                BinOpKind::Sub => left - right,
                BinOpKind::Mul => left * right,
                BinOpKind::Div => {
                    // also catches negative zero
                    if right == 0.0 {
                        return Err(EvalError::DivideByZero);
                    }
                    left / right
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(val: f64) -> Node {
        Node::Literal(val)
    }

    #[test]
    fn it_evaluates_binary_operators() {
        assert_eq!((n(2.0) + n(3.0)).eval(), Ok(5.0));
        assert_eq!((n(2.0) - n(3.0)).eval(), Ok(-1.0));
        assert_eq!((n(2.0) * n(3.0)).eval(), Ok(6.0));
        assert_eq!((n(3.0) / n(2.0)).eval(), Ok(1.5));
        assert_eq!((-(n(2.0) + n(3.0))).eval(), Ok(-5.0));
    }

    #[test]
    fn it_fails_on_division_by_zero_anywhere() {
        assert_eq!((n(5.0) / n(0.0)).eval(), Err(EvalError::DivideByZero));
        assert_eq!((n(5.0) / -n(0.0)).eval(), Err(EvalError::DivideByZero));
        assert_eq!(
            (n(1.0) + n(2.0) * (n(1.0) / (n(3.0) - n(3.0)))).eval(),
            Err(EvalError::DivideByZero)
        );
        // zero numerators are fine
        assert_eq!((n(0.0) / n(5.0)).eval(), Ok(0.0));
    }

    #[test]
    fn it_does_not_round() {
        assert_eq!((n(0.1) + n(0.2)).eval(), Ok(0.1 + 0.2));
        assert_eq!((n(1.0) / n(3.0)).eval(), Ok(1.0 / 3.0));
    }
}
