use num_traits::Float;

use super::input::UnaryFunction;

impl UnaryFunction {
    /// Applies the function, angles being in radians.
    ///
    /// Returns `None` when the result is not a finite number, for example for
    /// the square root of a negative number or the logarithm of zero.
    pub fn apply<F: Float>(self, x: F) -> Option<F> {
        let result = match self {
            UnaryFunction::Sin => x.sin(),
            UnaryFunction::Cos => x.cos(),
            UnaryFunction::Tan => x.tan(),
            UnaryFunction::Log10 => x.log10(),
            UnaryFunction::Ln => x.ln(),
            UnaryFunction::Sqrt => x.sqrt(),
        };
        if result.is_finite() {
            Some(result)
        } else {
            None
        }
    }
}
