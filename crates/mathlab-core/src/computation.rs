//! The `Computation` trait consumed by the workers.
//!
//! Each implementation is a stateless, synchronous transformation of one
//! input value into one output value. Threading is the caller's concern.

use crate::error::GeometryError;

/// A pure computation that can be hosted by a worker thread.
pub trait Computation: Send + Sync + 'static {
    /// Request payload.
    type Input: Send + 'static;
    /// Successful result.
    type Output: Send + 'static;

    /// Run the computation to completion.
    fn compute(&self, input: &Self::Input) -> Result<Self::Output, GeometryError>;

    /// Human-readable name, used in logs and thread names.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    impl Computation for Doubler {
        type Input = f64;
        type Output = f64;

        fn compute(&self, input: &f64) -> Result<f64, GeometryError> {
            if input.is_finite() {
                Ok(input * 2.0)
            } else {
                Err(GeometryError::invalid("not finite"))
            }
        }

        fn name(&self) -> &'static str {
            "Doubler"
        }
    }

    #[test]
    fn trait_object_free_usage() {
        fn run<C: Computation<Input = f64, Output = f64>>(c: &C, x: f64) -> Option<f64> {
            c.compute(&x).ok()
        }
        assert_eq!(run(&Doubler, 2.5), Some(5.0));
        assert_eq!(run(&Doubler, f64::NAN), None);
        assert_eq!(Doubler.name(), "Doubler");
    }
}
