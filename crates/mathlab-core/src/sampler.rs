//! Function-graph sampling over an inclusive range.
//!
//! Four passes (linear, quadratic, inverse, square root) each walk their own
//! running `x` by repeated addition of `step`. The passes never share an
//! accumulator: the square-root pass starts at zero and the inverse pass
//! filters on its own values.

use std::iter;

use serde::{Deserialize, Serialize};

use crate::computation::Computation;
use crate::constants::{INVERSE_GUARD_BAND, MAX_SAMPLES_PER_PASS};
use crate::error::GeometryError;
use crate::geometry::Point;

/// Inclusive sampling range `[min, max]` walked by `step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SampleRange {
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Check that all bounds are finite and `step > 0`.
    ///
    /// `min > max` is valid and yields empty output.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(GeometryError::invalid(format!(
                "range bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(GeometryError::invalid(format!(
                "step must be a positive finite number, got {}",
                self.step
            )));
        }
        Ok(())
    }

    /// Estimated number of samples a pass starting at `start` produces.
    #[must_use]
    pub fn estimated_len(&self, start: f64) -> f64 {
        if start > self.max {
            0.0
        } else {
            ((self.max - start) / self.step).floor() + 1.0
        }
    }
}

/// Sampled points for each function.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphResult {
    pub linear: Vec<Point>,
    pub quadratic: Vec<Point>,
    /// `1/x` for `x < -0.1`.
    pub inverse_left: Vec<Point>,
    /// `1/x` for `x > 0.1`.
    pub inverse_right: Vec<Point>,
    /// `sqrt(x)` for `x` in `[0, max]`.
    pub sqrt: Vec<Point>,
}

impl GraphResult {
    /// Total number of points across every sequence.
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.linear.len()
            + self.quadratic.len()
            + self.inverse_left.len()
            + self.inverse_right.len()
            + self.sqrt.len()
    }
}

/// Running `x` values from `start` while `x <= max`.
///
/// Stops early if adding `step` no longer changes `x`.
fn walk(start: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    iter::successors(Some(start), move |&x| {
        let next = x + step;
        (next > x).then_some(next)
    })
    .take_while(move |x| *x <= max)
}

/// Reject a pass whose `x` would stop advancing before reaching `max`.
///
/// Rounding loss grows with `|x|`, so checking both ends of the pass covers
/// every value in between.
fn check_pass_advances(range: &SampleRange, start: f64, pass: &str) -> Result<(), GeometryError> {
    if start > range.max {
        return Ok(());
    }
    for x in [start, range.max] {
        if x + range.step <= x {
            return Err(GeometryError::invalid(format!(
                "{pass} pass cannot advance: step {} is lost in rounding at x = {x}",
                range.step
            )));
        }
    }
    Ok(())
}

fn check_pass_len(range: &SampleRange, start: f64, pass: &str) -> Result<(), GeometryError> {
    #[allow(clippy::cast_precision_loss)]
    let limit = MAX_SAMPLES_PER_PASS as f64;
    if range.estimated_len(start) > limit {
        return Err(GeometryError::invalid(format!(
            "{pass} pass would exceed {MAX_SAMPLES_PER_PASS} samples; increase the step"
        )));
    }
    Ok(())
}

/// Sample the four functions over `range`.
pub fn sample(range: &SampleRange) -> Result<GraphResult, GeometryError> {
    range.validate()?;
    check_pass_advances(range, range.min, "linear")?;
    check_pass_advances(range, 0.0, "sqrt")?;
    check_pass_len(range, range.min, "linear")?;
    check_pass_len(range, 0.0, "sqrt")?;

    let SampleRange { min, max, step } = *range;

    let linear = walk(min, max, step).map(|x| Point::new(x, x)).collect();

    let quadratic: Vec<Point> = walk(min, max, step).map(|x| Point::new(x, x * x)).collect();
    if let Some(p) = quadratic.iter().find(|p| !p.y.is_finite()) {
        return Err(GeometryError::invalid(format!(
            "quadratic value overflows at x = {}",
            p.x
        )));
    }

    let mut inverse_left = Vec::new();
    let mut inverse_right = Vec::new();
    for x in walk(min, max, step) {
        if x < -INVERSE_GUARD_BAND {
            inverse_left.push(Point::new(x, 1.0 / x));
        } else if x > INVERSE_GUARD_BAND {
            inverse_right.push(Point::new(x, 1.0 / x));
        }
    }

    let sqrt = walk(0.0, max, step).map(|x| Point::new(x, x.sqrt())).collect();

    Ok(GraphResult {
        linear,
        quadratic,
        inverse_left,
        inverse_right,
        sqrt,
    })
}

/// Worker-facing sampling computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionSampler;

impl FunctionSampler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Computation for FunctionSampler {
    type Input = SampleRange;
    type Output = GraphResult;

    fn compute(&self, input: &SampleRange) -> Result<GraphResult, GeometryError> {
        tracing::debug!(min = input.min, max = input.max, step = input.step, "sampling graphs");
        sample(input)
    }

    fn name(&self) -> &'static str {
        "FunctionSampler"
    }
}
