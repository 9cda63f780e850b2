//! Sierpinski triangle subdivision.
//!
//! Every level replaces a triangle with its three corner sub-triangles and
//! drops the central one. Leaves are emitted depth-first, corner 1, 2, 3.

use serde::{Deserialize, Serialize};

use crate::computation::Computation;
use crate::constants::{DEFAULT_MAX_DEPTH, MAX_PREALLOCATED_LEAVES, PARALLEL_DEPTH_THRESHOLD};
use crate::error::GeometryError;
use crate::geometry::Triangle;

/// Input of a fractal computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalRequest {
    pub triangle: Triangle,
    pub depth: u32,
}

impl FractalRequest {
    #[must_use]
    pub fn new(triangle: Triangle, depth: u32) -> Self {
        Self { triangle, depth }
    }
}

/// Number of leaves produced at `depth`, or `None` if it overflows `u64`.
#[must_use]
pub fn leaf_count(depth: u32) -> Option<u64> {
    3u64.checked_pow(depth)
}

/// Ratio of the total leaf area to the input area at `depth`.
#[must_use]
pub fn expected_area_ratio(depth: u32) -> f64 {
    let exp = i32::try_from(depth).unwrap_or(i32::MAX);
    0.75f64.powi(exp)
}

/// Convert a wire depth into a recursion depth.
///
/// Rejects negative, fractional, non-finite and out-of-range values.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn depth_from_f64(value: f64) -> Result<u32, GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::invalid(format!("depth must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(GeometryError::invalid(format!("depth must be non-negative, got {value}")));
    }
    if value.fract() != 0.0 {
        return Err(GeometryError::invalid(format!("depth must be an integer, got {value}")));
    }
    if value > f64::from(u32::MAX) {
        return Err(GeometryError::invalid(format!("depth {value} is out of range")));
    }
    Ok(value as u32)
}

/// Subdivide `triangle` `depth` times and return the leaves.
///
/// `depth == 0` returns the input triangle unchanged.
pub fn generate(triangle: &Triangle, depth: u32) -> Result<Vec<Triangle>, GeometryError> {
    let capacity = check_request(triangle, depth)?;
    let mut leaves = Vec::with_capacity(capacity);
    subdivide(*triangle, depth, &mut leaves);
    Ok(leaves)
}

/// Same output as [`generate`], with the upper levels split across the
/// rayon pool once `depth >= threshold`.
pub fn generate_parallel(
    triangle: &Triangle,
    depth: u32,
    threshold: u32,
) -> Result<Vec<Triangle>, GeometryError> {
    let capacity = check_request(triangle, depth)?;
    if depth == 0 || depth < threshold {
        let mut leaves = Vec::with_capacity(capacity);
        subdivide(*triangle, depth, &mut leaves);
        return Ok(leaves);
    }
    Ok(subdivide_parallel(*triangle, depth, threshold.max(1)))
}

fn check_request(triangle: &Triangle, depth: u32) -> Result<usize, GeometryError> {
    if !triangle.is_finite() {
        return Err(GeometryError::invalid(
            "triangle vertices must have finite coordinates",
        ));
    }
    let count = leaf_count(depth)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| GeometryError::invalid(format!("depth {depth} yields too many triangles")))?;
    Ok(count.min(MAX_PREALLOCATED_LEAVES))
}

fn subdivide(triangle: Triangle, depth: u32, out: &mut Vec<Triangle>) {
    if depth == 0 {
        out.push(triangle);
        return;
    }
    for corner in triangle.corners() {
        subdivide(corner, depth - 1, out);
    }
}

fn subdivide_parallel(triangle: Triangle, depth: u32, threshold: u32) -> Vec<Triangle> {
    if depth < threshold {
        let mut leaves = Vec::new();
        subdivide(triangle, depth, &mut leaves);
        return leaves;
    }
    let [a, b, c] = triangle.corners();
    let (mut first, (second, third)) = rayon::join(
        || subdivide_parallel(a, depth - 1, threshold),
        || {
            rayon::join(
                || subdivide_parallel(b, depth - 1, threshold),
                || subdivide_parallel(c, depth - 1, threshold),
            )
        },
    );
    first.reserve(second.len() + third.len());
    first.extend(second);
    first.extend(third);
    first
}

/// Worker-facing fractal computation with a depth ceiling.
#[derive(Debug, Clone)]
pub struct FractalGenerator {
    max_depth: u32,
    parallel_threshold: u32,
}

impl FractalGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            parallel_threshold: PARALLEL_DEPTH_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: u32) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

impl Default for FractalGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Computation for FractalGenerator {
    type Input = FractalRequest;
    type Output = Vec<Triangle>;

    fn compute(&self, input: &FractalRequest) -> Result<Vec<Triangle>, GeometryError> {
        if input.depth > self.max_depth {
            return Err(GeometryError::invalid(format!(
                "depth {} exceeds the configured maximum of {}",
                input.depth, self.max_depth
            )));
        }
        tracing::debug!(depth = input.depth, "subdividing triangle");
        generate_parallel(&input.triangle, input.depth, self.parallel_threshold)
    }

    fn name(&self) -> &'static str {
        "FractalGenerator"
    }
}
