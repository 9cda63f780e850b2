//! # mathlab-core
//!
//! Geometry value types and the two computations behind MathLab's
//! visualisations: Sierpinski triangle subdivision and function-graph
//! sampling. Everything here is synchronous and free of shared state;
//! `mathlab-worker` moves it off the caller's thread.

pub mod computation;
pub mod constants;
pub mod error;
pub mod fractal;
pub mod geometry;
pub mod sampler;

// Re-exports
pub use computation::Computation;
pub use constants::{
    exit_codes, DEFAULT_MAX_DEPTH, INVERSE_GUARD_BAND, MAX_SAMPLES_PER_PASS,
    PARALLEL_DEPTH_THRESHOLD,
};
pub use error::GeometryError;
pub use fractal::{generate, generate_parallel, FractalGenerator, FractalRequest};
pub use geometry::{Point, Triangle};
pub use sampler::{sample, FunctionSampler, GraphResult, SampleRange};

/// The triangle drawn by the front end before any subdivision.
///
/// # Example
/// ```
/// let leaves = mathlab_core::generate(&mathlab_core::default_triangle(), 2).unwrap();
/// assert_eq!(leaves.len(), 9);
/// ```
#[must_use]
pub fn default_triangle() -> Triangle {
    Triangle::new(
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(2.0, 4.0),
    )
}
