//! Presentation interfaces for computation results.

use std::time::Duration;

use mathlab_core::{FractalRequest, GraphResult, SampleRange, Triangle};

use crate::messages::Response;

/// Trait for presenting computation results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the leaves of a fractal computation.
    fn present_fractal(&self, request: &FractalRequest, triangles: &[Triangle], duration: Duration);

    /// Present sampled graphs.
    fn present_graphs(&self, range: &SampleRange, graphs: &GraphResult, duration: Duration);

    /// Present a raw protocol response.
    fn present_response(&self, response: &Response);

    /// Present an error.
    fn present_error(&self, error: &str);
}
