//! CLI result presenter.

use std::time::Duration;

use mathlab_core::{FractalRequest, GraphResult, SampleRange, Triangle};
use mathlab_worker::interfaces::ResultPresenter;
use mathlab_worker::messages::{encode_response, Response};

use crate::output::{
    format_coord, format_duration, format_number, format_points, format_triangle, PREVIEW_LEN,
};
use crate::ui::{print_error, print_header};

/// Output mode of the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text.
    Text,
    /// Only counts.
    Quiet,
    /// Protocol responses as JSON.
    Json,
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    mode: OutputMode,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, mode: OutputMode) -> Self {
        Self { verbose, mode }
    }

    #[must_use]
    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_fractal(&self, request: &FractalRequest, triangles: &[Triangle], duration: Duration) {
        match self.mode {
            OutputMode::Quiet => println!("{}", triangles.len()),
            OutputMode::Json => self.present_response(&Response::fractal(triangles.to_vec())),
            OutputMode::Text => {
                print_header("Sierpinski triangle");
                println!("Input: {}", format_triangle(&request.triangle));
                println!("Depth: {}", request.depth);
                println!("Triangles: {}", format_number(triangles.len() as u64));
                println!("Duration: {}", format_duration(duration));
                let shown = if self.verbose {
                    triangles.len()
                } else {
                    triangles.len().min(PREVIEW_LEN)
                };
                for t in &triangles[..shown] {
                    println!("  {}", format_triangle(t));
                }
                if shown < triangles.len() {
                    println!("  ... {} more", triangles.len() - shown);
                }
            }
        }
    }

    fn present_graphs(&self, range: &SampleRange, graphs: &GraphResult, duration: Duration) {
        match self.mode {
            OutputMode::Quiet => println!(
                "{} {} {} {} {}",
                graphs.linear.len(),
                graphs.quadratic.len(),
                graphs.inverse_left.len(),
                graphs.inverse_right.len(),
                graphs.sqrt.len()
            ),
            OutputMode::Json => self.present_response(&Response::from(graphs.clone())),
            OutputMode::Text => {
                print_header("Function graphs");
                println!(
                    "Range: [{}, {}] step {}",
                    format_coord(range.min),
                    format_coord(range.max),
                    format_coord(range.step)
                );
                println!("Duration: {}", format_duration(duration));
                println!("linear:        {}", format_points(&graphs.linear, self.verbose));
                println!("quadratic:     {}", format_points(&graphs.quadratic, self.verbose));
                println!("inverse left:  {}", format_points(&graphs.inverse_left, self.verbose));
                println!("inverse right: {}", format_points(&graphs.inverse_right, self.verbose));
                println!("sqrt:          {}", format_points(&graphs.sqrt, self.verbose));
            }
        }
    }

    fn present_response(&self, response: &Response) {
        println!("{}", encode_response(response));
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
