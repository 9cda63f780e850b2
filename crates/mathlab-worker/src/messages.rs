//! Tagged request/response messages exchanged with the workers.
//!
//! Messages are JSON objects discriminated by a `kind` field:
//!
//! ```json
//! { "kind": "computeFractal", "triangle": { "p1": {...}, "p2": {...}, "p3": {...} }, "depth": 3 }
//! { "kind": "computeGraphs", "range": { "min": -1, "max": 1, "step": 0.5 } }
//! ```

use serde::{Deserialize, Serialize};

use mathlab_core::fractal::depth_from_f64;
use mathlab_core::{FractalRequest, GeometryError, GraphResult, Point, SampleRange, Triangle};

use crate::worker::WorkerError;

/// A request to one of the computations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Request {
    /// Subdivide `triangle` `depth` times.
    ///
    /// `depth` is carried as a JSON number and validated on receipt, so a
    /// negative or fractional depth becomes an error response instead of
    /// a decoding failure.
    ComputeFractal { triangle: Triangle, depth: f64 },
    /// Sample the four functions over `range`.
    ComputeGraphs { range: SampleRange },
}

impl Request {
    #[must_use]
    pub fn compute_fractal(triangle: Triangle, depth: u32) -> Self {
        Self::ComputeFractal {
            triangle,
            depth: f64::from(depth),
        }
    }

    #[must_use]
    pub fn compute_graphs(range: SampleRange) -> Self {
        Self::ComputeGraphs { range }
    }

    /// Validate the wire fields and return the typed computation input.
    pub fn job(&self) -> Result<Job, GeometryError> {
        match self {
            Self::ComputeFractal { triangle, depth } => {
                let depth = depth_from_f64(*depth)?;
                Ok(Job::Fractal(FractalRequest::new(*triangle, depth)))
            }
            Self::ComputeGraphs { range } => Ok(Job::Graphs(*range)),
        }
    }

    /// Message kind as it appears on the wire.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ComputeFractal { .. } => "computeFractal",
            Self::ComputeGraphs { .. } => "computeGraphs",
        }
    }
}

/// Typed input for one of the workers, decoded from a [`Request`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Job {
    Fractal(FractalRequest),
    Graphs(SampleRange),
}

/// The single reply to a [`Request`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Response {
    FractalComputed {
        triangles: Vec<Triangle>,
    },
    GraphsComputed {
        linear: Vec<Point>,
        quadratic: Vec<Point>,
        /// `[left, right]` branches of `1/x`.
        inverse: (Vec<Point>, Vec<Point>),
        sqrt: Vec<Point>,
    },
    /// The request failed; no partial result is included.
    Error { error: String, message: String },
}

/// Wire code for a worker whose thread is gone.
pub const WORKER_UNAVAILABLE: &str = "workerUnavailable";

impl Response {
    #[must_use]
    pub fn fractal(triangles: Vec<Triangle>) -> Self {
        Self::FractalComputed { triangles }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<GraphResult> for Response {
    fn from(graphs: GraphResult) -> Self {
        Self::GraphsComputed {
            linear: graphs.linear,
            quadratic: graphs.quadratic,
            inverse: (graphs.inverse_left, graphs.inverse_right),
            sqrt: graphs.sqrt,
        }
    }
}

impl From<GeometryError> for Response {
    fn from(err: GeometryError) -> Self {
        Self::Error {
            error: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<WorkerError> for Response {
    fn from(err: WorkerError) -> Self {
        match err {
            WorkerError::Computation(e) => e.into(),
            other => Self::Error {
                error: WORKER_UNAVAILABLE.to_string(),
                message: other.to_string(),
            },
        }
    }
}

/// Decode one JSON request.
///
/// Malformed input is reported as an invalid-argument error so that it can
/// be returned to the sender like any other rejected request.
pub fn decode_request(text: &str) -> Result<Request, GeometryError> {
    serde_json::from_str(text).map_err(|e| GeometryError::invalid(format!("malformed request: {e}")))
}

/// Encode a response as a single line of JSON.
#[must_use]
pub fn encode_response(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(r#"{{"kind":"error","error":"invalidArgument","message":"unencodable response: {e}"}}"#)
    })
}
