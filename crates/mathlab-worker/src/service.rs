//! The pair of workers behind the message protocol.

use mathlab_core::{
    FractalGenerator, FractalRequest, FunctionSampler, GraphResult, SampleRange, Triangle,
    DEFAULT_MAX_DEPTH, PARALLEL_DEPTH_THRESHOLD,
};

use crate::messages::{decode_request, encode_response, Job, Request, Response};
use crate::worker::{Worker, WorkerError};

/// Settings for the worker pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Deepest fractal request accepted.
    pub max_depth: u32,
    /// Depth at which subdivision fans out onto the rayon pool.
    pub parallel_threshold: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            parallel_threshold: PARALLEL_DEPTH_THRESHOLD,
        }
    }
}

/// Routes protocol requests to a fractal worker and a graph worker.
///
/// The two workers are independent; a slow fractal request does not delay
/// a graph request issued from another thread.
pub struct WorkerService {
    fractal: Worker<FractalGenerator>,
    graphs: Worker<FunctionSampler>,
}

impl WorkerService {
    /// Spawn both worker threads.
    pub fn spawn(config: ServiceConfig) -> Result<Self, WorkerError> {
        let generator = FractalGenerator::new()
            .with_max_depth(config.max_depth)
            .with_parallel_threshold(config.parallel_threshold);
        Ok(Self {
            fractal: Worker::spawn(generator)?,
            graphs: Worker::spawn(FunctionSampler::new())?,
        })
    }

    /// Subdivide on the fractal worker.
    pub fn fractal(&self, request: FractalRequest) -> Result<Vec<Triangle>, WorkerError> {
        self.fractal.request(request)
    }

    /// Sample on the graph worker.
    pub fn graphs(&self, range: SampleRange) -> Result<GraphResult, WorkerError> {
        self.graphs.request(range)
    }

    /// Handle one request and return its single response.
    pub fn handle(&self, request: &Request) -> Response {
        tracing::debug!(kind = request.kind(), "dispatching request");
        let result = match request.job() {
            Ok(Job::Fractal(input)) => self.fractal(input).map(Response::fractal),
            Ok(Job::Graphs(range)) => self.graphs(range).map(Response::from),
            Err(e) => Err(e.into()),
        };
        result.unwrap_or_else(Response::from)
    }

    /// Decode a JSON request, handle it, and encode the response.
    pub fn handle_json(&self, line: &str) -> String {
        let response = match decode_request(line) {
            Ok(request) => self.handle(&request),
            Err(e) => {
                tracing::warn!(error = %e, "rejecting malformed request");
                e.into()
            }
        };
        encode_response(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathlab_core::{default_triangle, Point};

    fn service() -> WorkerService {
        WorkerService::spawn(ServiceConfig::default()).unwrap()
    }

    #[test]
    fn fractal_round_trip() {
        let response = service().handle(&Request::compute_fractal(default_triangle(), 1));
        let triangles = match response {
            Response::FractalComputed { triangles } => triangles,
            other => panic!("expected fractalComputed, got {other:?}"),
        };
        assert_eq!(triangles.len(), 3);
        let center = Triangle::new(
            Point::new(2.0, 0.0),
            Point::new(3.0, 2.0),
            Point::new(1.0, 2.0),
        );
        assert!(!triangles.contains(&center));
    }

    #[test]
    fn graphs_round_trip() {
        let response = service().handle(&Request::compute_graphs(SampleRange::new(-1.0, 1.0, 0.5)));
        let (linear, inverse, sqrt) = match response {
            Response::GraphsComputed {
                linear,
                inverse,
                sqrt,
                ..
            } => (linear, inverse, sqrt),
            other => panic!("expected graphsComputed, got {other:?}"),
        };
        assert_eq!(linear.len(), 5);
        assert_eq!(inverse.0.len(), 2);
        assert_eq!(inverse.1.len(), 2);
        assert_eq!(sqrt.len(), 3);
    }

    #[test]
    fn invalid_requests_get_error_responses() {
        let svc = service();
        let bad_step = svc.handle(&Request::compute_graphs(SampleRange::new(0.0, 1.0, -1.0)));
        assert!(bad_step.is_error());
        let bad_depth = svc.handle(&Request::ComputeFractal {
            triangle: default_triangle(),
            depth: -2.0,
        });
        assert!(bad_depth.is_error());
        // still serving afterwards
        assert!(!svc.handle(&Request::compute_fractal(default_triangle(), 2)).is_error());
    }

    #[test]
    fn depth_limit_from_config() {
        let svc = WorkerService::spawn(ServiceConfig {
            max_depth: 2,
            ..ServiceConfig::default()
        })
        .unwrap();
        assert!(svc.handle(&Request::compute_fractal(default_triangle(), 3)).is_error());
    }

    #[test]
    fn huge_finite_input_gets_decodable_replies() {
        let svc = service();
        let line = r#"{"kind":"computeFractal","triangle":{"p1":{"x":1.7e308,"y":0},"p2":{"x":1.7e308,"y":1},"p3":{"x":0,"y":0}},"depth":1}"#;
        match serde_json::from_str::<Response>(&svc.handle_json(line)).unwrap() {
            Response::FractalComputed { triangles } => {
                assert_eq!(triangles.len(), 3);
                assert!(triangles.iter().all(Triangle::is_finite));
            }
            other => panic!("expected fractalComputed, got {other:?}"),
        }

        let line = r#"{"kind":"computeGraphs","range":{"min":1e200,"max":1e200,"step":1e190}}"#;
        let reply: Response = serde_json::from_str(&svc.handle_json(line)).unwrap();
        assert!(reply.is_error());
    }

    #[test]
    fn stalled_step_gets_error_reply() {
        let svc = service();
        let reply = svc.handle(&Request::compute_graphs(SampleRange::new(-1e17, -1e17, 1.0)));
        match reply {
            Response::Error { error, .. } => assert_eq!(error, "invalidArgument"),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn json_lines() {
        let svc = service();
        let out = svc.handle_json(r#"{"kind":"computeGraphs","range":{"min":0,"max":1,"step":1}}"#);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["kind"], "graphsComputed");
        assert_eq!(value["linear"].as_array().unwrap().len(), 2);

        let out = svc.handle_json("{oops");
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["kind"], "error");
        assert_eq!(value["error"], "invalidArgument");
    }
}
