//! # mathlab-worker
//!
//! Background workers and the tagged message protocol for the MathLab
//! computations.

pub mod interfaces;
pub mod messages;
pub mod service;
pub mod worker;

pub use interfaces::ResultPresenter;
pub use messages::{decode_request, encode_response, Job, Request, Response};
pub use service::{ServiceConfig, WorkerService};
pub use worker::{Worker, WorkerError};
