//! MathLab library: application logic for the `mathlab` binary.

pub mod app;
pub mod config;
pub mod errors;
