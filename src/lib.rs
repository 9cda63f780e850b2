//! Workspace-level integration tests for MathLab.
//!
//! The tests live under `tests/`; this crate has no code of its own.
