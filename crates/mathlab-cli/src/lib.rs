//! # mathlab-cli
//!
//! CLI output, result presentation, topic badges and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CLIResultPresenter, OutputMode};
