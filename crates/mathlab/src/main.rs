//! MathLab: Sierpinski subdivision, function graphs and topic progress.

use std::process::ExitCode;

use mathlab_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Initialize tracing; stdout is reserved for results.
    let level = if config.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            mathlab_cli::ui::print_error(&format!("{e:#}"));
            ExitCode::from(u8::try_from(errors::exit_code(&e)).unwrap_or(1))
        }
    }
}
