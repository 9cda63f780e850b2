//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mathlab_core::{Point, Triangle, DEFAULT_MAX_DEPTH};
use mathlab_worker::ServiceConfig;

/// MathLab: Sierpinski subdivision, function graphs and topic progress.
#[derive(Parser, Debug)]
#[command(name = "mathlab", version, about)]
pub struct AppConfig {
    /// Verbose output: every point and triangle, info-level logs.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only counts).
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print protocol responses as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the saved profile.
    #[arg(long, global = true, env = "MATHLAB_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Deepest fractal subdivision the workers accept.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH, env = "MATHLAB_MAX_DEPTH")]
    pub max_depth: u32,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Subdivide a triangle into a Sierpinski fractal.
    Fractal {
        /// Recursion depth.
        #[arg(short, long, default_value_t = 3)]
        depth: u32,

        /// Triangle vertices as x1,y1,x2,y2,x3,y3.
        #[arg(long, value_parser = parse_triangle, allow_hyphen_values = true)]
        triangle: Option<Triangle>,

        /// Write the response as JSON to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Sample the linear, quadratic, inverse and square-root functions.
    Graphs {
        /// Lower bound of the range.
        #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
        min: f64,

        /// Upper bound of the range.
        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        max: f64,

        /// Distance between samples.
        #[arg(long, default_value_t = 0.5, allow_hyphen_values = true)]
        step: f64,

        /// Write the response as JSON to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Answer newline-delimited JSON requests on stdin.
    Serve,

    /// Show or change the saved profile.
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Show users and the topic grid of the current user.
    Show,
    /// Create a user and select it.
    Create { name: String },
    /// Select an existing user.
    Select { name: String },
    /// Mark one task of a topic as done for the current user.
    Complete { topic: String },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Worker settings derived from the flags.
    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            max_depth: self.max_depth,
            ..ServiceConfig::default()
        }
    }
}

/// Parse `x1,y1,x2,y2,x3,y3` into a triangle.
fn parse_triangle(s: &str) -> Result<Triangle, String> {
    let coords = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid coordinate {part:?}: {e}"))
        })
        .collect::<Result<Vec<f64>, String>>()?;
    match coords.as_slice() {
        &[x1, y1, x2, y2, x3, y3] => Ok(Triangle::new(
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(x3, y3),
        )),
        _ => Err(format!("expected 6 coordinates, got {}", coords.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_triangle_formats() {
        let t = parse_triangle("0,0,4,0,2,4").unwrap();
        assert_eq!(t, mathlab_core::default_triangle());
        let t = parse_triangle("-1, -1, 1.5, 0, 0, 2").unwrap();
        assert_eq!(t.p1, Point::new(-1.0, -1.0));
        assert_eq!(t.p2, Point::new(1.5, 0.0));
    }

    #[test]
    fn parse_triangle_errors() {
        assert!(parse_triangle("0,0,4,0,2").is_err());
        assert!(parse_triangle("0,0,4,0,2,x").is_err());
    }

    #[test]
    fn parse_fractal_subcommand() {
        let config = AppConfig::try_parse_from(["mathlab", "fractal", "-d", "4", "-q"]).unwrap();
        assert!(config.quiet);
        match config.command {
            Some(Command::Fractal { depth, triangle, .. }) => {
                assert_eq!(depth, 4);
                assert!(triangle.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parse_negative_range() {
        let config =
            AppConfig::try_parse_from(["mathlab", "graphs", "--min", "-1", "--max", "1"]).unwrap();
        match config.command {
            Some(Command::Graphs { min, max, step, .. }) => {
                assert_eq!((min, max, step), (-1.0, 1.0, 0.5));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn negative_depth_is_rejected_by_parser() {
        assert!(AppConfig::try_parse_from(["mathlab", "fractal", "--depth", "-1"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_json() {
        assert!(AppConfig::try_parse_from(["mathlab", "-q", "--json", "serve"]).is_err());
    }

    #[test]
    fn service_config_carries_max_depth() {
        let config =
            AppConfig::try_parse_from(["mathlab", "--max-depth", "5", "serve"]).unwrap();
        assert_eq!(config.service_config().max_depth, 5);
    }
}
