//! CLI output formatting.

use std::io;
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use mathlab_core::{Point, Triangle};

/// Number of entries shown per sequence unless verbose.
pub const PREVIEW_LEN: usize = 5;

/// Format a coordinate without trailing zeros.
#[must_use]
pub fn format_coord(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[must_use]
pub fn format_point(p: &Point) -> String {
    format!("({}, {})", format_coord(p.x), format_coord(p.y))
}

#[must_use]
pub fn format_triangle(t: &Triangle) -> String {
    format!(
        "[{} {} {}]",
        format_point(&t.p1),
        format_point(&t.p2),
        format_point(&t.p3)
    )
}

/// Format a sequence of points, truncated to [`PREVIEW_LEN`] unless verbose.
#[must_use]
pub fn format_points(points: &[Point], verbose: bool) -> String {
    if points.is_empty() {
        return "(none)".to_string();
    }
    let shown = if verbose { points.len() } else { points.len().min(PREVIEW_LEN) };
    let mut s = points[..shown]
        .iter()
        .map(format_point)
        .collect::<Vec<_>>()
        .join(" ");
    if shown < points.len() {
        s.push_str(&format!(" ... ({} points)", points.len()));
    }
    s
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write `value` as pretty JSON to `path`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_json_to_file<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let content = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    std::fs::write(path, &content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote result file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords() {
        assert_eq!(format_coord(2.0), "2");
        assert_eq!(format_coord(-0.5), "-0.5");
        assert_eq!(format_coord(0.333_333), "0.3333");
        assert_eq!(format_coord(-0.0), "0");
    }

    #[test]
    fn point_and_triangle() {
        let t = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 4.0),
        );
        assert_eq!(format_point(&t.p3), "(2, 4)");
        assert_eq!(format_triangle(&t), "[(0, 0) (4, 0) (2, 4)]");
    }

    #[test]
    fn points_truncate() {
        let points: Vec<Point> = (0..8).map(|i| Point::new(f64::from(i), 0.0)).collect();
        let short = format_points(&points, false);
        assert!(short.ends_with("... (8 points)"));
        assert!(!short.contains("(7, 0)"));
        let full = format_points(&points, true);
        assert!(full.contains("(7, 0)"));
        assert_eq!(format_points(&[], false), "(none)");
    }

    #[test]
    fn durations() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
        assert!(format_duration(Duration::from_secs(2)).ends_with('s'));
    }

    #[test]
    fn numbers() {
        assert_eq!(format_number(6561), "6,561");
        assert_eq!(format_number(531_441), "531,441");
        assert_eq!(format_number(12), "12");
    }

    #[test]
    fn write_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        write_json_to_file(&path, &vec![Point::new(1.0, 2.0)]).unwrap();
        let back: Vec<Point> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, vec![Point::new(1.0, 2.0)]);
    }
}
