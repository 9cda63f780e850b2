//! Constants for sampling guards, recursion limits and exit codes.

/// Half-width of the band around zero excluded from the inverse function.
///
/// Samples with `-0.1 <= x <= 0.1` are dropped from both branches.
pub const INVERSE_GUARD_BAND: f64 = 0.1;

/// Depth at or above which `generate_parallel` fans out onto the rayon pool.
pub const PARALLEL_DEPTH_THRESHOLD: u32 = 6;

/// Default upper bound on fractal depth accepted by the workers.
///
/// 3^12 = 531,441 leaves, roughly 25 MB of triangles.
pub const DEFAULT_MAX_DEPTH: u32 = 12;

/// Largest number of points a single sampling pass may produce.
pub const MAX_SAMPLES_PER_PASS: usize = 1_000_000;

/// Upper bound on leaves preallocated up front by the generator.
pub(crate) const MAX_PREALLOCATED_LEAVES: usize = 1 << 20;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A computation rejected its input.
    pub const ERROR_INVALID_ARGUMENT: i32 = 2;
    /// Invalid configuration or unusable data store.
    pub const ERROR_CONFIG: i32 = 4;
}
