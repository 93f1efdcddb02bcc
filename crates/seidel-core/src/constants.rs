//! Constants for Strassen multiplication and process exit codes.

/// Default operand size at or below which Strassen recursion stops and the
/// naive triple loop takes over.
///
/// A cutoff of 1 recurses all the way down to scalar products.
pub const DEFAULT_STRASSEN_CUTOFF: usize = 1;

/// Exit codes used by the `seidel` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed adjacency matrix or invalid configuration.
    pub const ERROR_INPUT: i32 = 4;
}
