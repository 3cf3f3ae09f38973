// Run configuration for the solver binary, defaults match the plain `se_solver a b c ...` call

use std::thread;

use crate::batch::Strategy;
use crate::error::ConfigError;
use crate::solver::DEFAULT_PRECISION;

/// 17 significant digits are enough to round-trip any f64
pub const MAX_PRECISION: usize = 17;

/// threads kept free for the thread feeding the pool and the one printing results
const RESERVED_THREADS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// significant digits printed per number (default 15)
    pub precision: usize,

    /// how a batch is spread over threads
    pub strategy: Strategy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            strategy: Strategy::default(),
        }
    }
}

/// available parallelism minus the reserved threads, never below one
pub fn default_jobs() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .saturating_sub(RESERVED_THREADS)
        .max(1)
}

pub fn parse_precision(value: &str) -> Result<usize, ConfigError> {
    value
        .parse::<usize>()
        .ok()
        .filter(|digits| (1..=MAX_PRECISION).contains(digits))
        .ok_or_else(|| ConfigError::Precision(value.to_string()))
}

pub fn parse_jobs(value: &str) -> Result<usize, ConfigError> {
    value
        .parse::<usize>()
        .ok()
        .filter(|&jobs| jobs >= 1)
        .ok_or_else(|| ConfigError::Jobs(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SolverConfig::default();
        assert_eq!(15, config.precision);
        assert!(default_jobs() >= 1);
    }

    #[test]
    fn precision_bounds() {
        assert_eq!(Ok(1), parse_precision("1"));
        assert_eq!(Ok(17), parse_precision("17"));
        assert_eq!(Err(ConfigError::Precision(String::from("0"))), parse_precision("0"));
        assert!(parse_precision("18").is_err());
        assert!(parse_precision("-3").is_err());
        assert!(parse_precision("").is_err());
    }

    #[test]
    fn job_counts() {
        assert_eq!(Ok(1), parse_jobs("1"));
        assert_eq!(Ok(64), parse_jobs("64"));
        assert_eq!(Err(ConfigError::Jobs(String::from("0"))), parse_jobs("0"));
        assert!(parse_jobs("two").is_err());
    }
}
