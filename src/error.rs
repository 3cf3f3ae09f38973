use thiserror::Error;

use crate::config::MAX_PRECISION;

/// Rejected command line option values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid precision '{0}': expected a whole number between 1 and {max}", max = MAX_PRECISION)]
    Precision(String),
    #[error("invalid job count '{0}': expected a whole number of at least 1")]
    Jobs(String),
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to start {jobs} worker thread(s): {reason}")]
    WorkerPool { jobs: usize, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_bad_value() {
        assert_eq!(
            "invalid precision '0': expected a whole number between 1 and 17",
            ConfigError::Precision(String::from("0")).to_string()
        );
        assert_eq!(
            "invalid job count 'many': expected a whole number of at least 1",
            ConfigError::Jobs(String::from("many")).to_string()
        );
        assert_eq!(
            "failed to start 4 worker thread(s): out of threads",
            BatchError::WorkerPool {
                jobs: 4,
                reason: String::from("out of threads")
            }
            .to_string()
        );
    }
}
