//! Error types for the simulation core.
//!
//! Both errors are fatal to the session: an empty topology cannot be
//! sampled, and an invalid argument is a caller configuration bug. The
//! "insufficient energy" outcome is deliberately not here - it is a normal
//! branch of a cycle, recorded as a regret entry.

/// The topology has no planets (or no planets in a requested orbit) to
/// sample from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTopologyError {
    /// What was being sampled when the topology came up empty
    pub context: String,
}

impl EmptyTopologyError {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl std::fmt::Display for EmptyTopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "empty topology: {}", self.context)
    }
}

impl std::error::Error for EmptyTopologyError {}

/// An argument outside its documented domain (negative cost, decay factor
/// not in (0, 1), inverted cost range).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// Which argument was invalid and why
    pub reason: String,
}

impl InvalidArgumentError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid argument: {}", self.reason)
    }
}

impl std::error::Error for InvalidArgumentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EmptyTopologyError::new("no planets configured");
        assert_eq!(err.to_string(), "empty topology: no planets configured");

        let err = InvalidArgumentError::new("cost must be non-negative, got -1");
        assert_eq!(
            err.to_string(),
            "invalid argument: cost must be non-negative, got -1"
        );
    }
}
