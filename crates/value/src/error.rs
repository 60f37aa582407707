//! Error taxonomy shared by the value services and the cursor.

use thiserror::Error;

/// Errors raised by value services, key stepping and path resolution.
///
/// Every error is local to the operation that raised it: nothing is
/// partially mutated before it is returned. Running off either end of a
/// traversal is not an error and is reported as `None` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value matches no known kind and exposes no expansion.
    #[error("value {0} matches no known kind")]
    UnclassifiableValue(String),
    /// No clone rule applies to the value.
    #[error("did not know how to clone {0}")]
    NotCloneable(String),
    /// The pair of values cannot be compared by any available rule.
    #[error("values {left} and {right} are not comparable")]
    NotComparable { left: String, right: String },
    /// The key cannot be stepped inside the given container.
    #[error("did not know how to step key {key} in {container}")]
    UnsupportedKeyStep { key: String, container: String },
    /// A map key (or foreign key) does not resolve against its container.
    #[error("key {0} not found")]
    KeyNotFound(String),
    /// A sequence index is past the end of its container.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn not_comparable(left: impl ToString, right: impl ToString) -> Self {
        Error::NotComparable {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Builds an [`Error::UnsupportedKeyStep`] from the offending pair.
    pub fn unsupported_step(key: impl ToString, container: impl ToString) -> Self {
        Error::UnsupportedKeyStep {
            key: key.to_string(),
            container: container.to_string(),
        }
    }
}
