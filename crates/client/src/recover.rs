//! Read recovery.
//!
//! A failed read never aborts a view: the failure is logged, turned into a
//! user-facing warning, and the view renders its empty state instead.

use crate::error::ClientError;

/// Result of a read that may have been recovered from a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovered<T> {
    pub value: T,
    /// Set when `value` is a substitute for data we failed to load.
    pub warning: Option<String>,
}

impl<T> Recovered<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.warning.is_some()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Recovered<U> {
        Recovered {
            value: f(self.value),
            warning: self.warning,
        }
    }
}

impl<T: Default> Recovered<T> {
    /// Substitute `T::default()` for a failed read of `what`.
    pub fn from_result(result: Result<T, ClientError>, what: &str) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(err) => {
                tracing::warn!(error = %err, "could not load {}; showing empty result", what);
                Self {
                    value: T::default(),
                    warning: Some(format!("Could not load {}: {}", what, err)),
                }
            }
        }
    }
}
