//! Error types used by the retry executor and the component loader.
//!
//! This module defines two main error enums:
//!
//! - [`RetryError`] — failures produced by wrapped operations and by the
//!   retry executor itself.
//! - [`LoadError`] — failures raised by the component loader's injected
//!   collaborators (fetch / install).
//!
//! Both types provide helper methods (`as_label`, `as_message`) for
//! logging/metrics, and [`RetryError`] additionally exposes
//! [`RetryError::is_retryable`].

use thiserror::Error;

/// # Failures flowing through the retry executor.
///
/// A wrapped operation fails with [`RetryError::Fail`] (retryable) or
/// [`RetryError::Strike`] (non-retryable, propagated immediately). The
/// executor itself synthesizes [`RetryError::Exhausted`] once the attempt
/// budget is consumed without success.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetryError {
    /// Failure explicitly flagged to bypass retry logic and fail immediately.
    ///
    /// The executor returns the original strike value untouched; the attempt
    /// budget is ignored.
    #[error("strike (no retry): {reason}")]
    Strike {
        /// The underlying failure description.
        reason: String,
    },

    /// Ordinary failure of one attempt; triggers another attempt while
    /// budget remains.
    #[error("attempt failed: {reason}")]
    Fail {
        /// The underlying failure description.
        reason: String,
    },

    /// Attempt budget consumed without success.
    ///
    /// Carries the configured attempt limit and the description of the last
    /// underlying failure.
    #[error("retry exceeded {attempts} attempts: {last}")]
    Exhausted {
        /// Number of attempts made (equals the configured limit).
        attempts: u32,
        /// Description of the final underlying failure.
        last: String,
    },
}

impl RetryError {
    /// Shorthand for a retryable failure.
    pub fn fail(reason: impl Into<String>) -> Self {
        RetryError::Fail {
            reason: reason.into(),
        }
    }

    /// Shorthand for a non-retryable strike failure.
    pub fn strike(reason: impl Into<String>) -> Self {
        RetryError::Strike {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use spanner::RetryError;
    ///
    /// let err = RetryError::fail("boom");
    /// assert_eq!(err.as_label(), "attempt_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RetryError::Strike { .. } => "strike",
            RetryError::Fail { .. } => "attempt_failed",
            RetryError::Exhausted { .. } => "retry_exhausted",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RetryError::Strike { reason } => format!("strike: {reason}"),
            RetryError::Fail { reason } => format!("error: {reason}"),
            RetryError::Exhausted { attempts, last } => {
                format!("exhausted after {attempts} attempts; last: {last}")
            }
        }
    }

    /// Indicates whether the error type is safe to retry.
    ///
    /// Returns `true` only for [`RetryError::Fail`].
    ///
    /// # Example
    /// ```
    /// use spanner::RetryError;
    ///
    /// assert!(RetryError::fail("boom").is_retryable());
    /// assert!(!RetryError::strike("nope").is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self, RetryError::Fail { .. })
    }
}

/// # Failures raised by the component loader's collaborators.
///
/// The loader itself never surfaces these to its caller: a failed load is
/// published as a `ComponentFailed` event and the component still counts as
/// settled (best-effort policy). The variants exist so [`Fetch`] / [`Install`]
/// implementations have a typed failure channel.
///
/// [`Fetch`]: crate::Fetch
/// [`Install`]: crate::Install
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Fetching a resource body failed (non-OK status, transport error).
    #[error("fetch failed for `{resource}`: {reason}")]
    Fetch {
        /// Path of the resource that failed to fetch.
        resource: String,
        /// The underlying failure description.
        reason: String,
    },

    /// Registering a fetched component with the page failed.
    #[error("install failed for `{component}`: {reason}")]
    Install {
        /// Name of the component that failed to install.
        component: String,
        /// The underlying failure description.
        reason: String,
    },
}

impl LoadError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            LoadError::Fetch { .. } => "load_fetch_failed",
            LoadError::Install { .. } => "load_install_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            LoadError::Fetch { resource, reason } => {
                format!("fetch `{resource}`: {reason}")
            }
            LoadError::Install { component, reason } => {
                format!("install `{component}`: {reason}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_message_contains_attempt_count() {
        let err = RetryError::Exhausted {
            attempts: 5,
            last: "attempt failed: boom".to_string(),
        };
        assert!(err.to_string().contains('5'));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(RetryError::strike("x").as_label(), "strike");
        assert_eq!(RetryError::fail("x").as_label(), "attempt_failed");
        assert_eq!(
            RetryError::Exhausted {
                attempts: 1,
                last: String::new()
            }
            .as_label(),
            "retry_exhausted"
        );
    }

    #[test]
    fn test_only_fail_is_retryable() {
        assert!(RetryError::fail("x").is_retryable());
        assert!(!RetryError::strike("x").is_retryable());
        assert!(!RetryError::Exhausted {
            attempts: 3,
            last: String::new()
        }
        .is_retryable());
    }
}
