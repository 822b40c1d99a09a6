//! Error types for lrukit.
//!
//! Cache operations themselves never fail. These types cover the two places
//! where something can be reported back:
//!
//! - [`ConfigError`]: a fallible constructor was given an unusable capacity.
//! - [`InvariantError`]: `check_invariants` found the list and the index out
//!   of step.
//!
//! ```
//! use lrukit::error::ConfigError;
//! use lrukit::policy::lru::LruCore;
//!
//! let cache: Result<LruCore<String, i32>, ConfigError> = LruCore::try_new(64);
//! assert!(cache.is_ok());
//!
//! let err = LruCore::<String, i32>::try_new(0).unwrap_err();
//! assert!(err.message().contains("capacity"));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Returned when the recency list and the key index disagree.
///
/// Carries a description of the first violation found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Returned by `try_new` / `try_build` when the configuration is unusable.
///
/// ```
/// use lrukit::builder::LruCacheBuilder;
///
/// let err = LruCacheBuilder::new(0).try_build_core::<u64, u64>().unwrap_err();
/// assert_eq!(err.to_string(), "cache capacity must be greater than zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_display_is_message() {
        let err = InvariantError::new("index has 3 entries but list has 2 nodes");
        assert_eq!(err.to_string(), "index has 3 entries but list has 2 nodes");
        assert_eq!(err.message(), "index has 3 entries but list has 2 nodes");
    }

    #[test]
    fn config_display_is_message() {
        let err = ConfigError::new("cache capacity must be greater than zero");
        assert_eq!(err.to_string(), "cache capacity must be greater than zero");
        assert!(format!("{:?}", err).contains("capacity"));
    }

    #[test]
    fn errors_clone_and_compare() {
        let a = ConfigError::new("x");
        assert_eq!(a.clone(), a);
        let b = InvariantError::new("y");
        assert_eq!(b.clone(), b);
        assert_ne!(InvariantError::new("y"), InvariantError::new("z"));
    }

    #[test]
    fn errors_box_as_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(ConfigError::new("bad"));
        assert_eq!(boxed.to_string(), "bad");
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            Box::new(InvariantError::new("broken"));
        assert_eq!(boxed.to_string(), "broken");
    }
}
