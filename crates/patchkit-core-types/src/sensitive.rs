//! Sensitive data marker for redaction
//!
//! Mutation values aimed at sensitive properties (passwords, tokens) pass
//! through `Sensitive<T>` before they reach a log event.

use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use patchkit_core_types::Sensitive;
///
/// let password = Sensitive::new("district");
/// assert_eq!(format!("{:?}", password), "***REDACTED***");
/// assert_eq!(password.expose(), &"district");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

/// Render `value` with `{:?}`, or the redaction marker when `sensitive` is set
pub fn redacted_debug<T: fmt::Debug>(value: &T, sensitive: bool) -> String {
    if sensitive {
        format!("{:?}", Sensitive::new(value))
    } else {
        format!("{:?}", value)
    }
}
