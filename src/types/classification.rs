//! Free-form classification tags attached to an [`ErrorNode`](crate::ErrorNode).
//!
//! Both [`Severity`] and [`ErrorType`] are thin wrappers around a string so
//! tools can define their own vocabulary. A handful of common values are
//! provided as associated constants.
//!
//! # Examples
//!
//! ```
//! use error_stacktrace::{ErrorType, Severity};
//!
//! assert_eq!(Severity::ERROR.as_str(), "error");
//! assert_eq!(ErrorType::new("linting").to_string(), "linting");
//! ```

use crate::types::alloc_type::{Cow, String};
use core::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Severity tag of an error, such as `"error"` or `"critical"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Severity(Cow<'static, str>);

impl Severity {
    pub const ERROR: Self = Self(Cow::Borrowed("error"));
    pub const CRITICAL: Self = Self(Cow::Borrowed("critical"));
    pub const WARNING: Self = Self(Cow::Borrowed("warning"));

    /// Creates a severity from any string.
    #[inline]
    pub fn new(severity: impl Into<Cow<'static, str>>) -> Self {
        Self(severity.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Severity {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Severity {
    #[inline]
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Classification of an error, such as `"parsing"` or `"validating"`.
///
/// A node accepts its type only once, see
/// [`ErrorNode::set_type`](crate::ErrorNode::set_type).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ErrorType(Cow<'static, str>);

impl ErrorType {
    pub const PARSING: Self = Self(Cow::Borrowed("parsing"));
    pub const VALIDATING: Self = Self(Cow::Borrowed("validating"));
    pub const RESOLVING: Self = Self(Cow::Borrowed("resolving"));

    /// Creates an error type from any string.
    #[inline]
    pub fn new(error_type: impl Into<Cow<'static, str>>) -> Self {
        Self(error_type.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ErrorType {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ErrorType {
    #[inline]
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
