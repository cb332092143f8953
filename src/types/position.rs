//! Source coordinates of an error.
//!
//! A [`Location`] names the document (usually a file path) and a
//! [`Position`] points into it. Rendering follows a few fixed rules:
//!
//! - the line defaults to `1` when the position is missing or its line is zero
//! - the column is appended after a `:` only when it is non-zero
//!
//! ```
//! use error_stacktrace::Position;
//!
//! assert_eq!(Position::new(10, 4).to_string(), "10:4");
//! assert_eq!(Position::new(10, 0).to_string(), "10");
//! assert_eq!(Position::new(0, 7).to_string(), "1");
//! assert_eq!(Position::render(None), "1");
//! ```

use crate::types::alloc_type::String;
use core::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Path or name of the document an error was found in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Location(String);

impl Location {
    #[inline]
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    #[inline]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Location {
    #[inline]
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Line and column where an error occurred.
///
/// Both values are 1-based; zero means "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Renders an optional position, falling back to line `1` when absent.
    pub fn render(position: Option<&Position>) -> String {
        match position {
            Some(position) => alloc::format!("{}", position),
            None => String::from("1"),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.line == 0 {
            return f.write_str("1");
        }
        write!(f, "{}", self.line)?;
        if self.column > 0 {
            write!(f, ":{}", self.column)?;
        }
        Ok(())
    }
}
