//! Foreign error types used to build source chains around nodes.

use error_stacktrace::BoxError;
use std::error::Error;
use std::fmt;

/// Error that prefixes its source's text, like `format!("{text}: {source}")`
/// in an application's own error enum.
#[derive(Debug)]
pub struct Context {
    text: String,
    source: BoxError,
}

impl Context {
    pub fn new(text: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self { text: text.into(), source: source.into() }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.text, self.source)
    }
}

impl Error for Context {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

/// Leaf error without a source.
#[derive(Debug)]
pub struct Plain(pub &'static str);

impl fmt::Display for Plain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for Plain {}
