//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_stacktrace::prelude::*;
//!
//! fn parse_port(raw: &str) -> NodeResult<u16> {
//!     raw.parse::<u16>()
//!         .wrap_err("parsing port")
//!         .with_options([NodeOption::location("/server.yaml")])
//! }
//!
//! let err = parse_port("eighty").unwrap_err();
//! assert_eq!(err.to_string(), "/server.yaml:1: parsing port: invalid digit found in string");
//! ```

// Macros
pub use crate::stacktrace;

// Core types
pub use crate::trace::{Trace, TraceOptions};
pub use crate::types::{ErrorNode, ErrorType, NodeOption, NodeResult, Position, Severity};

// Traits
pub use crate::traits::{NodeResultExt, ResultExt};
