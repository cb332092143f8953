//! Extension traits for working with [`ErrorNode`](crate::ErrorNode) results.
//!
//! - [`ResultExt`]: wraps any error into a node, recovering nested nodes
//! - [`NodeResultExt`]: decorates or rewraps a node that is already there
//!
//! # Examples
//!
//! ```
//! use error_stacktrace::traits::{NodeResultExt, ResultExt};
//! use error_stacktrace::{ErrorNode, ErrorType, NodeOption};
//!
//! let parsed: Result<u32, _> = "x1".parse::<u32>();
//! let err = parsed
//!     .wrap_err("reading version")
//!     .with_options([NodeOption::error_type(ErrorType::PARSING)])
//!     .unwrap_err();
//!
//! assert_eq!(err.to_string(), "parsing: reading version: invalid digit found in string");
//! ```

pub mod result_ext;

pub use result_ext::{NodeResultExt, ResultExt};
