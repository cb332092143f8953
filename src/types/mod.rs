//! Error types and utilities.
//!
//! This module provides the building blocks of a structured error tree:
//! source coordinates, classification tags, annotations and the
//! [`ErrorNode`] that ties them together.
//!
//! # Examples
//!
//! ```
//! use error_stacktrace::{ErrorNode, NodeOption, Position, Severity};
//!
//! let err = ErrorNode::with_options(
//!     "duplicate key",
//!     [
//!         NodeOption::location("/api.raml"),
//!         NodeOption::position(Position::new(7, 2)),
//!         NodeOption::severity(Severity::ERROR),
//!     ],
//! );
//!
//! println!("{}", err);
//! // Output: /api.raml:7:2: duplicate key
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod annotations;
pub mod classification;
pub mod error_node;
pub mod position;

pub use annotations::*;
pub use classification::*;
pub use error_node::*;
pub use position::*;

/// SmallVec-backed collection used for short sequences such as trace frames.
///
/// Uses inline storage for up to 2 elements, which covers the common case of
/// an error wrapped once.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Owned, thread-safe trait object accepted wherever an arbitrary error is wrapped.
pub type BoxError = alloc_type::Box<dyn core::error::Error + Send + Sync>;

/// Result alias that fails with an [`ErrorNode`].
pub type NodeResult<T> = Result<T, ErrorNode>;
