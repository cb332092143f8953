//! Structured error trees for tools that parse and validate documents.
//!
//! An [`ErrorNode`] carries a message with optional location, position,
//! severity, type and annotations, wraps at most one inner node and collects
//! any number of sibling nodes. The same tree can be rendered as text,
//! flattened into [`Trace`]s, or projected into an [`attr::Attr`] tree for
//! structured logging.
//!
//! # Examples
//!
//! ## Building and Rendering
//!
//! ```
//! use error_stacktrace::{ErrorNode, ErrorType, Position};
//!
//! let err = ErrorNode::new("invalid facet")
//!     .set_type(ErrorType::VALIDATING)
//!     .set_location("/api.raml")
//!     .set_position(Position::new(10, 1))
//!     .wrap(ErrorNode::new("unknown key 'min'"))
//!     .append(ErrorNode::new("missing title").set_location("/api.raml"));
//!
//! assert_eq!(
//!     err.to_string(),
//!     "validating: /api.raml:10:1: invalid facet: unknown key 'min'; /api.raml:1: missing title"
//! );
//! ```
//!
//! ## Recovering Nodes from Foreign Errors
//!
//! ```
//! use error_stacktrace::ErrorNode;
//!
//! let inner = ErrorNode::new("bad header");
//! let wrapped = ErrorNode::new_wrapped("loading", inner, []);
//! let node = ErrorNode::resolve(&wrapped).unwrap();
//! assert_eq!(node.to_string(), "loading: bad header");
//! ```
//!
//! ## Traces
//!
//! ```
//! use error_stacktrace::{ErrorNode, TraceOptions};
//!
//! let err = ErrorNode::new("outer").wrap(ErrorNode::new("inner"));
//! let traces = err.traces(&TraceOptions::default());
//! assert_eq!(traces.len(), 1);
//! assert_eq!(traces[0].stack[1].message, "inner");
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Attribute tree projection for structured logging
pub mod attr;
/// Macros for building error nodes
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Trace extraction
pub mod trace;
/// Extension traits for results
pub mod traits;
/// ErrorNode and its value types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use trace::{Frame, Trace, TraceOptions};
pub use traits::*;
pub use types::{
    AnnotationValue, Annotations, BoxError, Cause, Chain, ErrorNode, ErrorType, ErrorVec,
    Location, NodeOption, NodeResult, Position, Severity,
};
