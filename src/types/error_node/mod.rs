//! Structured error node with location, classification and nested errors.
//!
//! This module provides [`ErrorNode`], the recursive error entity:
//! - a local message plus optional severity, type, location and position
//! - [`Annotations`] for auxiliary key/value context
//! - a single wrapped node forming the causal chain
//! - an ordered list of sibling nodes for errors collected side by side
//!
//! # Examples
//!
//! ```
//! use error_stacktrace::{ErrorNode, ErrorType, Position, Severity};
//!
//! let err = ErrorNode::new("invalid type")
//!     .set_type(ErrorType::VALIDATING)
//!     .set_location("/api.raml")
//!     .set_position(Position::new(12, 3))
//!     .set_severity(Severity::ERROR)
//!     .wrap(ErrorNode::new("expected string"))
//!     .append(ErrorNode::new("unknown facet"));
//!
//! assert_eq!(
//!     err.to_string(),
//!     "validating: /api.raml:12:3: invalid type: expected string; unknown facet"
//! );
//! ```

use crate::types::alloc_type::{Arc, Box, String, Vec};
use crate::types::{Annotations, BoxError, ErrorType, Location, Position, Severity};
use alloc::string::ToString;
use core::error::Error;
use core::fmt::Arguments;

mod options;
mod render;
mod resolve;
mod traits;

pub use options::NodeOption;
pub use resolve::Chain;

/// Shared handle to the original, non-structured error a node was built from.
pub type Cause = Arc<dyn Error + Send + Sync>;

/// Error tree node with source coordinates, classification and nested errors.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct ErrorNode {
    pub(crate) severity: Option<Severity>,
    pub(crate) error_type: Option<ErrorType>,
    pub(crate) location: Option<Location>,
    pub(crate) position: Option<Position>,
    pub(crate) wrapped: Option<Box<ErrorNode>>,
    pub(crate) cause: Option<Cause>,
    pub(crate) message: String,
    pub(crate) info: Annotations,
    pub(crate) siblings: Vec<ErrorNode>,
    type_is_set: bool,
}

impl ErrorNode {
    /// Creates a node carrying only a message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), ..Self::default() }
    }

    /// Creates a node and applies `options` in order.
    pub fn with_options<I>(message: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = NodeOption>,
    {
        let mut node = Self::new(message);
        node.apply_all(options);
        node
    }

    /// Builds a node on top of an arbitrary error.
    ///
    /// When `error` already carries an [`ErrorNode`] somewhere in its source
    /// chain, the result is a new node with `message` wrapping the recovered
    /// node and inheriting its cause. Otherwise the error text is folded into
    /// the message (`"<message>: <error>"`) and the error becomes the cause.
    ///
    /// ```
    /// use error_stacktrace::ErrorNode;
    ///
    /// let plain = ErrorNode::new_wrapped("loading", "file not found", []);
    /// assert_eq!(plain.message(), "loading: file not found");
    /// assert!(plain.cause().is_some());
    ///
    /// let nested = ErrorNode::new_wrapped("loading", ErrorNode::new("bad header"), []);
    /// assert_eq!(nested.message(), "loading");
    /// assert_eq!(nested.wrapped().map(ErrorNode::message), Some("bad header"));
    /// ```
    pub fn new_wrapped<E, I>(message: impl Into<String>, error: E, options: I) -> Self
    where
        E: Into<BoxError>,
        I: IntoIterator<Item = NodeOption>,
    {
        match Self::resolve_owned(error.into()) {
            Ok(resolved) => {
                let cause = resolved.cause.clone();
                let mut node = Self::with_options(message, options).wrap(resolved);
                node.cause = cause;
                node
            },
            Err(error) => {
                let message = alloc::format!("{}: {}", message.into(), error);
                let mut node = Self::with_options(message, options);
                node.cause = Some(Arc::from(error));
                node
            },
        }
    }

    /// Turns an arbitrary error into a node without adding a level.
    ///
    /// A recovered [`ErrorNode`] receives `options` in place and is returned;
    /// any other error becomes a fresh node named after its text.
    ///
    /// ```
    /// use error_stacktrace::{ErrorNode, NodeOption};
    ///
    /// let node = ErrorNode::wrap_error(ErrorNode::new("message"), [NodeOption::location("/a.raml")]);
    /// assert_eq!(node.to_string(), "/a.raml:1: message");
    /// assert!(node.cause().is_none());
    /// ```
    pub fn wrap_error<E, I>(error: E, options: I) -> Self
    where
        E: Into<BoxError>,
        I: IntoIterator<Item = NodeOption>,
    {
        match Self::resolve_owned(error.into()) {
            Ok(mut node) => {
                node.apply_all(options);
                node
            },
            Err(error) => {
                let mut node = Self::with_options(error.to_string(), options);
                node.cause = Some(Arc::from(error));
                node
            },
        }
    }

    /// Applies a single option in place.
    #[inline]
    pub fn apply(&mut self, option: NodeOption) -> &mut Self {
        option.apply_to(self);
        self
    }

    /// Applies options in place, in order.
    pub fn apply_all<I>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = NodeOption>,
    {
        for option in options {
            option.apply_to(self);
        }
        self
    }

    #[inline]
    pub fn set_severity(mut self, severity: impl Into<Severity>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    /// Sets the type unless this node already has one, then offers the same
    /// type to the wrapped chain.
    ///
    /// Every node along the chain keeps the first type it received.
    ///
    /// ```
    /// use error_stacktrace::{ErrorNode, ErrorType};
    ///
    /// let node = ErrorNode::new("outer")
    ///     .wrap(ErrorNode::new("inner"))
    ///     .set_type(ErrorType::PARSING)
    ///     .set_type(ErrorType::VALIDATING);
    ///
    /// assert_eq!(node.error_type(), Some(&ErrorType::PARSING));
    /// assert_eq!(node.wrapped().and_then(ErrorNode::error_type), Some(&ErrorType::PARSING));
    /// ```
    #[inline]
    pub fn set_type(mut self, error_type: impl Into<ErrorType>) -> Self {
        self.assign_type(&error_type.into());
        self
    }

    #[inline]
    pub fn set_location(mut self, location: impl Into<Location>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[inline]
    pub fn set_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[inline]
    pub fn set_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the message from pre-built format arguments.
    ///
    /// ```
    /// use error_stacktrace::ErrorNode;
    ///
    /// let node = ErrorNode::default().set_message_args(format_args!("missing {} at {}", "title", 4));
    /// assert_eq!(node.message(), "missing title at 4");
    /// ```
    #[inline]
    pub fn set_message_args(mut self, args: Arguments<'_>) -> Self {
        self.message = alloc::fmt::format(args);
        self
    }

    /// Replaces the retained original error.
    #[inline]
    pub fn set_err(mut self, error: impl Into<BoxError>) -> Self {
        self.cause = Some(Arc::from(error.into()));
        self
    }

    /// Makes `child` the node this one wraps, replacing any previous one.
    #[inline]
    pub fn wrap(mut self, child: ErrorNode) -> Self {
        self.wrapped = Some(Box::new(child));
        self
    }

    /// Adds `sibling` to the end of the sibling list.
    #[inline]
    pub fn append(mut self, sibling: ErrorNode) -> Self {
        self.siblings.push(sibling);
        self
    }

    /// In-place form of [`append`](Self::append) for collecting errors in a loop.
    #[inline]
    pub fn push(&mut self, sibling: ErrorNode) {
        self.siblings.push(sibling);
    }

    pub(crate) fn assign_type(&mut self, error_type: &ErrorType) {
        let mut current = Some(self);
        while let Some(node) = current {
            if !node.type_is_set {
                node.error_type = Some(error_type.clone());
                node.type_is_set = true;
            }
            current = node.wrapped.as_deref_mut();
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn severity(&self) -> Option<&Severity> {
        self.severity.as_ref()
    }

    #[inline]
    pub fn error_type(&self) -> Option<&ErrorType> {
        self.error_type.as_ref()
    }

    /// Whether a type has been assigned to this node.
    #[inline]
    pub fn is_type_set(&self) -> bool {
        self.type_is_set
    }

    #[inline]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    #[inline]
    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    #[inline]
    pub fn info(&self) -> &Annotations {
        &self.info
    }

    #[inline]
    pub fn info_mut(&mut self) -> &mut Annotations {
        &mut self.info
    }

    /// The node this one wraps.
    #[inline]
    pub fn wrapped(&self) -> Option<&ErrorNode> {
        self.wrapped.as_deref()
    }

    #[inline]
    pub fn wrapped_mut(&mut self) -> Option<&mut ErrorNode> {
        self.wrapped.as_deref_mut()
    }

    #[inline]
    pub fn siblings(&self) -> &[ErrorNode] {
        &self.siblings
    }

    /// The original error this node was built from, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Iterates this node followed by every node of its wrap chain.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }
}
