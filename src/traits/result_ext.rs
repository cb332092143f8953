//! Extension traits for lifting foreign `Result`s into [`ErrorNode`] results.
//!
//! # Examples
//!
//! ```
//! use error_stacktrace::traits::ResultExt;
//! use error_stacktrace::ErrorNode;
//!
//! fn read_api() -> Result<String, ErrorNode> {
//!     std::fs::read_to_string("missing-api.raml").wrap_err("reading api")
//! }
//!
//! let err = read_api().unwrap_err();
//! assert!(err.message().starts_with("reading api: "));
//! assert!(err.cause().is_some());
//! ```

use crate::types::alloc_type::String;
use crate::types::{BoxError, ErrorNode, NodeOption};

/// Extension trait for wrapping any error into an [`ErrorNode`].
///
/// When the error already carries a node in its source chain, the node
/// structure is recovered instead of flattening everything into text.
pub trait ResultExt<T, E> {
    /// Wraps the error in a node with `message`, see [`ErrorNode::new_wrapped`].
    fn wrap_err<M: Into<String>>(self, message: M) -> Result<T, ErrorNode>;

    /// Like [`wrap_err`](ResultExt::wrap_err), building the message only on error.
    fn wrap_err_with<F>(self, f: F) -> Result<T, ErrorNode>
    where
        F: FnOnce() -> String;

    /// Converts the error without adding a level, see [`ErrorNode::wrap_error`].
    fn into_node<I>(self, options: I) -> Result<T, ErrorNode>
    where
        I: IntoIterator<Item = NodeOption>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn wrap_err<M: Into<String>>(self, message: M) -> Result<T, ErrorNode> {
        self.map_err(|e| ErrorNode::new_wrapped(message, e, []))
    }

    #[inline]
    fn wrap_err_with<F>(self, f: F) -> Result<T, ErrorNode>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ErrorNode::new_wrapped(f(), e, []))
    }

    #[inline]
    fn into_node<I>(self, options: I) -> Result<T, ErrorNode>
    where
        I: IntoIterator<Item = NodeOption>,
    {
        self.map_err(|e| ErrorNode::wrap_error(e, options))
    }
}

/// Extension trait for decorating the node of an existing [`ErrorNode`] result.
///
/// ```
/// use error_stacktrace::traits::NodeResultExt;
/// use error_stacktrace::{ErrorNode, NodeOption, Position};
///
/// let result: Result<(), ErrorNode> = Err(ErrorNode::new("unknown facet"));
/// let err = result
///     .with_options([NodeOption::location("/a.raml"), NodeOption::position(Position::new(4, 2))])
///     .unwrap_err();
/// assert_eq!(err.to_string(), "/a.raml:4:2: unknown facet");
/// ```
pub trait NodeResultExt<T> {
    /// Applies `options` to the error node in place.
    fn with_options<I>(self, options: I) -> Self
    where
        I: IntoIterator<Item = NodeOption>;

    /// Wraps the error node in a new node carrying `message`.
    fn wrap_node<M: Into<String>>(self, message: M) -> Self;
}

impl<T> NodeResultExt<T> for Result<T, ErrorNode> {
    #[inline]
    fn with_options<I>(self, options: I) -> Self
    where
        I: IntoIterator<Item = NodeOption>,
    {
        self.map_err(|mut node| {
            node.apply_all(options);
            node
        })
    }

    #[inline]
    fn wrap_node<M: Into<String>>(self, message: M) -> Self {
        self.map_err(|node| ErrorNode::new(message).wrap(node))
    }
}
