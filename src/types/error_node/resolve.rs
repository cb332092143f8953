//! Recovering [`ErrorNode`]s from arbitrary error chains.
//!
//! Errors travel through code that knows nothing about nodes: they get
//! wrapped by `thiserror` enums, boxed, or converted. Resolution walks the
//! [`Error::source`] chain until it finds a node and rebuilds the layers above
//! it as synthetic wrapper nodes, so the structure below survives.

use super::ErrorNode;
use crate::types::alloc_type::{Arc, Cow, String};
use crate::types::BoxError;
use alloc::string::ToString;
use core::error::Error;

/// Iterator over a node and its wrap chain, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a ErrorNode>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub(crate) fn new(node: &'a ErrorNode) -> Self {
        Self { next: Some(node) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ErrorNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.wrapped();
        Some(current)
    }
}

/// Text of `layer` in front of the resolved node's message, minus the joining `": "`.
fn layer_message(layer: &(dyn Error + 'static), inner: &ErrorNode) -> String {
    let text = layer.to_string();
    let prefix = match text.find(inner.message()) {
        Some(index) => &text[..index],
        None => text.as_str(),
    };
    prefix.strip_suffix(": ").unwrap_or(prefix).to_string()
}

impl ErrorNode {
    /// Locates the nearest node in `error`'s source chain.
    ///
    /// If `error` is itself a node it is returned as is. Otherwise every
    /// layer between `error` and the first node found is rebuilt as a wrapper
    /// node whose message is the part of the layer's text that precedes the
    /// inner message. For layers that print `<text>: <source>`, the messages
    /// of the rebuilt chain joined with `": "` give back the text of `error`.
    /// Rebuilt wrappers carry no [`cause`](Self::cause). Returns `None` when
    /// the chain holds no node at all.
    ///
    /// ```
    /// use error_stacktrace::ErrorNode;
    ///
    /// #[derive(Debug)]
    /// struct Config(ErrorNode);
    ///
    /// impl std::fmt::Display for Config {
    ///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    ///         write!(f, "config: {}", self.0)
    ///     }
    /// }
    ///
    /// impl std::error::Error for Config {
    ///     fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    ///         Some(&self.0)
    ///     }
    /// }
    ///
    /// let err = Config(ErrorNode::new("missing title"));
    /// let node = ErrorNode::resolve(&err).unwrap();
    /// assert_eq!(node.message(), "config");
    /// assert_eq!(node.wrapped().unwrap().message(), "missing title");
    ///
    /// assert!(ErrorNode::resolve(&std::fmt::Error).is_none());
    /// ```
    pub fn resolve<'a>(error: &'a (dyn Error + 'static)) -> Option<Cow<'a, ErrorNode>> {
        if let Some(node) = error.downcast_ref::<ErrorNode>() {
            return Some(Cow::Borrowed(node));
        }
        let inner = Self::resolve(error.source()?)?.into_owned();
        let message = layer_message(error, &inner);
        Some(Cow::Owned(ErrorNode::new(message).wrap(inner)))
    }

    /// Owned counterpart of [`resolve`](Self::resolve).
    ///
    /// A boxed node is moved out unchanged. A rebuilt outermost wrapper keeps
    /// `error` as its cause. Unresolvable errors are handed back.
    pub(crate) fn resolve_owned(error: BoxError) -> Result<ErrorNode, BoxError> {
        let error = match error.downcast::<ErrorNode>() {
            Ok(node) => return Ok(*node),
            Err(error) => error,
        };
        let resolved = Self::resolve(&*error).map(Cow::into_owned);
        match resolved {
            Some(mut node) => {
                node.cause = Some(Arc::from(error));
                Ok(node)
            },
            None => Err(error),
        }
    }

    /// Whether this exact node (by identity, not by value) is the first node
    /// in `error`'s source chain or is wrapped by it.
    ///
    /// ```
    /// use error_stacktrace::ErrorNode;
    ///
    /// let inner = ErrorNode::new("message");
    /// let twin = ErrorNode::new("message");
    /// let outer = ErrorNode::new("outer").wrap(inner);
    ///
    /// assert!(outer.wrapped().unwrap().is(&outer));
    /// assert!(!twin.is(&outer));
    /// ```
    pub fn is(&self, error: &(dyn Error + 'static)) -> bool {
        let mut layer = Some(error);
        while let Some(current) = layer {
            if let Some(node) = current.downcast_ref::<ErrorNode>() {
                return node.chain().any(|candidate| core::ptr::eq(candidate, self));
            }
            layer = current.source();
        }
        false
    }
}
