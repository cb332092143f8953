//! Flattening an error tree into traces.
//!
//! A [`Trace`] is the linear wrap chain of one error, outermost first, with
//! every node reduced to a [`Frame`]. [`ErrorNode::traces`] produces one trace
//! for the root chain followed by the traces of each sibling, in document
//! order.
//!
//! Tools that report the same problem from several places can ask for
//! duplicate suppression: once a chain ending at some `location:position` has
//! been reported, any later node pointing at that spot drops its whole trace.
//!
//! # Examples
//!
//! ```
//! use error_stacktrace::{ErrorNode, TraceOptions};
//!
//! let err = ErrorNode::new("invalid type")
//!     .set_location("/a.raml")
//!     .wrap(ErrorNode::new("expected string").set_location("/lib.raml"))
//!     .append(ErrorNode::new("again").set_location("/lib.raml"));
//!
//! let all = err.traces(&TraceOptions::default());
//! assert_eq!(all.len(), 2);
//! assert_eq!(all[0].stack.len(), 2);
//!
//! let unique = err.traces(&TraceOptions::new().suppress_duplicates(true));
//! assert_eq!(unique.len(), 1);
//! ```

use crate::types::alloc_type::{BTreeSet, String, Vec};
use crate::types::{ErrorNode, ErrorType, ErrorVec, Severity};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of a single node inside a [`Trace`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    /// `location:position` of the node, if it has a location.
    pub position: Option<String>,
    pub severity: Option<Severity>,
    /// Message followed by rendered annotations.
    pub message: String,
    pub error_type: Option<ErrorType>,
}

impl Frame {
    /// Captures the frame of `node` alone.
    pub fn of(node: &ErrorNode) -> Self {
        Self {
            position: node.loc_with_pos(),
            severity: node.severity().cloned(),
            message: node.message_with_info(),
            error_type: node.error_type().cloned(),
        }
    }
}

/// One flattened wrap chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trace {
    pub stack: ErrorVec<Frame>,
}

impl Trace {
    #[inline]
    pub fn new() -> Self {
        Self { stack: ErrorVec::new() }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Frame> {
        self.stack.iter()
    }
}

impl FromIterator<Frame> for Trace {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self { stack: iter.into_iter().collect() }
    }
}

/// Settings for [`ErrorNode::traces`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceOptions {
    /// Drop traces of nodes whose position was already reported.
    pub suppress_duplicates: bool,
}

impl TraceOptions {
    /// Options with every behavior disabled.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn suppress_duplicates(mut self, enabled: bool) -> Self {
        self.suppress_duplicates = enabled;
        self
    }
}

/// Positions reported so far during one extraction pass.
struct Extraction<'o> {
    options: &'o TraceOptions,
    seen: BTreeSet<String>,
}

impl Extraction<'_> {
    fn collect(&mut self, node: &ErrorNode) -> Vec<Trace> {
        let mut traces = self.chain(node);
        for sibling in node.siblings() {
            traces.extend(self.collect(sibling));
        }
        traces
    }

    /// Traces of `node`'s own chain: the merged trace first, followed by the
    /// sibling traces of wrapped nodes. Empty when the chain was suppressed.
    fn chain(&mut self, node: &ErrorNode) -> Vec<Trace> {
        let frame = Frame::of(node);
        if frame.position.as_ref().is_some_and(|position| self.seen.contains(position)) {
            return Vec::new();
        }

        let Some(wrapped) = node.wrapped() else {
            if self.options.suppress_duplicates {
                if let Some(position) = &frame.position {
                    self.seen.insert(position.clone());
                }
            }
            return alloc::vec![Trace::from_iter([frame])];
        };

        let mut inner = self.collect(wrapped).into_iter();
        let Some(first) = inner.next() else {
            return Vec::new();
        };
        let mut trace = Trace::from_iter([frame]);
        trace.stack.extend(first.stack);

        let mut traces = Vec::with_capacity(inner.len() + 1);
        traces.push(trace);
        traces.extend(inner);
        traces
    }
}

impl ErrorNode {
    /// Flattens this tree into traces, see the [module docs](crate::trace).
    pub fn traces(&self, options: &TraceOptions) -> Vec<Trace> {
        Extraction { options, seen: BTreeSet::new() }.collect(self)
    }
}
