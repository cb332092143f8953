//! Projection of errors into a nested attribute tree for structured logging.
//!
//! [`project_attributes`] turns any error into an [`Attr`]:
//!
//! - no error yields [`Attr::empty`]
//! - an error without an [`ErrorNode`] in its chain yields `error=<text>`
//! - otherwise the extracted traces are laid out as
//!   `tracebacks.traces.<n>.stack.<m>.{type,severity,position,message}`
//!
//! Frame attributes whose value is empty are left out.
//!
//! # Examples
//!
//! ```
//! use error_stacktrace::attr::project_attributes;
//! use error_stacktrace::{ErrorNode, ErrorType, TraceOptions};
//!
//! let err = ErrorNode::new("bad value").set_location("/a.raml").set_type(ErrorType::PARSING);
//! let attr = project_attributes(Some(&err), &TraceOptions::default());
//!
//! assert_eq!(
//!     attr.to_string(),
//!     "tracebacks.traces.0.stack.0.type=parsing \
//!      tracebacks.traces.0.stack.0.position=/a.raml:1 \
//!      tracebacks.traces.0.stack.0.message=\"bad value\""
//! );
//! ```

use crate::trace::{Frame, Trace, TraceOptions};
use crate::types::alloc_type::{String, Vec};
use crate::types::ErrorNode;
use alloc::string::ToString;
use core::error::Error;
use core::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Value held by an [`Attr`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttrValue {
    #[default]
    Empty,
    String(String),
    Group(Vec<Attr>),
}

/// A keyed attribute, either a string leaf or a group of nested attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attr {
    pub key: String,
    pub value: AttrValue,
}

impl Attr {
    /// The attribute with no key and no value.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: AttrValue::String(value.into()) }
    }

    #[inline]
    pub fn group(key: impl Into<String>, attrs: Vec<Attr>) -> Self {
        Self { key: key.into(), value: AttrValue::Group(attrs) }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.value == AttrValue::Empty
    }

    /// Looks up a direct child of a group by key.
    pub fn get(&self, key: &str) -> Option<&Attr> {
        match &self.value {
            AttrValue::Group(attrs) => attrs.iter().find(|attr| attr.key == key),
            _ => None,
        }
    }

    /// Looks up a nested attribute by a dotted path such as `traces.0.stack`.
    pub fn lookup(&self, path: &str) -> Option<&Attr> {
        path.split('.').try_fold(self, |attr, key| attr.get(key))
    }

    /// String value of this attribute, if it is a leaf.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            AttrValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Leaves of this attribute with their dotted key paths, in order.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut leaves = Vec::new();
        self.flatten_into(&mut String::new(), &mut leaves);
        leaves
    }

    fn flatten_into(&self, prefix: &mut String, leaves: &mut Vec<(String, String)>) {
        let restore = prefix.len();
        if !self.key.is_empty() {
            if !prefix.is_empty() {
                prefix.push('.');
            }
            prefix.push_str(&self.key);
        }
        match &self.value {
            AttrValue::Empty => {},
            AttrValue::String(value) => leaves.push((prefix.clone(), value.clone())),
            AttrValue::Group(attrs) => {
                for attr in attrs {
                    attr.flatten_into(prefix, leaves);
                }
            },
        }
        prefix.truncate(restore);
    }
}

/// `key=value` pairs separated by spaces; values containing spaces, quotes
/// or `=` are quoted.
impl Display for Attr {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for (index, (key, value)) in self.flatten().iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            if value.is_empty() || value.contains([' ', '"', '=']) {
                write!(f, "{}={:?}", key, value)?;
            } else {
                write!(f, "{}={}", key, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_unit(),
            Self::String(value) => serializer.serialize_str(value),
            Self::Group(attrs) => {
                let mut map = serializer.serialize_map(Some(attrs.len()))?;
                for attr in attrs {
                    map.serialize_entry(&attr.key, &attr.value)?;
                }
                map.end()
            },
        }
    }
}

/// Serializes as a single-entry map `{key: value}`, groups becoming nested maps.
#[cfg(feature = "serde")]
impl Serialize for Attr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_empty() {
            return serializer.serialize_map(Some(0))?.end();
        }
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}

fn frame_attr(index: usize, frame: &Frame) -> Attr {
    let mut attrs = Vec::with_capacity(4);
    let fields = [
        ("type", frame.error_type.as_ref().map(|t| t.as_str())),
        ("severity", frame.severity.as_ref().map(|s| s.as_str())),
        ("position", frame.position.as_deref()),
        ("message", Some(frame.message.as_str())),
    ];
    for (key, value) in fields {
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            attrs.push(Attr::string(key, value));
        }
    }
    Attr::group(index.to_string(), attrs)
}

fn trace_attr(index: usize, trace: &Trace) -> Attr {
    let frames = trace.iter().enumerate().map(|(i, frame)| frame_attr(i, frame)).collect();
    Attr::group(index.to_string(), alloc::vec![Attr::group("stack", frames)])
}

/// Attribute tree of the traces of `node`.
pub fn traces_to_attr(node: &ErrorNode, options: &TraceOptions) -> Attr {
    let traces = node.traces(options);
    let traces = traces.iter().enumerate().map(|(i, trace)| trace_attr(i, trace)).collect();
    Attr::group("tracebacks", alloc::vec![Attr::group("traces", traces)])
}

/// Projects an arbitrary error into an attribute tree, see the [module docs](self).
pub fn project_attributes(error: Option<&(dyn Error + 'static)>, options: &TraceOptions) -> Attr {
    let Some(error) = error else {
        return Attr::empty();
    };
    match ErrorNode::resolve(error) {
        Some(node) => traces_to_attr(&node, options),
        None => Attr::string("error", error.to_string()),
    }
}
