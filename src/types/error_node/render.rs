//! String projections of an [`ErrorNode`].
//!
//! Every projection is built from segments joined by a separator, where empty
//! segments are dropped so a partially filled node never renders dangling
//! separators.

use super::ErrorNode;
use crate::types::alloc_type::{String, Vec};
use crate::types::Position;
use alloc::string::ToString;

const SEGMENT_SEPARATOR: &str = ": ";
const SIBLING_SEPARATOR: &str = "; ";

/// Joins the non-empty segments with `separator`.
fn join_non_empty<I, S>(segments: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push_str(separator);
        }
        result.push_str(segment);
    }
    result
}

impl ErrorNode {
    /// `location:position`, or `None` when no location is set.
    ///
    /// An empty location renders as an empty string without a position.
    pub fn loc_with_pos(&self) -> Option<String> {
        let location = self.location.as_ref()?;
        if location.is_empty() {
            return Some(String::new());
        }
        Some(alloc::format!("{}:{}", location, Position::render(self.position.as_ref())))
    }

    /// `<type>: <location:position>`.
    pub fn header(&self) -> String {
        let error_type = self.error_type.as_ref().map(|t| t.as_str()).unwrap_or_default();
        let location = self.loc_with_pos().unwrap_or_default();
        join_non_empty([error_type, location.as_str()], SEGMENT_SEPARATOR)
    }

    /// `<message>: <annotations>`.
    pub fn message_with_info(&self) -> String {
        let info = self.info.to_string();
        join_non_empty([self.message.as_str(), info.as_str()], SEGMENT_SEPARATOR)
    }

    /// Header and message of this node alone, ignoring wrapped and sibling nodes.
    pub fn orig_string(&self) -> String {
        join_non_empty([self.header(), self.message_with_info()], SEGMENT_SEPARATOR)
    }

    /// [`orig_string`](Self::orig_string) of every node in the wrap chain.
    ///
    /// Unlike [`Display`](core::fmt::Display), siblings at any level are left out.
    ///
    /// ```
    /// use error_stacktrace::{ErrorNode, ErrorType};
    ///
    /// let err = ErrorNode::new("outer")
    ///     .set_type(ErrorType::VALIDATING)
    ///     .wrap(ErrorNode::new("inner").set_location("/b.raml"));
    ///
    /// assert_eq!(err.orig_string_wrapped(), "validating: outer: /b.raml:1: inner");
    /// ```
    pub fn orig_string_wrapped(&self) -> String {
        join_non_empty(self.chain().map(ErrorNode::orig_string), SEGMENT_SEPARATOR)
    }

    /// Full text: this node, its plain wrapped text, then every sibling.
    pub(crate) fn render(&self) -> String {
        let mut own = self.orig_string();
        if let Some(wrapped) = &self.wrapped {
            own = join_non_empty([own, wrapped.render()], SEGMENT_SEPARATOR);
        }
        if self.siblings.is_empty() {
            return own;
        }

        let mut items = Vec::with_capacity(self.siblings.len() + 1);
        items.push(own);
        items.extend(self.siblings.iter().map(ErrorNode::render));
        items.join(SIBLING_SEPARATOR)
    }
}
