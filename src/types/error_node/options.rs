use super::ErrorNode;
use crate::types::alloc_type::String;
use crate::types::{AnnotationValue, ErrorType, Location, Position, Severity};
use core::fmt::Display;

/// A single configuration step applied while building or rewrapping a node.
///
/// Each option touches exactly one field. Options are applied in order, so a
/// later scalar option overwrites an earlier one, except for the type which a
/// node accepts only once.
///
/// ```
/// use error_stacktrace::{ErrorNode, ErrorType, NodeOption, Position};
///
/// let node = ErrorNode::with_options(
///     "unexpected key",
///     [
///         NodeOption::location("/api.raml"),
///         NodeOption::position(Position::new(3, 5)),
///         NodeOption::error_type(ErrorType::PARSING),
///         NodeOption::error_type(ErrorType::VALIDATING),
///         NodeOption::info("key", "title"),
///     ],
/// );
///
/// assert_eq!(node.error_type(), Some(&ErrorType::PARSING));
/// assert_eq!(node.to_string(), "parsing: /api.raml:3:5: unexpected key: key: title");
/// ```
#[derive(Debug, Clone)]
pub enum NodeOption {
    Info { key: String, value: AnnotationValue },
    Position(Position),
    Location(Location),
    Severity(Severity),
    Type(ErrorType),
}

impl NodeOption {
    /// Adds an annotation entry.
    #[inline]
    pub fn info<V>(key: impl Into<String>, value: V) -> Self
    where
        V: Display + Send + Sync + 'static,
    {
        Self::Info { key: key.into(), value: AnnotationValue::new(value) }
    }

    #[inline]
    pub fn position(position: Position) -> Self {
        Self::Position(position)
    }

    #[inline]
    pub fn location(location: impl Into<Location>) -> Self {
        Self::Location(location.into())
    }

    #[inline]
    pub fn severity(severity: impl Into<Severity>) -> Self {
        Self::Severity(severity.into())
    }

    /// Sets the type, respecting the node's write-once rule.
    #[inline]
    pub fn error_type(error_type: impl Into<ErrorType>) -> Self {
        Self::Type(error_type.into())
    }

    pub(crate) fn apply_to(self, node: &mut ErrorNode) {
        match self {
            Self::Info { key, value } => {
                node.info.add(key, value);
            },
            Self::Position(position) => node.position = Some(position),
            Self::Location(location) => node.location = Some(location),
            Self::Severity(severity) => node.severity = Some(severity),
            Self::Type(error_type) => node.assign_type(&error_type),
        }
    }
}
