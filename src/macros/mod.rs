//! Ergonomic macros for creating [`ErrorNode`](crate::ErrorNode)s.
//!
//! - [`macro@crate::stacktrace`] - Builds a node from a format string and an
//!   optional list of [`NodeOption`](crate::NodeOption)s.
//!
//! # Examples
//!
//! ```
//! use error_stacktrace::{stacktrace, ErrorType, NodeOption};
//!
//! let key = "title";
//! let err = stacktrace!("duplicate key '{}'", key; NodeOption::error_type(ErrorType::PARSING));
//!
//! assert_eq!(err.to_string(), "parsing: duplicate key 'title'");
//! ```

/// Creates an [`ErrorNode`](crate::ErrorNode) from a format string.
///
/// # Syntax
///
/// - `stacktrace!("fmt", args...)` - message only
/// - `stacktrace!("fmt", args...; option, option...)` - message plus options,
///   applied in order
///
/// # Examples
///
/// ```
/// use error_stacktrace::{stacktrace, NodeOption, Position};
///
/// let line = 4;
/// let plain = stacktrace!("unexpected token at line {}", line);
/// assert_eq!(plain.message(), "unexpected token at line 4");
///
/// let located = stacktrace!(
///     "unexpected token";
///     NodeOption::location("/a.raml"),
///     NodeOption::position(Position::new(line, 9)),
/// );
/// assert_eq!(located.to_string(), "/a.raml:4:9: unexpected token");
/// ```
#[macro_export]
macro_rules! stacktrace {
    ($fmt:literal $(, $arg:expr)* ; $($option:expr),+ $(,)?) => {{
        let mut node = $crate::stacktrace!($fmt $(, $arg)*);
        node.apply_all([$($option),+]);
        node
    }};
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ErrorNode::default().set_message_args(::core::format_args!($fmt $(, $arg)*))
    };
}
