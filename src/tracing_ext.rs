//! Tracing integration for error-stacktrace.
//!
//! This module reports extracted traces through the `tracing` ecosystem, one
//! event per frame, so every frame becomes a structured log record with its
//! position, severity, type and message as separate fields.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-stacktrace = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Level;

use crate::trace::{Frame, TraceOptions};
use crate::types::{ErrorNode, Severity};

/// Maps a frame severity onto a tracing level.
///
/// Unknown and missing severities are reported as errors.
pub fn severity_level(severity: Option<&Severity>) -> Level {
    match severity.map(Severity::as_str) {
        Some("warning" | "warn") => Level::WARN,
        Some("info" | "notice") => Level::INFO,
        Some("debug") => Level::DEBUG,
        _ => Level::ERROR,
    }
}

fn emit_frame(trace: usize, index: usize, frame: &Frame) {
    let error_type = frame.error_type.as_ref().map(|t| t.as_str()).unwrap_or_default();
    let severity = frame.severity.as_ref().map(Severity::as_str).unwrap_or_default();
    let position = frame.position.as_deref().unwrap_or_default();

    macro_rules! emit {
        ($level:expr) => {
            tracing::event!(
                $level,
                trace,
                frame = index,
                error_type,
                severity,
                position,
                "{}",
                frame.message
            )
        };
    }

    let level = severity_level(frame.severity.as_ref());
    if level == Level::WARN {
        emit!(Level::WARN);
    } else if level == Level::INFO {
        emit!(Level::INFO);
    } else if level == Level::DEBUG {
        emit!(Level::DEBUG);
    } else {
        emit!(Level::ERROR);
    }
}

/// Emits one event per frame of every trace of `node`.
///
/// Returns the number of events emitted.
pub fn log_node(node: &ErrorNode, options: &TraceOptions) -> usize {
    let mut emitted = 0;
    for (trace_index, trace) in node.traces(options).iter().enumerate() {
        for (frame_index, frame) in trace.iter().enumerate() {
            emit_frame(trace_index, frame_index, frame);
            emitted += 1;
        }
    }
    emitted
}

/// Logs an arbitrary error.
///
/// Errors carrying an [`ErrorNode`] are logged frame by frame through
/// [`log_node`]; anything else becomes a single error event.
///
/// # Example
///
/// ```rust
/// use error_stacktrace::tracing_ext::log_error;
/// use error_stacktrace::{ErrorNode, TraceOptions};
///
/// let err = ErrorNode::new("outer").wrap(ErrorNode::new("inner"));
/// assert_eq!(log_error(&err, &TraceOptions::default()), 2);
/// assert_eq!(log_error(&std::fmt::Error, &TraceOptions::default()), 1);
/// ```
pub fn log_error(error: &(dyn core::error::Error + 'static), options: &TraceOptions) -> usize {
    match ErrorNode::resolve(error) {
        Some(node) => log_node(&node, options),
        None => {
            tracing::error!(error = %error, "unstructured error");
            1
        },
    }
}
