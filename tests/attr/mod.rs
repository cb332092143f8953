use crate::support::{Context, Plain};
use error_stacktrace::attr::{project_attributes, traces_to_attr, Attr, AttrValue};
use error_stacktrace::{ErrorNode, ErrorType, NodeOption, Position, Severity, TraceOptions};

fn sample() -> ErrorNode {
    ErrorNode::with_options(
        "invalid type",
        [
            NodeOption::error_type(ErrorType::VALIDATING),
            NodeOption::severity(Severity::ERROR),
            NodeOption::location("/api.raml"),
            NodeOption::position(Position::new(10, 1)),
        ],
    )
    .wrap(ErrorNode::new("expected string"))
    .append(ErrorNode::new("unknown facet").set_location("/lib.raml"))
}

#[test]
fn no_error_projects_to_empty() {
    let attr = project_attributes(None, &TraceOptions::default());
    assert!(attr.is_empty());
    assert_eq!(attr.to_string(), "");
}

#[test]
fn plain_error_projects_to_text() {
    let err = Context::new("reading", Plain("denied"));
    let attr = project_attributes(Some(&err), &TraceOptions::default());
    assert_eq!(attr, Attr::string("error", "reading: denied"));
}

#[test]
fn node_projects_to_tracebacks() {
    let err = sample();
    let attr = project_attributes(Some(&err), &TraceOptions::default());

    assert_eq!(attr.key, "tracebacks");
    let first = attr.lookup("traces.0.stack.0").unwrap();
    assert_eq!(first.get("type").and_then(Attr::as_str), Some("validating"));
    assert_eq!(first.get("severity").and_then(Attr::as_str), Some("error"));
    assert_eq!(first.get("position").and_then(Attr::as_str), Some("/api.raml:10:1"));
    assert_eq!(first.get("message").and_then(Attr::as_str), Some("invalid type"));

    let wrapped = attr.lookup("traces.0.stack.1").unwrap();
    assert_eq!(wrapped.get("message").and_then(Attr::as_str), Some("expected string"));
    assert!(wrapped.get("type").is_none());
    assert!(wrapped.get("position").is_none());
    assert!(wrapped.get("severity").is_none());

    assert_eq!(attr.lookup("traces.1.stack.0.message").and_then(Attr::as_str), Some("unknown facet"));
    assert_eq!(attr.lookup("traces.1.stack.0.position").and_then(Attr::as_str), Some("/lib.raml:1"));
    assert!(attr.lookup("traces.2").is_none());
}

#[test]
fn node_behind_foreign_layer_is_projected() {
    let err = Context::new("loading", ErrorNode::new("bad header"));
    let attr = project_attributes(Some(&err), &TraceOptions::default());

    assert_eq!(
        attr.flatten(),
        [
            ("tracebacks.traces.0.stack.0.message".to_string(), "loading".to_string()),
            ("tracebacks.traces.0.stack.1.message".to_string(), "bad header".to_string()),
        ]
    );
}

#[test]
fn projection_honours_trace_options() {
    let err = ErrorNode::new("a")
        .set_location("/a.raml")
        .append(ErrorNode::new("a again").set_location("/a.raml"));

    let all = traces_to_attr(&err, &TraceOptions::default());
    let unique = traces_to_attr(&err, &TraceOptions::new().suppress_duplicates(true));

    assert!(all.lookup("traces.1").is_some());
    assert!(unique.lookup("traces.1").is_none());
}

#[test]
fn display_is_logfmt_like() {
    let err = ErrorNode::new("bad").set_severity("warning");
    let attr = project_attributes(Some(&err), &TraceOptions::default());
    assert_eq!(
        attr.to_string(),
        "tracebacks.traces.0.stack.0.severity=warning tracebacks.traces.0.stack.0.message=bad"
    );
}

#[test]
fn lookup_on_leaf_fails() {
    let attr = Attr::string("error", "x");
    assert!(attr.lookup("error").is_none());
    assert!(attr.get("anything").is_none());
    assert_eq!(attr.value, AttrValue::String("x".into()));
}

#[cfg(feature = "serde")]
#[test]
fn serializes_as_nested_maps() {
    let err = ErrorNode::new("bad").set_type(ErrorType::PARSING);
    let attr = project_attributes(Some(&err), &TraceOptions::default());

    let json = serde_json::to_value(&attr).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "tracebacks": {
                "traces": {
                    "0": { "stack": { "0": { "type": "parsing", "message": "bad" } } }
                }
            }
        })
    );
    assert_eq!(serde_json::to_value(Attr::empty()).unwrap(), serde_json::json!({}));
}
