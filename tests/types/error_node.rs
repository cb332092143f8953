use crate::support::{Context, Plain};
use error_stacktrace::{ErrorNode, ErrorType, Location, NodeOption, Position, Severity};

fn full_options() -> Vec<NodeOption> {
    vec![
        NodeOption::location("/usr/local/raml.raml"),
        NodeOption::severity(Severity::CRITICAL),
        NodeOption::position(Position::new(10, 1)),
        NodeOption::info("key", "value"),
        NodeOption::error_type(ErrorType::PARSING),
    ]
}

#[test]
fn with_options_sets_every_field() {
    let node = ErrorNode::with_options("message", full_options());

    assert_eq!(node.message(), "message");
    assert_eq!(node.location(), Some(&Location::new("/usr/local/raml.raml")));
    assert_eq!(node.severity(), Some(&Severity::CRITICAL));
    assert_eq!(node.position(), Some(&Position::new(10, 1)));
    assert_eq!(node.info().string_by("key").as_deref(), Some("value"));
    assert_eq!(node.error_type(), Some(&ErrorType::PARSING));
    assert!(node.is_type_set());
    assert!(node.cause().is_none());
}

#[test]
fn later_scalar_options_win_but_type_is_write_once() {
    let node = ErrorNode::with_options(
        "m",
        [
            NodeOption::location("/first.raml"),
            NodeOption::location("/second.raml"),
            NodeOption::severity("error"),
            NodeOption::severity("warning"),
            NodeOption::error_type("parsing"),
            NodeOption::error_type("validating"),
        ],
    );

    assert_eq!(node.location().map(Location::as_str), Some("/second.raml"));
    assert_eq!(node.severity().map(Severity::as_str), Some("warning"));
    assert_eq!(node.error_type().map(ErrorType::as_str), Some("parsing"));
}

#[test]
fn setters_chain_and_overwrite() {
    let node = ErrorNode::new("first")
        .set_severity(Severity::ERROR)
        .set_severity(Severity::WARNING)
        .set_location("/a.raml")
        .set_position(Position::new(1, 2))
        .set_message("second")
        .set_err(Plain("io"));

    assert_eq!(node.message(), "second");
    assert_eq!(node.severity(), Some(&Severity::WARNING));
    assert_eq!(node.cause().map(|c| c.to_string()).as_deref(), Some("io"));
    assert_eq!(node.to_string(), "/a.raml:1:2: second");
}

#[test]
fn set_message_args_formats() {
    let node = ErrorNode::default().set_message_args(format_args!("{} of {}", 1, "2"));
    assert_eq!(node.message(), "1 of 2");
}

#[test]
fn set_type_keeps_first_value() {
    let node = ErrorNode::new("m").set_type("type").set_type("new type");
    assert_eq!(node.error_type().map(ErrorType::as_str), Some("type"));
}

#[test]
fn set_type_propagates_to_untyped_wrapped_nodes() {
    let node = ErrorNode::new("outer")
        .wrap(ErrorNode::new("middle").wrap(ErrorNode::new("inner")))
        .set_type("new type");

    assert!(node.chain().all(|n| n.error_type().map(ErrorType::as_str) == Some("new type")));
}

#[test]
fn set_type_twice_keeps_first_value_everywhere() {
    let node = ErrorNode::new("outer")
        .wrap(ErrorNode::new("inner"))
        .set_type(ErrorType::PARSING)
        .set_type(ErrorType::VALIDATING);

    let types: Vec<_> = node.chain().filter_map(ErrorNode::error_type).collect();
    assert_eq!(types, [&ErrorType::PARSING, &ErrorType::PARSING]);
}

#[test]
fn typed_wrapped_node_keeps_its_own_type() {
    let node = ErrorNode::new("outer")
        .wrap(ErrorNode::new("inner").set_type("type 2"))
        .set_type("new type");

    assert_eq!(node.error_type().map(ErrorType::as_str), Some("new type"));
    assert_eq!(node.wrapped().and_then(ErrorNode::error_type).map(ErrorType::as_str), Some("type 2"));
}

#[test]
fn wrap_replaces_and_append_accumulates() {
    let mut node = ErrorNode::new("root")
        .wrap(ErrorNode::new("dropped"))
        .wrap(ErrorNode::new("kept"))
        .append(ErrorNode::new("s1"));
    node.push(ErrorNode::new("s2"));

    assert_eq!(node.wrapped().map(ErrorNode::message), Some("kept"));
    let siblings: Vec<_> = node.siblings().iter().map(ErrorNode::message).collect();
    assert_eq!(siblings, ["s1", "s2"]);
}

#[test]
fn apply_mutates_in_place() {
    let mut node = ErrorNode::new("m");
    node.apply(NodeOption::location("/a.raml"))
        .apply(NodeOption::info("k", 1))
        .apply_all([NodeOption::position(Position::new(2, 0))]);
    node.info_mut().add("z", error_stacktrace::AnnotationValue::new("last"));

    assert_eq!(node.to_string(), "/a.raml:2: m: k: 1: z: last");
}

#[test]
fn new_wrapped_plain_error_folds_text() {
    let node = ErrorNode::new_wrapped("message", Plain("error"), full_options());

    assert_eq!(node.message(), "message: error");
    assert_eq!(node.cause().map(|c| c.to_string()).as_deref(), Some("error"));
    assert!(node.wrapped().is_none());
    assert_eq!(node.error_type(), Some(&ErrorType::PARSING));
    assert_eq!(
        node.to_string(),
        "parsing: /usr/local/raml.raml:10:1: message: error: key: value"
    );
}

#[test]
fn new_wrapped_node_adds_level() {
    let node = ErrorNode::new_wrapped("message", ErrorNode::new("error"), []);

    assert_eq!(node.message(), "message");
    assert!(node.cause().is_none());
    assert_eq!(node.wrapped().map(ErrorNode::message), Some("error"));
}

#[test]
fn new_wrapped_recovers_node_behind_foreign_layer() {
    let err = Context::new("error", ErrorNode::new("wrapped"));
    let node = ErrorNode::new_wrapped("message", err, []);

    let messages: Vec<_> = node.chain().map(ErrorNode::message).collect();
    assert_eq!(messages, ["message", "error", "wrapped"]);
    assert_eq!(node.cause().map(|c| c.to_string()).as_deref(), Some("error: wrapped"));
    assert_eq!(node.to_string(), "message: error: wrapped");
}

#[test]
fn wrap_error_plain_error_creates_node() {
    let node = ErrorNode::wrap_error(Plain("error"), []);

    assert_eq!(node.message(), "error");
    assert!(node.cause().is_some());
}

#[test]
fn wrap_error_node_applies_options_in_place() {
    let node = ErrorNode::wrap_error(
        ErrorNode::new("message"),
        [NodeOption::location("/usr/local/raml.raml")],
    );

    assert_eq!(node.message(), "message");
    assert!(node.cause().is_none());
    assert!(node.wrapped().is_none());
    assert_eq!(node.location().map(Location::as_str), Some("/usr/local/raml.raml"));
}

#[test]
fn wrap_error_str_becomes_node() {
    let node = ErrorNode::wrap_error("boom", [NodeOption::severity(Severity::ERROR)]);
    assert_eq!(node.message(), "boom");
    assert_eq!(node.severity(), Some(&Severity::ERROR));
}

#[test]
fn from_str_and_string() {
    assert_eq!(ErrorNode::from("a").message(), "a");
    assert_eq!(ErrorNode::from(String::from("b")).message(), "b");
}
