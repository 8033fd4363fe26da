//! Tests for the tool system.

use taskwright::tools::tool::{FunctionTool, Tool, ToolExecutionContext};
use taskwright::tools::{ToolArguments, ToolParameters};

#[test]
fn parameter_builder_constructs_schema() {
    let params = ToolParameters::object()
        .string("title", "Task title", true)
        .integer("id", "Task id", false)
        .boolean("done", "Completion flag", false)
        .build();

    let schema = &params.schema;
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["title"]["type"], "string");
    assert_eq!(schema["properties"]["id"]["type"], "integer");
    assert_eq!(schema["properties"]["done"]["type"], "boolean");
    assert_eq!(schema["required"].as_array().unwrap().len(), 1);
}

#[test]
fn parameter_builder_boolean_default_is_optional() {
    let params = ToolParameters::object()
        .boolean_with_default("isComplete", "Completion flag", false)
        .build();

    assert_eq!(params.schema["properties"]["isComplete"]["default"], false);
    assert!(params.schema["required"].as_array().unwrap().is_empty());
}

#[test]
fn empty_parameters() {
    let params = ToolParameters::empty();
    assert_eq!(params.schema["type"], "object");
    assert!(params.schema["properties"].as_object().unwrap().is_empty());
}

#[test]
fn tool_arguments_required_accessors() {
    let args = ToolArguments::new(serde_json::json!({
        "title": "Buy milk",
        "id": 42,
        "isComplete": true,
    }));
    assert_eq!(args.get_str("title").unwrap(), "Buy milk");
    assert_eq!(args.get_i64("id").unwrap(), 42);
    assert!(args.get_bool("isComplete").unwrap());

    assert!(args.get_str("missing").is_err());
    assert!(args.get_i64("title").is_err());
}

#[test]
fn tool_arguments_optional_accessors() {
    let args = ToolArguments::new(serde_json::json!({"title": "x"}));
    assert_eq!(args.get_str_opt("title"), Some("x"));
    assert_eq!(args.get_str_opt("missing"), None);
    assert_eq!(args.get_i64_opt("missing"), None);
    assert_eq!(args.get_bool_opt("missing"), None);
}

#[test]
fn tool_arguments_deserialize() {
    #[derive(serde::Deserialize, PartialEq, Debug)]
    struct Params {
        title: String,
        id: Option<i64>,
    }

    let args = ToolArguments::new(serde_json::json!({"title": "read", "id": 10}));
    let params: Params = args.deserialize().unwrap();
    assert_eq!(params.title, "read");
    assert_eq!(params.id, Some(10));
}

#[tokio::test]
async fn function_tool_executes() {
    let tool = FunctionTool::new(
        "Echo",
        "Echo a value back",
        ToolParameters::object()
            .string("value", "Value to echo", true)
            .build(),
        |args, _ctx| async move {
            let value = args.get_str("value")?;
            Ok(serde_json::Value::String(format!("echo: {value}")))
        },
    );

    assert_eq!(tool.name(), "Echo");
    assert_eq!(tool.description(), "Echo a value back");

    let args = ToolArguments::new(serde_json::json!({"value": "hi"}));
    let result = tool
        .execute(&args, &ToolExecutionContext::default())
        .await
        .unwrap();
    assert_eq!(result, serde_json::Value::String("echo: hi".into()));
}
