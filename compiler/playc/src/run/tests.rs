#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::path::Path;

use pretty_assertions::assert_eq;

use super::*;

/// `GET` greets the `name` parameter as HTML; `POST` calls a function that
/// does not exist.
const GREETER: &str = r#"{
    "variables": [],
    "blocks": [
        {
            "type": "procedures_defnoreturn",
            "fields": [{"name": "NAME", "value": "GET"}],
            "mutation": {"name": "GET"},
            "statements": [{"name": "STACK", "blocks": [{
                "type": "ctx_content_type",
                "values": [{"name": "NAME", "blocks": [
                    {"type": "text", "fields": [{"name": "TEXT", "value": "HTML"}]}
                ]}],
                "next": {
                    "type": "text_print",
                    "values": [{"name": "TEXT", "blocks": [
                        {"type": "text", "fields": [{"name": "TEXT", "value": "hello "}]}
                    ]}],
                    "next": {
                        "type": "text_print",
                        "values": [{"name": "TEXT", "blocks": [{
                            "type": "ctx_get",
                            "values": [{"name": "VALUE", "blocks": [
                                {"type": "text", "fields": [{"name": "TEXT", "value": "name"}]}
                            ]}]
                        }]}]
                    }
                }
            }]}]
        },
        {
            "type": "procedures_defnoreturn",
            "fields": [{"name": "NAME", "value": "POST"}],
            "statements": [{"name": "STACK", "blocks": [
                {"type": "procedures_callnoreturn", "mutation": {"name": "missing"}}
            ]}]
        }
    ]
}"#;

/// `double(n)` in its own module.
const MATH: &str = r#"{
    "blocks": [{
        "type": "procedures_defreturn",
        "fields": [{"name": "NAME", "value": "double"}],
        "mutation": {"name": "double", "args": [{"name": "n"}]},
        "values": [{"name": "RETURN", "blocks": [{
            "type": "math_arithmetic",
            "fields": [{"name": "OP", "value": "MULTIPLY"}],
            "values": [
                {"name": "A", "blocks": [{"type": "variables_get", "fields": [{"name": "VAR", "value": "n"}]}]},
                {"name": "B", "blocks": [{"type": "math_number", "fields": [{"name": "NUM", "value": "2"}]}]}
            ]
        }]}]
    }]
}"#;

/// Prints `lib.math::double(21)`.
const CALLER: &str = r#"{
    "blocks": [{
        "type": "procedures_defnoreturn",
        "fields": [{"name": "NAME", "value": "GET"}],
        "statements": [{"name": "STACK", "blocks": [{
            "type": "text_print",
            "values": [{"name": "TEXT", "blocks": [{
                "type": "procedures_callmodule",
                "fields": [
                    {"name": "MODULE", "value": "lib.math"},
                    {"name": "NAME", "value": "double"}
                ],
                "mutation": {"name": "double", "args": [{"name": "n"}]},
                "values": [{"name": "ARG0", "blocks": [
                    {"type": "math_number", "fields": [{"name": "NUM", "value": "21"}]}
                ]}]
            }]}]
        }]}]
    }]
}"#;

fn doc(json: &str) -> Document {
    parse_document(Path::new("test.json"), json).unwrap()
}

#[test]
fn runs_the_function_named_after_the_method() {
    let mut options = RunOptions::new("greeter.json");
    options.params.push(("name".to_string(), "ada".to_string()));

    let report = run_loaded(&options, vec![("main".to_string(), doc(GREETER))]).unwrap();

    assert!(report.outcome.is_completed());
    assert_eq!(report.body, "hello ada");
    assert_eq!(report.content_type, Some(ContentType::Html));
    assert_eq!(report.status, None);
}

#[test]
fn failures_are_reported_in_the_body() {
    let mut options = RunOptions::new("greeter.json");
    options.method = "POST".to_string();

    let report = run_loaded(&options, vec![("main".to_string(), doc(GREETER))]).unwrap();

    assert_eq!(report.body, "FuncNotFoundException: missing");
    let err = report.outcome.error().unwrap();
    assert_eq!(err.message, report.body);
}

#[test]
fn explicit_function_overrides_the_method() {
    let mut options = RunOptions::new("greeter.json");
    options.method = "DELETE".to_string();
    options.function = Some("GET".to_string());
    options.params.push(("name".to_string(), "bob".to_string()));

    let report = run_loaded(&options, vec![("main".to_string(), doc(GREETER))]).unwrap();

    assert_eq!(report.outcome, Outcome::Completed(play_eval::Value::Null));
    assert_eq!(report.body, "hello bob");
}

#[test]
fn extra_modules_are_callable() {
    let options = RunOptions::new("caller.json");
    let documents = vec![
        ("main".to_string(), doc(CALLER)),
        ("lib.math".to_string(), doc(MATH)),
    ];

    let report = run_loaded(&options, documents).unwrap();

    assert_eq!(report.body, "42");
}

#[test]
fn unknown_namespace_is_an_error() {
    let mut options = RunOptions::new("greeter.json");
    options.namespace = "nowhere".to_string();

    let err = run_loaded(&options, vec![("main".to_string(), doc(GREETER))]).unwrap_err();

    assert_eq!(err.to_string(), "ASTNotFoundException: nowhere");
}

#[test]
fn invalid_json_names_the_file() {
    let err = parse_document(Path::new("broken.json"), "{\"blocks\": 3}").unwrap_err();
    assert!(matches!(err, RunError::Json { .. }));
    assert!(err.to_string().starts_with("invalid document broken.json: "));
}

#[test]
fn missing_file_is_an_io_error() {
    let options = RunOptions::new("/nonexistent/play/doc.json");
    let err = run(&options).unwrap_err();
    assert!(matches!(err, RunError::Io { .. }));
}

#[test]
fn report_renders_headers_before_body() {
    let report = RunReport {
        outcome: Outcome::Completed(play_eval::Value::Null),
        body: "moved".to_string(),
        status: Some(302),
        content_type: Some(ContentType::Text),
        redirect: Some("/login".to_string()),
        headers: vec![("X-Trace".to_string(), "1".to_string())],
    };
    assert_eq!(
        report.to_string(),
        "Status: 302\n\
         Content-Type: text/plain; charset=utf-8\n\
         Location: /login\n\
         X-Trace: 1\n\
         \n\
         moved"
    );
}
