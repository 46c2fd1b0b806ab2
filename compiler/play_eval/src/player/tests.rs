#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::sync::Arc;

use play_ir::{tags, Block, BlockBuilder as B, Document, FunctionDef, Module};
use play_value::{ControlAction, EvalErrorKind, EvalResult, Value};
use pretty_assertions::assert_eq;

use super::*;
use crate::context::{BufferContext, NullConnection};

fn func(name: &str, ret: Block) -> Block {
    B::function(name, Vec::<String>::new(), Vec::<Block>::new(), Some(ret)).build()
}

fn shop() -> Document {
    Document::new(vec![
        func("GET", B::text("listing").build()),
        func("POST", B::text("created").build()),
    ])
}

fn answer(_: &mut Interpreter<'_>, _: &Block) -> EvalResult {
    Ok(Value::Number(42.0))
}

fn escape(_: &mut Interpreter<'_>, _: &Block) -> EvalResult {
    Err(ControlAction::Continue)
}

#[test]
fn execute_dispatches_on_request_method() {
    let player = PlayerBuilder::new().document("shop", shop()).build();
    for (method, expected) in [("GET", "listing"), ("POST", "created")] {
        let cntx = Arc::new(BufferContext::new(method));
        let outcome = player
            .execute("shop", Arc::new(NullConnection), cntx)
            .unwrap();
        assert_eq!(outcome, Outcome::Completed(Value::from(expected)));
    }
}

#[test]
fn unknown_namespace_leaves_response_untouched() {
    let player = PlayerBuilder::new().document("shop", shop()).build();
    let cntx = Arc::new(BufferContext::new("GET"));
    let err = player
        .execute("nowhere", Arc::new(NullConnection), cntx.clone())
        .unwrap_err();
    assert_eq!(err.message, "ASTNotFoundException: nowhere");
    assert_eq!(cntx.body(), "");
    assert_eq!(player.pool().allocated(), 0);
}

#[test]
fn unknown_entry_function_is_reported() {
    let player = PlayerBuilder::new().document("shop", shop()).build();
    let cntx = Arc::new(BufferContext::new("DELETE"));
    let outcome = player
        .execute("shop", Arc::new(NullConnection), cntx.clone())
        .unwrap();
    assert_eq!(
        outcome.error().map(|e| &e.kind),
        Some(&EvalErrorKind::FuncNotFound {
            name: "DELETE".to_string()
        })
    );
    assert_eq!(cntx.body(), "FuncNotFoundException: DELETE");
}

#[test]
fn extension_handlers_are_dispatched() {
    let main = func("main", B::new("custom_answer").build());
    let player = PlayerBuilder::new()
        .register("custom_answer", answer)
        .document("ext", Document::new(vec![main]))
        .build();
    let outcome = player
        .execute_function(
            "ext",
            "main",
            Arc::new(NullConnection),
            Arc::new(BufferContext::new("GET")),
        )
        .unwrap();
    assert_eq!(outcome.value(), Some(&Value::Number(42.0)));
}

#[test]
fn bare_player_has_no_handlers() {
    let main = func("main", B::number(1.0).build());
    let player = PlayerBuilder::bare()
        .document("ext", Document::new(vec![main]))
        .build();
    let cntx = Arc::new(BufferContext::new("GET"));
    let outcome = player
        .execute_function("ext", "main", Arc::new(NullConnection), cntx.clone())
        .unwrap();
    assert!(!outcome.is_completed());
    assert_eq!(cntx.body(), format!("HandlerNotFound: {}", tags::MATH_NUMBER));
}

#[test]
fn stray_signal_becomes_an_error() {
    let main = func("main", B::new("escape").build());
    let player = PlayerBuilder::new()
        .register("escape", escape)
        .document("ext", Document::new(vec![main]))
        .build();
    let cntx = Arc::new(BufferContext::new("GET"));
    let outcome = player
        .execute_function("ext", "main", Arc::new(NullConnection), cntx.clone())
        .unwrap();
    assert_eq!(cntx.body(), "UnhandledSignalException: continue");
    assert!(outcome.into_result().is_err());
}

#[test]
fn invoke_binds_named_arguments() {
    let echo = B::function(
        "echo",
        ["who"],
        Vec::<Block>::new(),
        Some(B::get("who").build()),
    )
    .build();
    let player = PlayerBuilder::new()
        .document("ext", Document::new(vec![echo]))
        .build();
    let outcome = player
        .invoke(
            "ext",
            "echo",
            vec![("who".to_string(), Value::from("ann"))],
            Arc::new(NullConnection),
            Arc::new(BufferContext::new("GET")),
        )
        .unwrap();
    assert_eq!(outcome.into_result().unwrap(), Value::from("ann"));
}

#[test]
fn later_module_replaces_earlier() {
    let mut first = Module::new("ns");
    first.define(FunctionDef {
        name: "f".to_string(),
        params: Vec::new(),
        body: None,
        ret: Some(B::text("first").build()),
    });
    let second = Module::from_document("ns", Document::new(vec![func("f", B::text("second").build())]));
    let player = PlayerBuilder::new().module(first).module(second).build();
    let outcome = player
        .execute_function(
            "ns",
            "f",
            Arc::new(NullConnection),
            Arc::new(BufferContext::new("GET")),
        )
        .unwrap();
    assert_eq!(outcome.value(), Some(&Value::from("second")));
    assert_eq!(player.namespaces().collect::<Vec<_>>(), vec!["ns"]);
    assert!(player.has_module("ns"));
}

#[test]
fn config_reaches_the_pool() {
    let player = PlayerBuilder::new()
        .config(PlayConfig::default().with_pool_capacity(3))
        .build();
    assert_eq!(player.pool().capacity(), 3);
    assert_eq!(player.config().pool_capacity, 3);
}
