use super::*;
use crate::context::{BufferContext, NullConnection};
use pretty_assertions::assert_eq;

fn bound() -> Environment {
    let mut env = Environment::new();
    env.bind(
        Arc::new(Module::new("app")),
        Arc::new(NullConnection),
        Arc::new(BufferContext::new("GET")),
    );
    env
}

#[test]
fn new_environment_is_pristine() {
    assert!(Environment::new().is_pristine());
}

#[test]
fn set_returns_displaced_value() {
    let mut env = Environment::new();
    assert_eq!(env.set("x", Value::Number(1.0)), None);
    assert_eq!(env.set("x", Value::Number(2.0)), Some(Value::Number(1.0)));
    assert_eq!(env.lookup("x"), Value::Number(2.0));
}

#[test]
fn unbound_lookup_is_null() {
    let env = Environment::new();
    assert_eq!(env.lookup("missing"), Value::Null);
    assert!(env.get("missing").is_none());
}

#[test]
fn bind_attaches_handles() {
    let env = bound();
    assert_eq!(env.module().map(|m| m.namespace()), Some("app"));
    assert!(env.connection().is_some());
    assert!(env.context().is_some());
}

#[test]
fn reset_clears_everything() {
    let mut env = bound();
    env.set("x", Value::string("kept?"));
    env.reset();
    assert!(env.is_pristine());
    assert_eq!(env.lookup("x"), Value::Null);
}
