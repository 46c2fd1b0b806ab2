use super::*;
use play_value::EvalErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn push_respects_limit() {
    let mut stack = CallStack::new(Some(2));
    assert!(stack.push(CallFrame::new("m", "a")).is_ok());
    assert!(stack.push(CallFrame::new("m", "b")).is_ok());
    let err = stack.push(CallFrame::new("m", "c")).err();
    assert_eq!(err.map(|e| e.kind), Some(EvalErrorKind::StackOverflow { depth: 2 }));
    assert_eq!(stack.depth(), 2);
}

#[test]
fn unlimited_stack_never_overflows() {
    let mut stack = CallStack::new(None);
    for i in 0..5000 {
        assert!(stack.push(CallFrame::new("m", format!("f{i}"))).is_ok());
    }
    assert_eq!(stack.depth(), 5000);
}

#[test]
fn capture_is_most_recent_first() {
    let mut stack = CallStack::default();
    stack.push(CallFrame::new("shop", "main")).ok();
    stack.push(CallFrame::new("lib", "total")).ok();
    let names: Vec<_> = stack
        .capture()
        .frames()
        .iter()
        .map(|f| f.name.clone())
        .collect();
    assert_eq!(names, vec!["lib::total", "shop::main"]);
    stack.pop();
    assert_eq!(stack.current_frame().map(CallFrame::qualified_name), Some("shop::main".into()));
}

#[test]
fn attach_backtrace_skips_empty_stack() {
    let stack = CallStack::default();
    let err = stack.attach_backtrace(play_value::func_not_found("x"));
    assert_eq!(err.backtrace, None);
}
