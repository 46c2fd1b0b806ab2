//! Helpers for unit tests: build a one-module player and run it against a
//! [`BufferContext`].

use std::sync::Arc;

use play_ir::{Block, BlockBuilder, Document};
use play_value::{EvalError, Value};

use crate::context::{BufferContext, NullConnection};
use crate::player::{Outcome, Player, PlayerBuilder};

pub(crate) const NAMESPACE: &str = "test";

/// Player over one module named [`NAMESPACE`] holding `functions`.
pub(crate) fn player_with(functions: Vec<Block>) -> Player {
    PlayerBuilder::new()
        .document(NAMESPACE, Document::new(functions))
        .build()
}

/// Run `function` of [`NAMESPACE`] and return the outcome with the response.
pub(crate) fn run(player: &Player, function: &str) -> (Outcome, Arc<BufferContext>) {
    let cntx = Arc::new(BufferContext::new("GET"));
    let outcome = player
        .execute_function(NAMESPACE, function, Arc::new(NullConnection), cntx.clone())
        .unwrap_or_else(Outcome::Failed);
    (outcome, cntx)
}

/// Run a parameterless `main` with `body` and return expression `ret`.
pub(crate) fn run_main(body: Vec<Block>, ret: Option<Block>) -> (Outcome, Arc<BufferContext>) {
    let main = BlockBuilder::function("main", Vec::<String>::new(), body, ret).build();
    run(&player_with(vec![main]), "main")
}

/// Evaluate `body` for its side effects, then `expr`, returning the value.
pub(crate) fn eval_after(body: Vec<Block>, expr: impl Into<Block>) -> Result<Value, EvalError> {
    run_main(body, Some(expr.into())).0.into_result()
}

/// Evaluate a single expression.
pub(crate) fn eval(expr: impl Into<Block>) -> Result<Value, EvalError> {
    eval_after(Vec::new(), expr)
}
