//! One `Player` shared by many request threads.
//!
//! Verifies:
//! 1. Concurrent invocations never see each other's variables
//! 2. Every environment goes back to the pool, including after failures

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Arc;
use std::thread;

use play_eval::{
    BlockBuilder as B, BufferContext, Document, NullConnection, Outcome, PlayConfig, Player,
    PlayerBuilder, Value,
};
use play_ir::tags;
use pretty_assertions::assert_eq;

const THREADS: usize = 8;
const REQUESTS: usize = 50;

/// `GET`: copy the `id` parameter into a variable, loop a little, then echo
/// the variable. `POST`: fail halfway through.
fn player() -> Player {
    let get = B::function(
        "GET",
        Vec::<String>::new(),
        vec![
            B::set("id", B::new(tags::CTX_GET).value("VALUE", B::text("id"))),
            B::new(tags::CONTROLS_FOR)
                .field("VAR", "i")
                .value("FROM", B::number(1.0))
                .value("TO", B::number(20.0))
                .value("BY", B::number(1.0))
                .statement("DO", [B::set("scratch", B::get("i"))]),
            B::new(tags::TEXT_PRINT).value("TEXT", B::get("id")),
        ],
        Some(B::get("id").build()),
    )
    .build();
    let post = B::function(
        "POST",
        Vec::<String>::new(),
        vec![
            B::set("id", B::text("posted")),
            B::new("missing_handler"),
        ],
        None,
    )
    .build();
    PlayerBuilder::new()
        .config(PlayConfig::default().with_pool_capacity(THREADS))
        .document("svc", Document::new(vec![get, post]))
        .build()
}

#[test]
fn invocations_are_isolated_across_threads() {
    let player = player();
    thread::scope(|scope| {
        for t in 0..THREADS {
            let player = player.clone();
            scope.spawn(move || {
                for r in 0..REQUESTS {
                    let id = format!("{t}-{r}");
                    let cntx = Arc::new(BufferContext::new("GET").with_param("id", id.clone()));
                    let outcome = player
                        .execute("svc", Arc::new(NullConnection), cntx.clone())
                        .unwrap();
                    assert_eq!(outcome, Outcome::Completed(Value::from(id.as_str())));
                    assert_eq!(cntx.body(), id);
                }
            });
        }
    });
    assert!(player.pool().allocated() <= THREADS);
    assert_eq!(player.pool().idle(), player.pool().allocated());
}

#[test]
fn failures_return_environments_to_the_pool() {
    let player = player();
    thread::scope(|scope| {
        for t in 0..THREADS {
            let player = player.clone();
            scope.spawn(move || {
                for r in 0..REQUESTS {
                    let method = if (t + r) % 2 == 0 { "GET" } else { "POST" };
                    let cntx = Arc::new(BufferContext::new(method).with_param("id", "x"));
                    let outcome = player
                        .execute("svc", Arc::new(NullConnection), cntx.clone())
                        .unwrap();
                    if method == "POST" {
                        assert!(!outcome.is_completed());
                        assert_eq!(cntx.body(), "HandlerNotFound: missing_handler");
                    } else {
                        assert_eq!(cntx.body(), "x");
                    }
                }
            });
        }
    });
    assert_eq!(player.pool().idle(), player.pool().allocated());
}

#[test]
fn player_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Player>();
}
