//! Play command-line runner.
//!
//! Loads editor documents from JSON, registers them as modules and runs one
//! function against an in-memory request, then reports the response.

mod args;
mod run;

use std::sync::Once;

pub use args::{parse_run_args, ArgsError, RunOptions, DEFAULT_METHOD, DEFAULT_NAMESPACE};
pub use run::{parse_document, run, run_loaded, RunError, RunReport};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=play_eval=debug`.
/// With `PLAY_LOG_TREE` also set, spans are rendered as an indented call tree.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("PLAY_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
