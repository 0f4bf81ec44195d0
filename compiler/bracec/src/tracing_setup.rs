//! Log output for the `brace` binary.
//!
//! Off unless `BRACE_LOG` (or, failing that, `RUST_LOG`) is set, e.g.
//! `BRACE_LOG=brace_eval=trace brace run prog.br`. Spans render as an
//! indented tree on stderr so nested calls and scopes are easy to follow.

use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Primary filter variable.
pub const LOG_ENV: &str = "BRACE_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = env_filter() else {
            return;
        };
        let tree = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_indent_lines(true);
        // Another subscriber may already be installed when embedded.
        let _ = tracing_subscriber::registry().with(filter).with(tree).try_init();
    });
}

fn env_filter() -> Option<EnvFilter> {
    [LOG_ENV, "RUST_LOG"]
        .into_iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
}
