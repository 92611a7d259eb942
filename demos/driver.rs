//! Registers a couple of user routes and prints what a few paths resolve to.
//!
//! Run with `RUST_LOG=pathtrie=trace cargo run --example driver` to see the
//! trie's own events.

use pathtrie::PathTrie;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Handler = Box<dyn Fn() -> bool>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "driver=info,pathtrie=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut trie: PathTrie<Handler> = PathTrie::new();
    trie.insert("/users", Box::new(|| true))?;
    trie.insert("/users/:userId", Box::new(|| true))?;

    for path in ["/users/1", "/users/1/approve"] {
        let matched = trie.search(path);
        tracing::info!(
            path,
            handled = matched.value.map(|handler| handler()),
            params = ?matched.params,
            "searched"
        );
    }

    // rejected: the position is already bound to `userId`
    if let Err(err) = trie.insert("/users/:id/approve", Box::new(|| true)) {
        tracing::warn!(error = %err, "insert failed");
    }

    tracing::info!(routes = ?trie.routes(), "registered");
    Ok(())
}
