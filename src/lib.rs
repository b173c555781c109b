//! shoutback: an uppercasing echo service over TCP and Unix domain sockets
//!
//! This library backs four small binaries:
//! - `shoutback-tcp-server` / `shoutback-uds-server`: accept connections and
//!   echo every received chunk back with its ASCII letters uppercased
//! - `shoutback-tcp-client` / `shoutback-uds-client`: connect, send one
//!   message, print the single response, exit
//!
//! The servers run each accepted connection on its own tokio task, so no
//! client can hold up the accept loop or any other connection. The clients
//! are straight-line one-shot programs. There is no framing, no shared
//! state, and no retry logic anywhere; a connection lives from accept (or
//! connect) until it is dropped.

pub mod client;
pub mod config;
pub mod server;

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber shared by all four binaries.
///
/// An environment filter (e.g. `RUST_LOG=debug`) takes precedence over the
/// `--log-level` flag.
pub fn init_logging(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
