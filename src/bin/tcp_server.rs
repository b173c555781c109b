//! TCP echo server binary.
//!
//! Listens on `0.0.0.0:8888` by default and uppercases everything it
//! receives, one task per connection.

use clap::Parser;
use std::process::ExitCode;
use tracing::error;

use shoutback::config::TcpServerArgs;
use shoutback::server;

#[tokio::main]
async fn main() -> ExitCode {
    let args = TcpServerArgs::parse();
    shoutback::init_logging(&args.log_level);

    match server::run_tcp(&args.listen).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}
