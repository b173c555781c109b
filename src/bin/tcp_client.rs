//! TCP echo client binary.
//!
//! Connects, sends one message, prints the uppercased response, exits.

use clap::Parser;
use std::process::ExitCode;
use tracing::error;

use shoutback::client;
use shoutback::config::TcpClientArgs;

#[tokio::main]
async fn main() -> ExitCode {
    let args = TcpClientArgs::parse();
    shoutback::init_logging(&args.log_level);

    match client::run_tcp(&args.connect, &args.message).await {
        Ok(response) => {
            println!("{response}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Request failed");
            ExitCode::FAILURE
        }
    }
}
