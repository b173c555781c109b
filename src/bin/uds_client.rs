//! Unix domain socket echo client binary.
//!
//! Connects to the server socket, sends one message, prints the uppercased
//! response, exits.

#[cfg(unix)]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    use clap::Parser;
    use std::process::ExitCode;
    use tracing::error;

    use shoutback::client;
    use shoutback::config::UdsClientArgs;

    let args = UdsClientArgs::parse();
    shoutback::init_logging(&args.log_level);

    match client::run_uds(&args.socket, &args.message).await {
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

#[cfg(not(unix))]
fn main() -> std::process::ExitCode {
    eprintln!("Unix domain sockets are not available on this platform.");
    std::process::ExitCode::FAILURE
}
