//! Unix domain socket echo server binary.
//!
//! Listens on `/tmp/shoutback.sock` by default, removing a stale socket
//! file from a previous run before binding.

#[cfg(unix)]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    use clap::Parser;
    use std::process::ExitCode;
    use tracing::error;

    use shoutback::config::UdsServerArgs;
    use shoutback::server;

    let args = UdsServerArgs::parse();
    shoutback::init_logging(&args.log_level);

    match server::run_uds(&args.socket).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(unix))]
fn main() -> std::process::ExitCode {
    eprintln!("Unix domain sockets are not available on this platform.");
    std::process::ExitCode::FAILURE
}
