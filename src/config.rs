//! Command-line configuration for the echo binaries.
//!
//! Every address, path, and message has a default, so running a binary with
//! no flags gives the canonical demo behavior: a TCP server on port 8888, a
//! UDS server on `/tmp/shoutback.sock`, and clients that greet them.

use clap::Parser;
use std::path::PathBuf;

/// Default TCP listen address for the echo server.
pub const DEFAULT_TCP_LISTEN: &str = "0.0.0.0:8888";

/// Default TCP endpoint the echo client connects to.
pub const DEFAULT_TCP_CONNECT: &str = "localhost:8888";

/// Default Unix domain socket path shared by the UDS server and client.
pub const DEFAULT_SOCKET_PATH: &str = "/tmp/shoutback.sock";

/// Default message sent by the TCP client.
pub const DEFAULT_TCP_MESSAGE: &str = "hello from tcp client";

/// Default message sent by the UDS client.
pub const DEFAULT_UDS_MESSAGE: &str = "hello from uds client";

/// Command-line arguments for the TCP echo server
#[derive(Parser, Debug)]
#[command(name = "shoutback-tcp-server")]
#[command(version)]
#[command(about = "TCP echo server that uppercases everything it receives", long_about = None)]
pub struct TcpServerArgs {
    /// Address to listen on (e.g. 0.0.0.0:8888)
    #[arg(short = 'l', long, default_value = DEFAULT_TCP_LISTEN)]
    pub listen: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Command-line arguments for the TCP echo client
#[derive(Parser, Debug)]
#[command(name = "shoutback-tcp-client")]
#[command(version)]
#[command(about = "One-shot TCP echo client", long_about = None)]
pub struct TcpClientArgs {
    /// Server address to connect to (e.g. localhost:8888)
    #[arg(short = 'c', long, default_value = DEFAULT_TCP_CONNECT)]
    pub connect: String,

    /// Message to send
    #[arg(short = 'm', long, default_value = DEFAULT_TCP_MESSAGE)]
    pub message: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Command-line arguments for the Unix domain socket echo server
#[derive(Parser, Debug)]
#[command(name = "shoutback-uds-server")]
#[command(version)]
#[command(about = "Unix domain socket echo server that uppercases everything it receives", long_about = None)]
pub struct UdsServerArgs {
    /// Filesystem path for the listening socket
    #[arg(short = 's', long, default_value = DEFAULT_SOCKET_PATH)]
    pub socket: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Command-line arguments for the Unix domain socket echo client
#[derive(Parser, Debug)]
#[command(name = "shoutback-uds-client")]
#[command(version)]
#[command(about = "One-shot Unix domain socket echo client", long_about = None)]
pub struct UdsClientArgs {
    /// Filesystem path of the server socket
    #[arg(short = 's', long, default_value = DEFAULT_SOCKET_PATH)]
    pub socket: PathBuf,

    /// Message to send
    #[arg(short = 'm', long, default_value = DEFAULT_UDS_MESSAGE)]
    pub message: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_defaults() {
        let args = TcpServerArgs::try_parse_from(["shoutback-tcp-server"]).unwrap();
        assert_eq!(args.listen, DEFAULT_TCP_LISTEN);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_server_overrides() {
        let args = TcpServerArgs::try_parse_from([
            "shoutback-tcp-server",
            "--listen",
            "127.0.0.1:9000",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.listen, "127.0.0.1:9000");
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_client_defaults() {
        let args = TcpClientArgs::try_parse_from(["shoutback-tcp-client"]).unwrap();
        assert_eq!(args.connect, DEFAULT_TCP_CONNECT);
        assert_eq!(args.message, DEFAULT_TCP_MESSAGE);
    }

    #[test]
    fn test_client_short_flags() {
        let args = TcpClientArgs::try_parse_from([
            "shoutback-tcp-client",
            "-c",
            "10.0.0.1:8888",
            "-m",
            "hi there",
        ])
        .unwrap();
        assert_eq!(args.connect, "10.0.0.1:8888");
        assert_eq!(args.message, "hi there");
    }

    #[test]
    fn test_uds_socket_paths() {
        let args = UdsServerArgs::try_parse_from(["shoutback-uds-server"]).unwrap();
        assert_eq!(args.socket, PathBuf::from(DEFAULT_SOCKET_PATH));

        let args = UdsClientArgs::try_parse_from([
            "shoutback-uds-client",
            "--socket",
            "/tmp/other.sock",
        ])
        .unwrap();
        assert_eq!(args.socket, PathBuf::from("/tmp/other.sock"));
        assert_eq!(args.message, DEFAULT_UDS_MESSAGE);
    }
}
