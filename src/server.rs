//! Echo servers for the TCP and Unix domain socket transports.
//!
//! Both transports share one connection handler: read a chunk, uppercase it,
//! write it back, repeat until the peer disconnects. Every accepted
//! connection runs on its own tokio task, so a slow client never blocks the
//! accept loop or any other connection.

use bytes::BytesMut;
use std::io;
#[cfg(unix)]
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
#[cfg(unix)]
use tokio::net::UnixListener;
use tracing::{debug, error, info};

/// Read buffer size for a single connection.
pub const BUFFER_SIZE: usize = 1024;

/// Bind the TCP listener and serve echo connections forever.
///
/// Returns only if binding fails; accept failures are logged and skipped.
pub async fn run_tcp(listen: &str) -> io::Result<()> {
    let listener = TcpListener::bind(listen).await?;
    info!(address = %listen, "Server listening");

    serve_tcp(listener).await
}

/// Accept TCP connections in a loop, spawning one handler task per
/// connection.
pub async fn serve_tcp(listener: TcpListener) -> io::Result<()> {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => spawn_handler(stream, addr.to_string()),
            Err(e) => error!(error = %e, "Failed to accept connection"),
        }
    }
}

/// Bind the Unix domain socket listener and serve echo connections forever.
///
/// Returns only if socket cleanup or binding fails; accept failures are
/// logged and skipped.
#[cfg(unix)]
pub async fn run_uds(path: &Path) -> io::Result<()> {
    let listener = bind_uds(path)?;
    info!(path = %path.display(), "Server listening");

    serve_uds(listener).await
}

/// Bind a Unix domain socket listener, first removing any stale socket file
/// a previous run left behind. The platform refuses to bind over an
/// existing file, so a missing file is fine but any other removal error is
/// fatal.
#[cfg(unix)]
pub fn bind_uds(path: &Path) -> io::Result<UnixListener> {
    match std::fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "Removed stale socket file"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    UnixListener::bind(path)
}

/// Accept Unix domain socket connections in a loop, spawning one handler
/// task per connection.
#[cfg(unix)]
pub async fn serve_uds(listener: UnixListener) -> io::Result<()> {
    loop {
        match listener.accept().await {
            // UDS clients usually connect from an unnamed address
            Ok((stream, addr)) => spawn_handler(stream, format!("{addr:?}")),
            Err(e) => error!(error = %e, "Failed to accept connection"),
        }
    }
}

/// Hand a fresh connection to its own task; the accept loop moves on
/// immediately.
fn spawn_handler<S>(stream: S, peer: String)
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        info!(peer = %peer, "Client connected");

        match handle_connection(stream).await {
            Ok(()) => info!(peer = %peer, "Client disconnected"),
            Err(e) => error!(peer = %peer, error = %e, "Connection error"),
        }
    });
}

/// Handle a single client connection.
///
/// Reads chunks of up to [`BUFFER_SIZE`] bytes, uppercases each chunk in
/// place (ASCII letters only; every other byte passes through unchanged),
/// and writes it back on the same connection. Returns `Ok(())` once the
/// peer closes its end; any read or write error ends the handler and is
/// reported by the spawning task. The connection closes when the stream is
/// dropped.
pub async fn handle_connection<S>(mut stream: S) -> io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut buffer = BytesMut::with_capacity(BUFFER_SIZE);

    loop {
        buffer.clear();
        let n = stream.read_buf(&mut buffer).await?;
        if n == 0 {
            // Peer closed the connection
            return Ok(());
        }

        debug!(bytes = n, data = %String::from_utf8_lossy(&buffer), "Received");

        buffer.make_ascii_uppercase();
        stream.write_all(&buffer).await?;
    }
}
