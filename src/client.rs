//! One-shot echo clients for the TCP and Unix domain socket transports.
//!
//! A client connects, sends a single message, reads a single response chunk,
//! and hands it back for printing. The single read is deliberate: this crate
//! demonstrates the minimal exchange, so a response split across deliveries
//! is captured only up to the first chunk.

use bytes::BytesMut;
use std::io;
#[cfg(unix)]
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
#[cfg(unix)]
use tokio::net::UnixStream;
use tracing::{debug, info};

/// Response buffer capacity. At most this many bytes of response are read.
pub const RESPONSE_BUFFER_SIZE: usize = 1024;

/// Connect over TCP, send `message`, and return the echoed response as text.
pub async fn run_tcp(addr: &str, message: &str) -> io::Result<String> {
    let stream = TcpStream::connect(addr).await?;
    info!(address = %addr, "Connected");

    let response = exchange(stream, message.as_bytes()).await?;
    Ok(String::from_utf8_lossy(&response).into_owned())
}

/// Connect over a Unix domain socket, send `message`, and return the echoed
/// response as text.
#[cfg(unix)]
pub async fn run_uds(path: &Path, message: &str) -> io::Result<String> {
    let stream = UnixStream::connect(path).await?;
    info!(path = %path.display(), "Connected");

    let response = exchange(stream, message.as_bytes()).await?;
    Ok(String::from_utf8_lossy(&response).into_owned())
}

/// Send one message as a single write and read one response chunk.
///
/// Exactly one read is attempted; a server that closes the connection
/// before responding yields an `UnexpectedEof` error. The connection is
/// released when the stream is dropped, on every path.
pub async fn exchange<S>(mut stream: S, message: &[u8]) -> io::Result<BytesMut>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    stream.write_all(message).await?;
    debug!(bytes = message.len(), "Sent message");

    let mut buffer = BytesMut::with_capacity(RESPONSE_BUFFER_SIZE);
    let n = stream.read_buf(&mut buffer).await?;
    if n == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "server closed the connection before responding",
        ));
    }

    debug!(bytes = n, "Received response");
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::io::Builder;

    #[tokio::test]
    async fn test_exchange_round_trip() {
        let stream = Builder::new().write(b"hello").read(b"HELLO").build();

        let response = exchange(stream, b"hello").await.unwrap();
        assert_eq!(&response[..], b"HELLO");
    }

    #[tokio::test]
    async fn test_exchange_server_closed_early() {
        let stream = Builder::new().write(b"hello").build();

        let err = exchange(stream, b"hello").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn test_exchange_write_error() {
        let stream = Builder::new()
            .write_error(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            .build();

        let err = exchange(stream, b"hello").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
