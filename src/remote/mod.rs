//! Best-effort snapshot forwarding to a remote collector.
//!
//! The local display pipeline never depends on the sink: every send is
//! fire-and-forget and a failing backend only produces log warnings in the
//! agent. The wire format is one JSON-encoded snapshot per line.

use std::io::Write;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::model::Snapshot;

/// Error types that can occur while forwarding snapshots.
#[derive(Debug, Clone)]
pub enum SinkError {
    /// Network-level failure (connect, write, timeout).
    Io(String),
    /// Snapshot could not be serialized.
    Serialize(String),
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkError::Io(msg) => write!(f, "I/O error: {}", msg),
            SinkError::Serialize(msg) => write!(f, "serialize error: {}", msg),
        }
    }
}

impl std::error::Error for SinkError {}

/// Destination for collected snapshots.
pub trait RemoteSink {
    /// Forwards one snapshot. Best-effort: a failure must not stop the
    /// collection loop.
    fn send(&mut self, snapshot: &Snapshot) -> Result<(), SinkError>;

    /// Returns `true` if the backend is currently reachable.
    fn health_check(&mut self) -> bool;
}

/// Sink that writes JSON lines over a TCP connection.
///
/// The connection is established lazily and dropped on any error, so the
/// next send retries from scratch.
pub struct TcpJsonSink {
    addr: String,
    timeout: Duration,
    stream: Option<TcpStream>,
}

impl TcpJsonSink {
    pub fn new(addr: impl Into<String>, timeout: Duration) -> Self {
        Self {
            addr: addr.into(),
            timeout,
            stream: None,
        }
    }

    fn connect(&self) -> Result<TcpStream, SinkError> {
        let mut addrs = self
            .addr
            .to_socket_addrs()
            .map_err(|e| SinkError::Io(format!("resolve {}: {}", self.addr, e)))?;
        let addr = addrs
            .next()
            .ok_or_else(|| SinkError::Io(format!("no address for {}", self.addr)))?;
        let stream = TcpStream::connect_timeout(&addr, self.timeout)
            .map_err(|e| SinkError::Io(format!("connect {}: {}", self.addr, e)))?;
        stream
            .set_write_timeout(Some(self.timeout))
            .map_err(|e| SinkError::Io(e.to_string()))?;
        Ok(stream)
    }
}

impl RemoteSink for TcpJsonSink {
    fn send(&mut self, snapshot: &Snapshot) -> Result<(), SinkError> {
        let mut payload =
            serde_json::to_vec(snapshot).map_err(|e| SinkError::Serialize(e.to_string()))?;
        payload.push(b'\n');

        if self.stream.is_none() {
            self.stream = Some(self.connect()?);
        }
        // Invariant: stream is Some here.
        let result = match self.stream.as_mut() {
            Some(stream) => stream
                .write_all(&payload)
                .and_then(|_| stream.flush())
                .map_err(|e| SinkError::Io(format!("send to {}: {}", self.addr, e))),
            None => Err(SinkError::Io("no connection".to_string())),
        };
        if result.is_err() {
            self.stream = None;
        }
        result
    }

    fn health_check(&mut self) -> bool {
        if self.stream.is_some() {
            return true;
        }
        match self.connect() {
            Ok(stream) => {
                self.stream = Some(stream);
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockProvider;
    use std::io::BufRead;
    use std::net::TcpListener;

    #[test]
    fn test_tcp_sink_sends_json_lines() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut line = String::new();
            std::io::BufReader::new(stream).read_line(&mut line).unwrap();
            line
        });

        let mut sink = TcpJsonSink::new(addr.to_string(), Duration::from_secs(1));
        let snapshot = MockProvider::snapshot(42.0, 60.0);
        sink.send(&snapshot).unwrap();
        drop(sink);

        let line = handle.join().unwrap();
        let back: Snapshot = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(back.hostname, "mockhost");
        assert_eq!(back.cpu.total, 42.0);
    }

    #[test]
    fn test_send_failure_is_reported_not_fatal() {
        // Reserved port with no listener; connect must fail cleanly.
        let mut sink = TcpJsonSink::new("127.0.0.1:1", Duration::from_millis(100));
        let snapshot = Snapshot::default();
        assert!(sink.send(&snapshot).is_err());
        assert!(!sink.health_check());
    }
}
