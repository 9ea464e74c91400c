//! Streaming a render into an HTTP response body.
//!
//! The render itself is synchronous, so it runs on the blocking pool and
//! pushes fixed-size chunks through a bounded channel that backs the body
//! stream. When the client goes away the receiver is dropped, the next send
//! fails with `BrokenPipe`, and the render stops.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use bytes::Bytes;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use surface_common::RenderConfig;

use crate::metrics::MetricsCollector;

/// Chunks buffered between the render task and the response.
const CHANNEL_DEPTH: usize = 8;

/// One body chunk, as the stream expects it.
pub type Chunk = Result<Bytes, io::Error>;

/// `io::Write` adapter that batches bytes into chunks on a channel.
pub struct ChunkWriter {
    tx: mpsc::Sender<Chunk>,
    buf: Vec<u8>,
    chunk_size: usize,
}

impl ChunkWriter {
    pub fn new(tx: mpsc::Sender<Chunk>, chunk_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            tx,
            buf: Vec::with_capacity(chunk_size),
            chunk_size,
        }
    }

    fn send_pending(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let chunk = Bytes::from(std::mem::replace(
            &mut self.buf,
            Vec::with_capacity(self.chunk_size),
        ));
        self.tx
            .blocking_send(Ok(chunk))
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "response body dropped"))
    }
}

impl Write for ChunkWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        if self.buf.len() >= self.chunk_size {
            self.send_pending()?;
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.send_pending()
    }
}

/// Start rendering `config` on the blocking pool and return the body that
/// streams its output.
pub fn stream_figure(
    config: RenderConfig,
    chunk_size: usize,
    metrics: Arc<MetricsCollector>,
) -> Body {
    let (tx, rx) = mpsc::channel::<Chunk>(CHANNEL_DEPTH);

    tokio::task::spawn_blocking(move || {
        let start = Instant::now();
        let writer = ChunkWriter::new(tx, chunk_size);
        let result = renderer::render_figure(&config, writer);
        let elapsed_us = start.elapsed().as_micros() as u64;

        match result {
            Ok(stats) => {
                metrics.record_render(elapsed_us, stats.polygons, true);
            }
            Err(e) if e.is_disconnect() => {
                debug!(surface = config.surface().name(), "Client disconnected mid-render");
                metrics.record_render(elapsed_us, 0, false);
            }
            Err(e) => {
                warn!(surface = config.surface().name(), error = %e, "Render failed");
                metrics.record_render(elapsed_us, 0, false);
            }
        }
    });

    let stream = futures::stream::unfold(rx, |mut rx| async move {
        rx.recv().await.map(|chunk| (chunk, rx))
    });
    Body::from_stream(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_writer_batches() {
        let (tx, mut rx) = mpsc::channel::<Chunk>(16);
        let mut writer = ChunkWriter::new(tx, 4);
        writer.write_all(b"ab").unwrap();
        assert!(rx.try_recv().is_err());
        writer.write_all(b"cdef").unwrap();
        writer.write_all(b"g").unwrap();
        writer.flush().unwrap();
        drop(writer);

        let first = rx.try_recv().unwrap().unwrap();
        let second = rx.try_recv().unwrap().unwrap();
        assert_eq!(&first[..], b"abcdef");
        assert_eq!(&second[..], b"g");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_chunk_writer_reports_dropped_receiver() {
        let (tx, rx) = mpsc::channel::<Chunk>(1);
        drop(rx);
        let mut writer = ChunkWriter::new(tx, 1);
        let err = writer.write_all(b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
