//! The byte sink capability collectors write into.

use std::io::{self, ErrorKind, Write};

use bytes::{Bytes, BytesMut};

/// A one-way byte sink with an owner-driven end-of-stream signal.
///
/// Collectors call [`Sink::write`] with fully encoded bytes.
/// [`Sink::signal_end`] belongs to the collector's owner — a collector never
/// signals end-of-stream itself.
pub trait Sink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;
    fn signal_end(&mut self) -> io::Result<()>;
}

/// Blocking sink over any `Write` stream.
///
/// Retries `Interrupted` and `WouldBlock`, treats a zero-length write as a
/// closed stream, and flushes after every write so bytes reach the reader in
/// call order.
pub struct WriteSink<W> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Consume the sink and return the inner stream.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn flush_inner(&mut self) -> io::Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(err),
            }
        }
    }
}

impl<W: Write> Sink for WriteSink<W> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut offset = 0usize;
        while offset < bytes.len() {
            match self.inner.write(&bytes[offset..]) {
                Ok(0) => {
                    return Err(io::Error::new(
                        ErrorKind::WriteZero,
                        "sink closed mid-write",
                    ))
                }
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(err),
            }
        }
        self.flush_inner()
    }

    fn signal_end(&mut self) -> io::Result<()> {
        self.flush_inner()
    }
}

/// In-memory sink capturing everything written. Mostly useful in tests and
/// for embedding code that wants the encoded stream as a buffer.
#[derive(Debug, Default)]
pub struct BufferSink {
    data: BytesMut,
    ended: bool,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Whether the owner signalled end-of-stream.
    pub fn ended(&self) -> bool {
        self.ended
    }

    pub fn into_bytes(self) -> Bytes {
        self.data.freeze()
    }
}

impl Sink for BufferSink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    fn signal_end(&mut self) -> io::Result<()> {
        self.ended = true;
        Ok(())
    }
}
