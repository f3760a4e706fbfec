use std::collections::VecDeque;
use std::io::{ErrorKind, Read};

use bytes::Bytes;

use crate::decoder::{DecodeConfig, Decoder};
use crate::error::{Error, Result};

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Reads complete SLIP packets from any `Read` stream.
///
/// Handles partial reads internally — callers always get complete
/// packets, however the transport fragments them.
pub struct FrameReader<T> {
    inner: T,
    decoder: Decoder,
    ready: VecDeque<Bytes>,
}

impl<T: Read> FrameReader<T> {
    /// Create a frame reader with default decoder configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, DecodeConfig::default())
    }

    /// Create a frame reader with explicit decoder configuration.
    pub fn with_config(inner: T, config: DecodeConfig) -> Self {
        Self {
            inner,
            decoder: Decoder::with_config(config),
            ready: VecDeque::new(),
        }
    }

    /// Read the next complete packet (blocking).
    ///
    /// Returns `Err(Error::StreamClosed)` when EOF is reached; a frame
    /// still unterminated at that point is discarded.
    pub fn read_packet(&mut self) -> Result<Bytes> {
        loop {
            if let Some(packet) = self.ready.pop_front() {
                return Ok(packet);
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(Error::Io(err)),
            };

            if read == 0 {
                return Err(Error::StreamClosed);
            }

            // One read may complete several packets; queue the surplus.
            self.ready.extend(self.decoder.decode(&chunk[..read]));
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Borrow the decoder, e.g. for diagnostics.
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Mutably borrow the decoder, e.g. to adjust its configuration.
    pub fn decoder_mut(&mut self) -> &mut Decoder {
        &mut self.decoder
    }
}
