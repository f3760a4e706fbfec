use std::io::{ErrorKind, Write};

use bytes::BytesMut;

use crate::encode::{encode_into, EncodeOptions};
use crate::error::{Error, Result};

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;

/// Writes SLIP-framed packets to any `Write` stream.
pub struct FrameWriter<T> {
    inner: T,
    buf: BytesMut,
    options: EncodeOptions,
}

impl<T: Write> FrameWriter<T> {
    /// Create a frame writer with default encoder options.
    pub fn new(inner: T) -> Self {
        Self::with_options(inner, EncodeOptions::default())
    }

    /// Create a frame writer with explicit encoder options.
    pub fn with_options(inner: T, options: EncodeOptions) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            options,
        }
    }

    /// Encode and send one packet (blocking).
    pub fn send(&mut self, packet: &[u8]) -> Result<()> {
        self.buf.clear();
        encode_into(packet, &self.options, &mut self.buf);

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(Error::StreamClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(Error::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(Error::Io(err)),
            }
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

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current encoder options.
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Mutable access to the encoder options.
    ///
    /// Takes effect from the next `send`.
    pub fn options_mut(&mut self) -> &mut EncodeOptions {
        &mut self.options
    }
}
