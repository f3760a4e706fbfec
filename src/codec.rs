//! `tokio_util` codec adapter (feature `async`).
//!
//! Lets the SLIP core sit in a `Framed` pipeline: one inbound chunk in
//! → zero or more packets out, one outbound packet in → one encoded
//! frame out. No framing semantics live here; everything is delegated
//! to [`Decoder`] and [`encode_into`].

use std::collections::VecDeque;

use bytes::{Bytes, BytesMut};
use tokio_util::codec;

use crate::decoder::{DecodeConfig, Decoder};
use crate::encode::{encode_into, EncodeOptions};
use crate::error::Error;

/// SLIP as a `tokio_util::codec` stage.
///
/// ```no_run
/// use slipframe::SlipCodec;
/// use tokio_util::codec::Framed;
///
/// # async fn connect(stream: tokio::io::DuplexStream) {
/// let framed = Framed::new(stream, SlipCodec::new());
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SlipCodec {
    decoder: Decoder,
    options: EncodeOptions,
    ready: VecDeque<Bytes>,
}

impl SlipCodec {
    /// Create a codec with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with explicit decoder configuration and encoder
    /// options.
    pub fn with_config(config: DecodeConfig, options: EncodeOptions) -> Self {
        Self {
            decoder: Decoder::with_config(config),
            options,
            ready: VecDeque::new(),
        }
    }

    /// Borrow the inner decoder, e.g. for diagnostics.
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }
}

impl codec::Decoder for SlipCodec {
    type Item = Bytes;
    type Error = Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Bytes>, Error> {
        if let Some(packet) = self.ready.pop_front() {
            return Ok(Some(packet));
        }
        if src.is_empty() {
            return Ok(None);
        }

        // Drain the source wholly; the core decoder owns all carry
        // state, so nothing needs to stay behind in `src`.
        let chunk = src.split();
        self.ready.extend(self.decoder.decode(&chunk));
        Ok(self.ready.pop_front())
    }
}

impl codec::Encoder<Bytes> for SlipCodec {
    type Error = Error;

    fn encode(&mut self, packet: Bytes, dst: &mut BytesMut) -> Result<(), Error> {
        encode_into(&packet, &self.options, dst);
        Ok(())
    }
}
