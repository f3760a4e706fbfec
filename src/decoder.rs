use bytes::{BufMut, Bytes, BytesMut};
use tracing::warn;

use crate::{END, ESC, ESC_END, ESC_ESC};

/// Configuration for [`Decoder`].
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Suppress zero-length packets (default true).
    ///
    /// Consecutive delimiters occur routinely on real links (line
    /// noise flushes, `terminate_start` senders) and rarely carry
    /// meaning.
    pub ignore_empty_packets: bool,

    /// Scratch-buffer slack tolerated before trimming, in bytes
    /// (default 100).
    ///
    /// After one unusually large packet the decoder would otherwise
    /// retain that allocation forever. Raise this to the size of the
    /// largest expected packet when traffic alternates between big and
    /// small frames, to avoid re-allocating on every large one.
    pub max_carry_oversize: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            ignore_empty_packets: true,
            max_carry_oversize: 100,
        }
    }
}

/// Incremental SLIP decoder.
///
/// One instance per logical byte stream. Feed every chunk received on
/// that stream, in order, to [`decode`](Self::decode); packets are
/// yielded as soon as their terminating [`END`] is seen, and a packet
/// split across chunk boundaries (even mid-escape-sequence) is
/// reassembled across calls.
///
/// Not for concurrent use: calls on one instance must be serialized,
/// and feeding chunks out of order corrupts the escape/carry state.
/// Dropping a decoder discards any in-flight partial packet.
#[derive(Debug)]
pub struct Decoder {
    /// Bytes of the packet currently being assembled.
    carry: BytesMut,
    /// The previous byte was ESC and its successor is still pending.
    esc: bool,
    invalid_escapes: u64,
    config: DecodeConfig,
}

impl Decoder {
    /// Create a decoder with default configuration.
    pub fn new() -> Self {
        Self::with_config(DecodeConfig::default())
    }

    /// Create a decoder with explicit configuration.
    pub fn with_config(config: DecodeConfig) -> Self {
        Self {
            carry: BytesMut::new(),
            esc: false,
            invalid_escapes: 0,
            config,
        }
    }

    /// Decode one chunk, yielding the packets completed within it.
    ///
    /// The returned iterator is lazy: each packet is produced when its
    /// terminating [`END`] is consumed, and decoder state advances as
    /// the iterator is driven. Iterate to completion (`for`, `collect`,
    /// `extend`) — dropping the iterator early leaves the unread tail
    /// of `chunk` unprocessed, though the decoder remains consistent
    /// with the bytes actually consumed.
    ///
    /// Yielded packets are independent copies; they never alias the
    /// decoder's scratch buffer and may outlive it.
    pub fn decode<'d, 'c>(&'d mut self, chunk: &'c [u8]) -> Packets<'d, 'c> {
        // Worst case the whole chunk joins the carry.
        self.carry.reserve(chunk.len());
        Packets {
            decoder: self,
            chunk,
            pos: 0,
        }
    }

    /// Discard any in-flight partial packet and escape state.
    ///
    /// Configuration and diagnostics are kept.
    pub fn reset(&mut self) {
        self.carry.clear();
        self.esc = false;
    }

    /// Number of assembled bytes awaiting their delimiter.
    pub fn carry_len(&self) -> usize {
        self.carry.len()
    }

    /// Capacity currently retained by the scratch buffer.
    ///
    /// Stays within [`DecodeConfig::max_carry_oversize`] of the carry
    /// once a `decode` call completes.
    pub fn carry_capacity(&self) -> usize {
        self.carry.capacity()
    }

    /// Invalid escape codes seen on this stream so far.
    ///
    /// Each occurrence is also reported through `tracing` at WARN
    /// level as it is consumed.
    pub fn invalid_escape_count(&self) -> u64 {
        self.invalid_escapes
    }

    /// Current decoder configuration.
    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    ///
    /// Takes effect from the next `decode` call.
    pub fn config_mut(&mut self) -> &mut DecodeConfig {
        &mut self.config
    }

    /// Drop the scratch allocation down to the carry when the slack
    /// exceeds the configured oversize.
    fn trim_carry(&mut self) {
        if self.carry.capacity() - self.carry.len() > self.config.max_carry_oversize {
            let mut trimmed = BytesMut::with_capacity(self.carry.len());
            trimmed.extend_from_slice(&self.carry);
            self.carry = trimmed;
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over the packets completed within one chunk.
///
/// Returned by [`Decoder::decode`]. Holds the decoder mutably for the
/// duration of the call; re-iterating is not possible because each
/// item reflects a state transition of the decoder.
#[must_use = "packets are decoded lazily; drive the iterator to decode the chunk"]
pub struct Packets<'d, 'c> {
    decoder: &'d mut Decoder,
    chunk: &'c [u8],
    pos: usize,
}

impl Iterator for Packets<'_, '_> {
    type Item = Bytes;

    fn next(&mut self) -> Option<Bytes> {
        while self.pos < self.chunk.len() {
            let byte = self.chunk[self.pos];
            self.pos += 1;

            let dec = &mut *self.decoder;
            if dec.esc {
                dec.esc = false;
                match byte {
                    ESC_END => dec.carry.put_u8(END),
                    ESC_ESC => dec.carry.put_u8(ESC),
                    code => {
                        // Lenient: skip the byte, keep the packet and
                        // the rest of the stream.
                        dec.invalid_escapes += 1;
                        warn!(code, "invalid SLIP escape code, skipping byte");
                    }
                }
            } else if byte == ESC {
                dec.esc = true;
            } else if byte == END {
                dec.esc = false;
                if !dec.carry.is_empty() || !dec.config.ignore_empty_packets {
                    let packet = Bytes::copy_from_slice(&dec.carry);
                    dec.carry.clear();
                    return Some(packet);
                }
                dec.carry.clear();
            } else {
                dec.carry.put_u8(byte);
            }
        }
        None
    }
}

impl Drop for Packets<'_, '_> {
    fn drop(&mut self) {
        self.decoder.trim_carry();
    }
}
