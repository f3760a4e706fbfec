//! SLIP (RFC 1055) byte-stream framing with incremental decoding.
//!
//! SLIP solves exactly one problem: packet boundaries over a transport
//! that delivers an ordered byte stream with no message boundaries of
//! its own (serial lines, PTYs, pipes). Each packet becomes a frame
//! terminated by a single [`END`] byte; occurrences of [`END`] and
//! [`ESC`] inside the payload are replaced by two-byte escape
//! sequences so the delimiter stays unambiguous.
//!
//! Wire format:
//! ```text
//! ┌──────────────────────────────┬──────────┐
//! │ Payload (escaped)            │ END (1B) │
//! │   0xC0 → 0xDB 0xDC           │ 0xC0     │
//! │   0xDB → 0xDB 0xDD           │          │
//! └──────────────────────────────┴──────────┘
//! ```
//!
//! All other byte values, including the literal values of [`ESC_END`]
//! and [`ESC_ESC`], pass through unchanged — they are only special
//! directly after an [`ESC`].
//!
//! # Crate Structure
//!
//! - [`encode`] / [`encode_into`] — stateless framing of one packet
//! - [`Decoder`] — incremental decoder; one instance per byte stream,
//!   fed chunks of any size in arrival order
//! - [`FrameReader`] / [`FrameWriter`] — blocking adapters over any
//!   [`Read`](std::io::Read) / [`Write`](std::io::Write) stream
//! - [`SlipCodec`] — `tokio_util` codec stage (behind the `async`
//!   feature)
//!
//! # Example
//!
//! ```
//! use slipframe::{encode, Decoder, EncodeOptions};
//!
//! let frame = encode(&[0x01, 0xC0, 0x02], &EncodeOptions::default());
//! assert_eq!(frame.as_ref(), &[0x01, 0xDB, 0xDC, 0x02, 0xC0]);
//!
//! let mut decoder = Decoder::new();
//! let packets: Vec<_> = decoder.decode(&frame).collect();
//! assert_eq!(packets.len(), 1);
//! assert_eq!(packets[0].as_ref(), &[0x01, 0xC0, 0x02]);
//! ```

pub mod decoder;
pub mod encode;
pub mod error;
pub mod reader;
pub mod writer;

#[cfg(feature = "async")]
pub mod codec;

pub use decoder::{DecodeConfig, Decoder, Packets};
pub use encode::{encode, encode_into, EncodeOptions};
pub use error::{Error, Result};
pub use reader::FrameReader;
pub use writer::FrameWriter;

#[cfg(feature = "async")]
pub use codec::SlipCodec;

/// Frame delimiter.
pub const END: u8 = 0xC0;

/// Escape-sequence marker.
pub const ESC: u8 = 0xDB;

/// Escaped representation of [`END`] (valid only after [`ESC`]).
pub const ESC_END: u8 = 0xDC;

/// Escaped representation of [`ESC`] (valid only after [`ESC`]).
pub const ESC_ESC: u8 = 0xDD;
