use bytes::{BufMut, Bytes, BytesMut};

use crate::{END, ESC, ESC_END, ESC_ESC};

/// Options for the encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Emit a leading [`END`] before the packet body (default false).
    ///
    /// Receivers treat the extra delimiter as an empty packet, which
    /// flushes any line noise accumulated before the frame. Never
    /// applied to an empty packet.
    pub terminate_start: bool,
}

/// Encode one packet as a SLIP frame.
///
/// Stateless and total: accepts any payload and cannot fail.
pub fn encode(packet: &[u8], options: &EncodeOptions) -> Bytes {
    let mut dst = BytesMut::new();
    encode_into(packet, options, &mut dst);
    dst.freeze()
}

/// Encode one packet as a SLIP frame, appending to `dst`.
///
/// Reserves the worst case (every byte escaped) up front, so the scan
/// never reallocates.
pub fn encode_into(packet: &[u8], options: &EncodeOptions, dst: &mut BytesMut) {
    if packet.is_empty() {
        // A single END already frames an empty packet. A leading END
        // would read as *two* empty packets on a decoder configured to
        // keep them.
        dst.put_u8(END);
        return;
    }

    if !packet.iter().any(|&byte| byte == END || byte == ESC) {
        // Nothing to escape: one presence scan, one bulk copy.
        dst.reserve(packet.len() + 2);
        if options.terminate_start {
            dst.put_u8(END);
        }
        dst.put_slice(packet);
        dst.put_u8(END);
        return;
    }

    dst.reserve(packet.len() * 2 + 2);
    if options.terminate_start {
        dst.put_u8(END);
    }
    for &byte in packet {
        match byte {
            END => dst.put_slice(&[ESC, ESC_END]),
            ESC => dst.put_slice(&[ESC, ESC_ESC]),
            _ => dst.put_u8(byte),
        }
    }
    dst.put_u8(END);
}
