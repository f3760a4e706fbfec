//! Fragmentation invariance: however the wire is chunked, one decoder
//! instance must recover exactly the original packet sequence.

use bytes::Bytes;
use proptest::prelude::*;
use slipframe::{encode, Decoder, EncodeOptions};

/// Packets chosen so that splits land inside escape sequences, right
/// before and after delimiters, and inside plain runs.
fn sample_packets() -> Vec<Vec<u8>> {
    vec![
        vec![0xC0],
        vec![1, 2, 3],
        vec![0xDB, 0xDC, 0xDD, 0xC0, 0x00],
        vec![0xDB],
        vec![0x55; 7],
    ]
}

fn wire_for(packets: &[Vec<u8>], options: &EncodeOptions) -> Vec<u8> {
    let mut wire = Vec::new();
    for packet in packets {
        wire.extend_from_slice(&encode(packet, options));
    }
    wire
}

fn assert_packets(got: &[Bytes], sent: &[Vec<u8>], context: &str) {
    assert_eq!(got.len(), sent.len(), "{context}");
    for (g, s) in got.iter().zip(sent) {
        assert_eq!(g.as_ref(), s.as_slice(), "{context}");
    }
}

#[test]
fn every_two_chunk_split_decodes_identically() {
    let packets = sample_packets();
    let wire = wire_for(&packets, &EncodeOptions::default());

    for split in 0..=wire.len() {
        let mut decoder = Decoder::new();
        let mut got: Vec<Bytes> = decoder.decode(&wire[..split]).collect();
        got.extend(decoder.decode(&wire[split..]));
        assert_packets(&got, &packets, &format!("split at {split}"));
    }
}

#[test]
fn every_two_chunk_split_with_terminate_start() {
    let packets = sample_packets();
    let opts = EncodeOptions {
        terminate_start: true,
    };
    let wire = wire_for(&packets, &opts);

    for split in 0..=wire.len() {
        let mut decoder = Decoder::new();
        let mut got: Vec<Bytes> = decoder.decode(&wire[..split]).collect();
        got.extend(decoder.decode(&wire[split..]));
        assert_packets(&got, &packets, &format!("split at {split}"));
    }
}

#[test]
fn byte_at_a_time_decodes_identically() {
    let packets = sample_packets();
    let wire = wire_for(&packets, &EncodeOptions::default());

    let mut decoder = Decoder::new();
    let mut got: Vec<Bytes> = Vec::new();
    for byte in &wire {
        got.extend(decoder.decode(std::slice::from_ref(byte)));
    }
    assert_packets(&got, &packets, "byte at a time");
}

#[test]
fn carry_survives_many_tiny_chunks_of_one_packet() {
    let packet: Vec<u8> = (0..=255).collect();
    let frame = encode(&packet, &EncodeOptions::default());

    let mut decoder = Decoder::new();
    let mut got: Vec<Bytes> = Vec::new();
    for chunk in frame.chunks(3) {
        got.extend(decoder.decode(chunk));
    }
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].as_ref(), packet.as_slice());
}

proptest! {
    #[test]
    fn arbitrary_chunking_decodes_identically(
        packets in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..64), 1..8),
        cuts in prop::collection::vec(0usize..4096, 0..8),
    ) {
        let wire = wire_for(&packets, &EncodeOptions::default());

        let mut cuts: Vec<usize> = cuts.into_iter().map(|c| c % (wire.len() + 1)).collect();
        cuts.sort_unstable();

        let mut decoder = Decoder::new();
        let mut got: Vec<Bytes> = Vec::new();
        let mut start = 0;
        for cut in cuts {
            got.extend(decoder.decode(&wire[start..cut]));
            start = cut;
        }
        got.extend(decoder.decode(&wire[start..]));

        prop_assert_eq!(got.len(), packets.len());
        for (g, s) in got.iter().zip(&packets) {
            prop_assert_eq!(g.as_ref(), s.as_slice());
        }
    }
}
