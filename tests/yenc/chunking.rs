//! Multi-part chunking

use super::support::decode_body;
use std::io::Cursor;
use yencoded::{chunk_count, ChunkedEncoder, Encoder, Result, YencError};

#[test]
fn test_chunks_reassemble_to_input() {
    let data: Vec<u8> = (0..50_000u32).map(|i| (i * 7 % 256) as u8).collect();
    let chunker = ChunkedEncoder::new(Encoder::default(), 12_000).unwrap();

    let chunks: Vec<_> = chunker
        .chunks(Cursor::new(&data))
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(chunks.len() as u64, chunk_count(data.len() as u64, 12_000));

    let mut reassembled = Vec::new();
    let mut expected_begin = 1;
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.number, i as u64 + 1);
        assert_eq!(chunk.begin, expected_begin);
        expected_begin = chunk.end + 1;

        let decoded = decode_body(&chunk.data);
        assert_eq!(decoded.len() as u64, chunk.raw_len());
        reassembled.extend(decoded);
    }

    assert_eq!(reassembled, data);
    assert_eq!(chunks.last().unwrap().end, data.len() as u64);
}

#[test]
fn test_empty_reader_yields_nothing() {
    let chunker = ChunkedEncoder::new(Encoder::default(), 100).unwrap();
    assert_eq!(chunker.chunks(Cursor::new(Vec::new())).count(), 0);
}

#[test]
fn test_zero_chunk_size() {
    let err = ChunkedEncoder::new(Encoder::default(), 0).unwrap_err();
    assert!(matches!(err, YencError::InvalidChunkSize(0)));
}

#[test]
fn test_chunk_size_accessor() {
    let chunker = ChunkedEncoder::new(Encoder::default(), 384_000).unwrap();
    assert_eq!(chunker.chunk_size(), 384_000);
}
