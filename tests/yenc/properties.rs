//! Properties that hold for every input

use super::support::{body_lines, decode_body};
use proptest::prelude::*;
use yencoded::{encode, max_encoded_len, Encoder, EncoderConfig};

/// Inputs biased toward bytes that shift into special values
fn tricky_bytes() -> impl Strategy<Value = Vec<u8>> {
    let special = prop::sample::select(vec![0xD6u8, 0xDF, 0xE0, 0xE3, 0xF6, 0x04, 0x13, 0x01]);
    prop::collection::vec(prop_oneof![special, any::<u8>()], 0..2048)
}

proptest! {
    #[test]
    fn round_trips(data in tricky_bytes()) {
        let encoded = encode(&data).unwrap();
        prop_assert_eq!(decode_body(&encoded), data);
    }

    #[test]
    fn no_bare_special_bytes(data in tricky_bytes()) {
        let encoded = encode(&data).unwrap();
        if data.is_empty() {
            prop_assert!(encoded.is_empty());
        } else {
            let lines = body_lines(&encoded);
            let full_lines = lines.len() - 1;
            for (index, line) in lines.iter().enumerate() {
                let mut escaped = false;
                for &byte in line.iter() {
                    if escaped {
                        escaped = false;
                        continue;
                    }
                    prop_assert!(byte != 0 && byte != b'\r' && byte != b'\n');
                    escaped = byte == b'=';
                }
                prop_assert!(!escaped, "line ends with a dangling escape marker");
                prop_assert!(line.first() != Some(&b'.'));
                prop_assert!(line.first() != Some(&b' ') && line.first() != Some(&b'\t'));
                // A short final line may end in bare whitespace
                if index < full_lines {
                    prop_assert!(line.last() != Some(&b' ') && line.last() != Some(&b'\t'));
                }
            }
        }
    }

    #[test]
    fn lines_stay_within_width(data in tricky_bytes(), line_length in 1usize..=300) {
        let encoder = Encoder::new(EncoderConfig::new(line_length)).unwrap();
        let encoded = encoder.encode(&data).unwrap();
        if !data.is_empty() {
            for line in body_lines(&encoded) {
                prop_assert!(!line.is_empty());
                prop_assert!(line.len() <= line_length + 1);
            }
        }
    }

    #[test]
    fn size_is_bounded_and_exact(data in tricky_bytes(), line_length in 1usize..=300) {
        let encoder = Encoder::new(EncoderConfig::new(line_length)).unwrap();
        let encoded = encoder.encode(&data).unwrap();
        prop_assert!(encoded.len() <= max_encoded_len(data.len(), line_length).unwrap());
        prop_assert_eq!(encoder.encoded_len(&data), encoded.len());
    }

    #[test]
    fn deterministic(data in tricky_bytes()) {
        prop_assert_eq!(encode(&data).unwrap(), encode(&data).unwrap());
    }
}

#[test]
fn test_parallel_encoding_matches_sequential() {
    let inputs: Vec<Vec<u8>> = (0..8u8)
        .map(|seed| (0..10_000u32).map(|i| (i as u8).wrapping_mul(seed | 1)).collect())
        .collect();
    let expected: Vec<_> = inputs.iter().map(|d| encode(d).unwrap()).collect();

    let encoder = Encoder::default();
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|data| scope.spawn(move || encoder.encode(data).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, expected);
}
