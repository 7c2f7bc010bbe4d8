//! Encode a file into yEnc article bodies
//!
//! Run with: cargo run --example encode_file -- <path> [part_size]

use std::fs::File;
use std::io::BufReader;
use yencoded::{chunk_count, ChunkedEncoder, Encoder, EncoderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: encode_file <path> [part_size]")?;
    let part_size = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(384_000);

    let line_length = std::env::var("YENC_LINE_LENGTH")
        .ok()
        .and_then(|l| l.parse().ok())
        .unwrap_or(128);

    let file = File::open(&path)?;
    let size = file.metadata()?.len();
    let parts = chunk_count(size, part_size as u64);
    println!("Encoding {} ({} bytes) into {} parts", path, size, parts);

    let encoder = Encoder::new(EncoderConfig::new(line_length))?;
    let chunker = ChunkedEncoder::new(encoder, part_size)?;

    let mut encoded_total = 0;
    for part in chunker.chunks(BufReader::new(file)) {
        let part = part?;
        encoded_total += part.data.len();
        println!(
            "  part {}/{}: bytes {}-{}, {} encoded bytes",
            part.number,
            parts,
            part.begin,
            part.end,
            part.data.len()
        );
    }

    if size > 0 {
        let overhead = (encoded_total as f64 / size as f64 - 1.0) * 100.0;
        println!("\nTotal: {} encoded bytes ({:.2}% overhead)", encoded_total, overhead);
    }

    Ok(())
}
