#![doc = include_str!("../README.md")]

mod config;
mod error;
/// Chunked encoding for multi-part posts
pub mod segments;
/// yEnc body encoding for Usenet
pub mod yenc;

pub use config::EncoderConfig;
pub use error::{Result, YencError};
pub use segments::{chunk_count, ChunkedEncoder, EncodedChunk, EncodedChunks};
pub use yenc::{encode, encode_with_len, max_encoded_len, needs_escape, Encoder, EscapeRule};
