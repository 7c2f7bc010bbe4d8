//! Chunked encoding for multi-part Usenet posts
//!
//! Large binaries are posted as a series of articles, each carrying one
//! fixed-size slice of the file. Every slice is yEnc encoded on its own with
//! a fresh line state, so parts can be produced, posted, and retried
//! independently.

use crate::error::{Result, YencError};
use crate::Encoder;
use std::io::Read;
use tracing::debug;

/// One encoded slice of a larger input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedChunk {
    /// Part number, starting at 1
    pub number: u64,
    /// Offset of the first raw byte in the whole input, starting at 1
    pub begin: u64,
    /// Offset of the last raw byte in the whole input (inclusive)
    pub end: u64,
    /// Encoded body, CRLF terminated
    pub data: Vec<u8>,
}

impl EncodedChunk {
    /// Number of raw input bytes this chunk covers
    pub fn raw_len(&self) -> u64 {
        self.end - self.begin + 1
    }
}

/// Number of parts needed to post `total_size` bytes in `chunk_size` pieces
///
/// Returns 0 when `chunk_size` is 0.
pub fn chunk_count(total_size: u64, chunk_size: u64) -> u64 {
    if chunk_size == 0 {
        return 0;
    }
    total_size.div_ceil(chunk_size)
}

/// Splits input into fixed-size chunks and encodes each one
///
/// # Example
///
/// ```
/// use yencoded::{ChunkedEncoder, Encoder};
///
/// let chunker = ChunkedEncoder::new(Encoder::default(), 3)?;
/// let chunks = chunker.encode_slice(b"ABCDE")?;
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!((chunks[1].begin, chunks[1].end), (4, 5));
/// # Ok::<(), yencoded::YencError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChunkedEncoder {
    encoder: Encoder,
    chunk_size: usize,
}

impl ChunkedEncoder {
    /// Create a chunked encoder producing parts of `chunk_size` raw bytes
    pub fn new(encoder: Encoder, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(YencError::InvalidChunkSize(chunk_size));
        }
        Ok(Self {
            encoder,
            chunk_size,
        })
    }

    /// Raw bytes per part
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Encode an in-memory buffer into parts
    pub fn encode_slice(&self, data: &[u8]) -> Result<Vec<EncodedChunk>> {
        data.chunks(self.chunk_size)
            .enumerate()
            .map(|(index, raw)| {
                let begin = (index * self.chunk_size) as u64 + 1;
                self.encode_chunk(index as u64 + 1, begin, raw)
            })
            .collect()
    }

    /// Lazily read and encode parts from `reader`
    ///
    /// Short reads are retried until a full chunk is available, so only the
    /// final part may be smaller than `chunk_size`.
    pub fn chunks<R: Read>(&self, reader: R) -> EncodedChunks<R> {
        EncodedChunks {
            chunker: *self,
            reader,
            number: 0,
            offset: 0,
            buffer: Vec::new(),
            done: false,
        }
    }

    fn encode_chunk(&self, number: u64, begin: u64, raw: &[u8]) -> Result<EncodedChunk> {
        let data = self.encoder.encode(raw)?;
        let end = begin + raw.len() as u64 - 1;

        debug!(
            "Encoded part {} (bytes {}-{}): {} -> {} bytes",
            number,
            begin,
            end,
            raw.len(),
            data.len()
        );

        Ok(EncodedChunk {
            number,
            begin,
            end,
            data,
        })
    }
}

/// Iterator over encoded parts read from a [`Read`] source
///
/// Created by [`ChunkedEncoder::chunks`]. Stops after the first error.
#[derive(Debug)]
pub struct EncodedChunks<R> {
    chunker: ChunkedEncoder,
    reader: R,
    number: u64,
    offset: u64,
    buffer: Vec<u8>,
    done: bool,
}

impl<R: Read> EncodedChunks<R> {
    fn read_chunk(&mut self) -> Result<usize> {
        self.buffer.clear();
        let read = self
            .reader
            .by_ref()
            .take(self.chunker.chunk_size as u64)
            .read_to_end(&mut self.buffer)?;
        Ok(read)
    }
}

impl<R: Read> Iterator for EncodedChunks<R> {
    type Item = Result<EncodedChunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let read = match self.read_chunk() {
            Ok(0) => {
                self.done = true;
                return None;
            }
            Ok(read) => read,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        self.number += 1;
        let begin = self.offset + 1;
        self.offset += read as u64;

        let chunk = self
            .chunker
            .encode_chunk(self.number, begin, &self.buffer);
        if chunk.is_err() {
            self.done = true;
        }
        Some(chunk)
    }
}
