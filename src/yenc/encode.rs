use crate::{EncoderConfig, Result, YencError};
use tracing::trace;

use super::params::{ESCAPE_BYTE, ESCAPE_SHIFT, LINE_BREAK, SHIFT};
use super::rules::needs_escape;

/// yEnc body encoder
///
/// Stateless between calls: the column counter lives only for the duration
/// of a single [`encode`](Self::encode), so one `Encoder` can be shared
/// across threads freely.
///
/// # Example
/// ```
/// use yencoded::{Encoder, EncoderConfig};
///
/// let encoder = Encoder::new(EncoderConfig::default())?;
/// assert_eq!(encoder.encode(b"A")?, b"k\r\n");
/// # Ok::<(), yencoded::YencError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Create an encoder, validating the configuration
    pub fn new(config: EncoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this encoder was built with
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode `input` into a new buffer
    ///
    /// Every line, including the last, ends with CRLF. Empty input produces
    /// empty output.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.encode_into(input, &mut output)?;
        Ok(output)
    }

    /// Append the encoding of `input` to `output`
    ///
    /// Capacity for the worst case is reserved before anything is written, so
    /// on error `output` is left exactly as it was.
    ///
    /// # Returns
    /// Number of bytes appended
    pub fn encode_into(&self, input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
        let line_length = self.config.line_length;
        reserve_for(input.len(), line_length, output)?;

        let start = output.len();
        let lines = encode_data(input, line_length, output);
        let written = output.len() - start;

        trace!(
            "yEnc encoded {} bytes into {} bytes ({} lines)",
            input.len(),
            written,
            lines
        );

        Ok(written)
    }

    /// Exact number of bytes [`encode`](Self::encode) would produce for `input`
    pub fn encoded_len(&self, input: &[u8]) -> usize {
        units(input, self.config.line_length).map(Unit::len).sum()
    }
}

/// Encode binary data to a yEnc body using the standard 128-column lines
///
/// This is the bare encoding: no `=ybegin`/`=yend` lines and no CRC.
///
/// # Example
/// ```
/// // 0xD6 + 42 wraps to NUL, which is always escaped
/// assert_eq!(yencoded::encode(&[0xD6])?, [0x3D, 0x40, 0x0D, 0x0A]);
/// assert!(yencoded::encode(&[])?.is_empty());
/// # Ok::<(), yencoded::YencError>(())
/// ```
pub fn encode(input: &[u8]) -> Result<Vec<u8>> {
    Encoder::default().encode(input)
}

/// Upper bound on the encoded size of `len` input bytes
///
/// Each input byte yields at most two output bytes. A line is only broken
/// once it holds `line_length` columns, which takes at least
/// `ceil(line_length / 2)` input bytes, and each break adds two bytes.
///
/// Returns `None` if `line_length` is zero or the bound overflows `usize`.
pub fn max_encoded_len(len: usize, line_length: usize) -> Option<usize> {
    if line_length == 0 {
        return None;
    }
    let lines = len.div_ceil(line_length.div_ceil(2));
    len.checked_mul(2)?
        .checked_add(lines.checked_mul(LINE_BREAK.len())?)
}

/// Reserve worst-case room for encoding `len` bytes onto `output`
///
/// Nothing is reserved or written on failure.
///
/// # Returns
/// The number of bytes reserved
fn reserve_for(len: usize, line_length: usize, output: &mut Vec<u8>) -> Result<usize> {
    let bound = max_encoded_len(len, line_length).ok_or(YencError::AllocationFailure {
        requested: usize::MAX,
    })?;
    output
        .try_reserve_exact(bound)
        .map_err(|_| YencError::AllocationFailure { requested: bound })?;
    Ok(bound)
}

/// One input byte's worth of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Unit {
    /// Byte to emit, already offset by `ESCAPE_SHIFT` if escaped
    value: u8,
    /// Whether an escape marker precedes `value`
    escaped: bool,
    /// Whether a line break follows
    line_break: bool,
}

impl Unit {
    /// Output bytes this unit occupies, line break included
    fn len(self) -> usize {
        let mut len = if self.escaped { 2 } else { 1 };
        if self.line_break {
            len += LINE_BREAK.len();
        }
        len
    }
}

/// Column tracking for a single encode pass
#[derive(Debug)]
struct LineState {
    column: usize,
    line_length: usize,
}

impl LineState {
    fn new(line_length: usize) -> Self {
        Self {
            column: 0,
            line_length,
        }
    }

    /// Advance over one input byte
    fn step(&mut self, byte: u8, is_last: bool) -> Unit {
        let shifted = byte.wrapping_add(SHIFT);
        let escaped = needs_escape(shifted, self.column, self.line_length);

        let value = if escaped {
            // The marker takes a column of its own
            self.column += 1;
            shifted.wrapping_add(ESCAPE_SHIFT)
        } else {
            shifted
        };
        self.column += 1;

        let line_break = self.column >= self.line_length || is_last;
        if line_break {
            self.column = 0;
        }

        Unit {
            value,
            escaped,
            line_break,
        }
    }
}

/// Step a fresh line state over every byte of `data`
fn units(data: &[u8], line_length: usize) -> impl Iterator<Item = Unit> + '_ {
    let mut state = LineState::new(line_length);
    let last = data.len().saturating_sub(1);

    data.iter()
        .enumerate()
        .map(move |(index, &byte)| state.step(byte, index == last))
}

/// Run the encoder over `data`, appending to `output`
///
/// Returns the number of lines written.
fn encode_data(data: &[u8], line_length: usize, output: &mut Vec<u8>) -> usize {
    let mut lines = 0;

    for unit in units(data, line_length) {
        if unit.escaped {
            output.push(ESCAPE_BYTE);
        }
        output.push(unit.value);

        if unit.line_break {
            output.extend_from_slice(LINE_BREAK);
            lines += 1;
        }
    }

    lines
}
