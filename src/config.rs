//! Encoder configuration

use crate::yenc::params::{LINE_LENGTH, MAX_LINE_LENGTH};
use crate::{Result, YencError};

/// Encoder configuration
///
/// The only tunable is the line length. Everything else about the encoding
/// (shift, escape marker, escape offset) is fixed by the format.
///
/// # Example
///
/// ```
/// use yencoded::EncoderConfig;
///
/// // Standard 128-column lines
/// let config = EncoderConfig::default();
/// assert_eq!(config.line_length, 128);
///
/// // Wider lines, as some posters use
/// let config = EncoderConfig::new(256);
/// assert!(config.validate().is_ok());
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderConfig {
    /// Column count after which a line break is forced
    ///
    /// An escape marker occupies a column like any other byte. A line may
    /// still end one byte past this value when an escaped pair starts in the
    /// last column.
    ///
    /// Default: 128
    pub line_length: usize,
}

impl EncoderConfig {
    /// Create a configuration with the given line length
    ///
    /// The value is checked by [`validate`](Self::validate), which
    /// [`Encoder::new`](crate::Encoder::new) calls.
    pub fn new(line_length: usize) -> Self {
        Self { line_length }
    }

    /// Check that the line length is within `1..=997`
    pub fn validate(&self) -> Result<()> {
        if self.line_length == 0 || self.line_length > MAX_LINE_LENGTH {
            return Err(YencError::InvalidLineLength(self.line_length));
        }
        Ok(())
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            line_length: LINE_LENGTH,
        }
    }
}
