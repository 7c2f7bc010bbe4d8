//! yEnc encoding constants

/// Default number of columns per encoded line
pub const LINE_LENGTH: usize = 128;

/// Largest line length the yEnc draft permits
pub const MAX_LINE_LENGTH: usize = 997;

/// Additive offset applied to every input byte (mod 256)
pub const SHIFT: u8 = 42;

/// Escape marker byte (`=`)
pub const ESCAPE_BYTE: u8 = b'=';

/// Offset added (mod 256) to a shifted byte when it is escaped
pub const ESCAPE_SHIFT: u8 = 64;

/// Line terminator inserted after every line, including the last
pub const LINE_BREAK: &[u8; 2] = b"\r\n";
