//! yEnc body encoding for Usenet
//!
//! yEnc is a binary-to-text encoding scheme designed specifically for Usenet.
//! Each byte is shifted by 42, a handful of values that would upset a
//! line-oriented transport are escaped with `=`, and the result is wrapped
//! into CRLF-terminated lines.
//!
//! Reference: http://www.yenc.org/yenc-draft.1.3.txt

pub mod encode;
pub mod glue;
pub mod params;
pub mod rules;

pub use encode::{encode, max_encoded_len, Encoder};
pub use glue::encode_with_len;
pub use rules::{needs_escape, EscapeRule};
