//! Escaping rules applied to shifted bytes

/// When a shifted byte value has to be escaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeRule {
    /// Emit as-is regardless of position
    Never,
    /// Escape wherever it appears (NUL, LF, CR, `=`)
    Always,
    /// Escape in the first or last column of a line (TAB, SPACE)
    LineEdge,
    /// Escape in the first column only (`.`)
    LineStart,
}

impl EscapeRule {
    /// Look up the rule for a shifted byte value
    pub const fn for_byte(shifted: u8) -> Self {
        match shifted {
            0x00 | 0x0A | 0x0D | 0x3D => EscapeRule::Always, // NUL, LF, CR, '='
            0x09 | 0x20 => EscapeRule::LineEdge,             // TAB, SPACE
            0x2E => EscapeRule::LineStart,                   // '.'
            _ => EscapeRule::Never,
        }
    }

    /// Apply the rule given the byte's position on the line
    pub const fn applies(self, first_on_line: bool, last_on_line: bool) -> bool {
        match self {
            EscapeRule::Never => false,
            EscapeRule::Always => true,
            EscapeRule::LineEdge => first_on_line || last_on_line,
            EscapeRule::LineStart => first_on_line,
        }
    }
}

/// Decide whether `shifted` must be escaped when emitted at `column`
///
/// `column` counts the units already on the current line. The last column is
/// `line_length - 1`: a unit placed there fills the line.
pub fn needs_escape(shifted: u8, column: usize, line_length: usize) -> bool {
    let first_on_line = column == 0;
    let last_on_line = column + 1 == line_length;
    EscapeRule::for_byte(shifted).applies(first_on_line, last_on_line)
}
