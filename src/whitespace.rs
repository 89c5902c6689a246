//! Whitespace glyph substitution
//!
//! Raw whitespace is invisible in rendered output, so both renderers swap
//! each whitespace character for a visible glyph: space becomes a middle
//! dot, tab a right-pointing triangle, and both newline and carriage
//! return a not sign. Every other character passes through unchanged.
//!
//! The HTML renderer additionally wraps each substituted glyph in a
//! `<span class="whitespace ...">` marker so a stylesheet can tint them;
//! carriage return shares the `newline` class.

/// Glyph substituted for a space (U+00B7).
pub const SPACE_GLYPH: char = '·';

/// Glyph substituted for a tab (U+2023).
pub const TAB_GLYPH: char = '‣';

/// Glyph substituted for a newline or carriage return (U+00AC).
pub const NEWLINE_GLYPH: char = '¬';

/// Map a single character to its visible glyph, or return it unchanged.
pub fn encode_char(ch: char) -> char {
    match ch {
        ' ' => SPACE_GLYPH,
        '\t' => TAB_GLYPH,
        '\r' | '\n' => NEWLINE_GLYPH,
        _ => ch,
    }
}

/// Encode a whole string for plain-text output.
pub fn encode_plain(text: &str) -> String {
    text.chars().map(encode_char).collect()
}

/// Append the HTML form of `ch` to `out`: substituted glyphs are wrapped
/// in their styled whitespace marker, all other characters are appended
/// as-is.
pub fn push_char_html(out: &mut String, ch: char) {
    match ch {
        ' ' => out.push_str("<span class=\"whitespace space\">·</span>"),
        '\t' => out.push_str("<span class=\"whitespace tab\">‣</span>"),
        '\r' | '\n' => out.push_str("<span class=\"whitespace newline\">¬</span>"),
        _ => out.push(ch),
    }
}
