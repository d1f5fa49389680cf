//! Byte-level helpers for the C-family lexing done by the extractor.
//!
//! Every delimiter the scanner cares about is ASCII, so positions returned here
//! are always UTF-8 char boundaries of the input.

/// Result of reading a double-quoted literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralScan {
    /// Literal closed; `end` is the offset just past the closing quote.
    Closed { raw: String, end: usize },
    /// Line or input ended first; `resume` is the offset of the terminating
    /// newline, or the input length.
    Unterminated { resume: usize },
}

/// Result of reading a C++ raw string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawScan<'a> {
    /// `end` is the offset just past the closing `)delim"`.
    Closed { body: &'a str, end: usize },
    /// No closing `)delim"` before the end of the input.
    Unterminated,
}

/// Longest delimiter a raw string literal may carry.
const RAW_DELIMITER_MAX: usize = 16;

pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// End offset of the identifier-like run starting at `start`.
pub fn ident_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && is_ident_byte(bytes[i]) {
        i += 1;
    }
    i
}

/// Skip spaces, tabs, carriage returns and newlines.
pub fn skip_whitespace(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// End of a `//` comment: the offset of the next newline, or the input length.
pub fn line_comment_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|p| start + p)
        .unwrap_or(bytes.len())
}

/// End of a `/* */` comment starting at `start` (the `/`), past the `*/`.
///
/// An unclosed block comment runs to the end of the input.
pub fn block_comment_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    bytes.len()
}

/// Read a double-quoted literal whose opening quote is at `quote`.
pub fn read_literal(source: &str, quote: usize) -> LiteralScan {
    let bytes = source.as_bytes();
    let mut i = quote + 1;
    loop {
        match bytes.get(i) {
            None => return LiteralScan::Unterminated { resume: i },
            Some(b'\n') => return LiteralScan::Unterminated { resume: i },
            Some(b'"') => {
                return LiteralScan::Closed {
                    raw: source[quote + 1..i].to_string(),
                    end: i + 1,
                };
            }
            Some(b'\\') => match bytes.get(i + 1) {
                None | Some(b'\n') => return LiteralScan::Unterminated { resume: i + 1 },
                Some(_) => i += 2,
            },
            Some(_) => i += 1,
        }
    }
}

/// Identifiers that turn a following `"` into a raw string literal.
pub fn is_raw_prefix(ident: &str) -> bool {
    matches!(ident, "R" | "LR" | "uR" | "UR" | "u8R")
}

/// Read a raw string literal `"delim( ... )delim"` whose opening quote is at
/// `quote`. Returns `None` when no valid delimiter and `(` follow the quote.
pub fn read_raw_literal(source: &str, quote: usize) -> Option<RawScan<'_>> {
    let bytes = source.as_bytes();
    let open = quote + 1;
    let paren = open
        + bytes
            .get(open..)?
            .iter()
            .take(RAW_DELIMITER_MAX + 1)
            .position(|&b| b == b'(')?;
    let delimiter = &source[open..paren];
    if delimiter
        .bytes()
        .any(|b| b.is_ascii_whitespace() || matches!(b, b'\\' | b')' | b'"'))
    {
        return None;
    }

    let closing = format!("){}\"", delimiter);
    let body_start = paren + 1;
    Some(match source[body_start..].find(&closing) {
        Some(len) => RawScan::Closed {
            body: &source[body_start..body_start + len],
            end: body_start + len + closing.len(),
        },
        None => RawScan::Unterminated,
    })
}

/// Offset just past a character literal starting at `start` (the `'`), if
/// one is there.
///
/// Only `'x'` and `'\x'` shapes are recognised, so a lone apostrophe stays an
/// ordinary character.
pub fn char_literal_end(source: &str, start: usize) -> Option<usize> {
    let rest = &source[start + 1..];
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;
    let body_len = match first {
        '\'' | '\n' => return None,
        '\\' => {
            let (idx, escaped) = chars.next()?;
            if escaped == '\n' {
                return None;
            }
            idx + escaped.len_utf8()
        }
        c => c.len_utf8(),
    };
    let close = start + 1 + body_len;
    (source.as_bytes().get(close) == Some(&b'\'')).then_some(close + 1)
}
