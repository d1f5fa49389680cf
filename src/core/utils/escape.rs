//! C-style string escapes, shared by the source scanner and the PO codec.

/// Resolve C escape sequences in a raw literal body.
///
/// Octal (`\101`) and hex (`\x41`) escapes produce raw bytes, so a run such
/// as `\303\251` decodes to `é`. Bytes that do not form valid UTF-8 are
/// replaced. Unknown escapes are kept verbatim, backslash included.
pub fn unescape(raw: &str) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            push_char(&mut out, c);
            continue;
        }
        let Some(next) = chars.next() else {
            out.push(b'\\');
            break;
        };
        match next {
            'n' => out.push(b'\n'),
            't' => out.push(b'\t'),
            'r' => out.push(b'\r'),
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0C),
            'v' => out.push(0x0B),
            '"' | '\'' | '?' | '\\' => push_char(&mut out, next),
            '0'..='7' => {
                let mut value = next.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push((value & 0xFF) as u8);
            }
            'x' => {
                let mut value = 0u32;
                let mut digits = 0;
                while let Some(digit) = chars.peek().and_then(|c| c.to_digit(16)) {
                    value = ((value << 4) | digit) & 0xFF;
                    digits += 1;
                    chars.next();
                }
                if digits == 0 {
                    out.extend_from_slice(b"\\x");
                } else {
                    out.push(value as u8);
                }
            }
            'u' | 'U' => {
                let width = if next == 'u' { 4 } else { 8 };
                let hex: String = chars.clone().take(width).collect();
                let decoded = (hex.len() == width && hex.chars().all(|c| c.is_ascii_hexdigit()))
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match decoded {
                    Some(ch) => {
                        push_char(&mut out, ch);
                        for _ in 0..width {
                            chars.next();
                        }
                    }
                    None => {
                        out.push(b'\\');
                        push_char(&mut out, next);
                    }
                }
            }
            other => {
                out.push(b'\\');
                push_char(&mut out, other);
            }
        }
    }
    String::from_utf8(out)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

/// Escape `text` for a double-quoted catalog string.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            // Three digits, so a following digit is not read as part of it.
            '\0' => out.push_str("\\000"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\u{0B}' => out.push_str("\\v"),
            c => out.push(c),
        }
    }
    out
}
