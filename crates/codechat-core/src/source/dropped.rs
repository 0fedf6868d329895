//! Terminals deliver dropped files as pasted text. Each item is a path, and the
//! terminal quotes or escapes it shell-style, or writes it as a `file://` URI.

use std::path::PathBuf;

/// First path in a paste that came from a file drop. Further items are ignored.
pub fn first_dropped_path(pasted: &str) -> Option<PathBuf> {
    let token = first_token(pasted)?;
    let path = match token.strip_prefix("file://") {
        Some(rest) => percent_decode(rest),
        None => token,
    };
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

fn first_token(input: &str) -> Option<String> {
    let mut chars = input.trim_start().chars().peekable();
    let mut token = String::new();

    match chars.peek().copied()? {
        quote @ ('\'' | '"') => {
            chars.next();
            for c in chars.by_ref() {
                if c == quote {
                    break;
                }
                token.push(c);
            }
        }
        _ => {
            while let Some(c) = chars.next() {
                match c {
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            token.push(escaped);
                        }
                    }
                    c if c.is_whitespace() => break,
                    c => token.push(c),
                }
            }
        }
    }

    Some(token)
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}
