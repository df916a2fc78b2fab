//! Minimal RTF-to-text stripper.
//!
//! Walks the token stream directly: control words are dropped (except the
//! handful that carry text semantics), destination groups like the font
//! table are skipped wholesale, and the two character escapes (`\'hh`
//! codepage bytes, `\uN` unicode) are decoded. Codepage bytes are decoded
//! as cp1251 — the uploads this service sees are Russian legal documents,
//! and modern writers emit `\uN` for everything else anyway.

use super::ExtractionError;

/// Group destinations whose content is markup bookkeeping, not body text.
const SKIP_DESTINATIONS: &[&str] = &[
    "fonttbl",
    "colortbl",
    "stylesheet",
    "info",
    "pict",
    "themedata",
    "header",
    "footer",
];

pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    // RTF is 7-bit ASCII on the wire; non-ASCII arrives via escapes.
    let src = String::from_utf8_lossy(bytes);
    Ok(strip_rtf(&src))
}

fn strip_rtf(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::new();

    let mut i = 0usize;
    let mut depth: i32 = 0;
    // Depth at which a skipped destination group started, if any.
    let mut skip_from: Option<i32> = None;
    // \ucN: how many fallback chars follow each \uN escape (default 1).
    let mut uc_skip: usize = 1;
    // Fallback chars still to swallow after a \uN escape.
    let mut pending_skip: usize = 0;

    while i < chars.len() {
        if pending_skip > 0 {
            // A fallback unit is either a \'hh escape or a single char.
            if chars[i] == '\\' && i + 1 < chars.len() && chars[i + 1] == '\'' {
                i += 4;
            } else {
                i += 1;
            }
            pending_skip -= 1;
            continue;
        }

        match chars[i] {
            '{' => {
                depth += 1;
                i += 1;
            }
            '}' => {
                depth -= 1;
                if let Some(d) = skip_from {
                    if depth < d {
                        skip_from = None;
                    }
                }
                i += 1;
            }
            '\\' => {
                i += 1;
                if i >= chars.len() {
                    break;
                }
                let c = chars[i];
                match c {
                    '\\' | '{' | '}' => {
                        if skip_from.is_none() {
                            out.push(c);
                        }
                        i += 1;
                    }
                    '~' => {
                        if skip_from.is_none() {
                            out.push(' ');
                        }
                        i += 1;
                    }
                    '-' | '_' => {
                        // Optional hyphen markers carry no text.
                        i += 1;
                    }
                    '*' => {
                        // {\*\destination ...} — unknown destination, skip.
                        if skip_from.is_none() {
                            skip_from = Some(depth);
                        }
                        i += 1;
                    }
                    '\'' => {
                        i += 1;
                        let hex: String = chars[i..chars.len().min(i + 2)].iter().collect();
                        if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                            if skip_from.is_none() {
                                out.push(cp1251_char(byte));
                            }
                        }
                        i += 2;
                    }
                    _ if c.is_ascii_alphabetic() => {
                        let (word, param, next) = read_control_word(&chars, i);
                        i = next;
                        match word.as_str() {
                            "u" => {
                                if skip_from.is_none() {
                                    let code = param.unwrap_or(0);
                                    let code = if code < 0 { code + 65536 } else { code };
                                    if let Some(ch) = char::from_u32(code as u32) {
                                        out.push(ch);
                                    }
                                }
                                pending_skip = uc_skip;
                            }
                            "uc" => {
                                uc_skip = param.unwrap_or(1).max(0) as usize;
                            }
                            "par" | "line" | "sect" | "page" | "row" => {
                                if skip_from.is_none() {
                                    out.push('\n');
                                }
                            }
                            "tab" | "cell" => {
                                if skip_from.is_none() {
                                    out.push('\t');
                                }
                            }
                            w if SKIP_DESTINATIONS.contains(&w) => {
                                if skip_from.is_none() {
                                    skip_from = Some(depth);
                                }
                            }
                            // Formatting control words carry no text.
                            _ => {}
                        }
                    }
                    _ => {
                        // Unknown control symbol, drop it.
                        i += 1;
                    }
                }
            }
            // Raw CR/LF in the source are ignorable per the RTF spec;
            // line structure comes from \par and \line.
            '\r' | '\n' => i += 1,
            c => {
                if skip_from.is_none() {
                    out.push(c);
                }
                i += 1;
            }
        }
    }

    out
}

/// Read a control word starting at `start` (first letter): the letters, an
/// optional signed numeric parameter, and one optional space delimiter.
/// Returns (word, parameter, index past the control word).
fn read_control_word(chars: &[char], start: usize) -> (String, Option<i32>, usize) {
    let mut i = start;
    let mut word = String::new();
    while i < chars.len() && chars[i].is_ascii_alphabetic() {
        word.push(chars[i]);
        i += 1;
    }

    let mut param = String::new();
    if i < chars.len() && (chars[i] == '-' || chars[i].is_ascii_digit()) {
        param.push(chars[i]);
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            param.push(chars[i]);
            i += 1;
        }
    }

    // One space after a control word is part of it, not body text.
    if i < chars.len() && chars[i] == ' ' {
        i += 1;
    }

    (word, param.parse().ok(), i)
}

/// Decode a cp1251 byte. The Cyrillic block maps linearly onto U+0410.
fn cp1251_char(byte: u8) -> char {
    match byte {
        0xA8 => 'Ё',
        0xB8 => 'ё',
        0xC0..=0xFF => {
            char::from_u32(0x0410 + (byte - 0xC0) as u32).unwrap_or('\u{FFFD}')
        }
        b if b < 0x80 => b as char,
        _ => '\u{FFFD}',
    }
}
