/// Strips one pair of matching JavaScript quotes (`'`, `"` or `` ` ``).
pub fn unquote_string(s: &str) -> String {
    let s = s.trim();
    let quoted = s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\''))
            || (s.starts_with('`') && s.ends_with('`')));
    if quoted {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

/// Decodes one JavaScript escape sequence (`\n`, `\x41`, `\u{1F600}`, a line
/// continuation, ...) to the text it stands for. Invalid code points decode
/// to U+FFFD.
pub fn decode_escape_sequence(sequence: &str) -> String {
    let Some(body) = sequence.strip_prefix('\\') else {
        return sequence.to_string();
    };

    match body {
        "n" => "\n".to_string(),
        "t" => "\t".to_string(),
        "r" => "\r".to_string(),
        "b" => "\u{8}".to_string(),
        "f" => "\u{c}".to_string(),
        "v" => "\u{b}".to_string(),
        "\n" | "\r\n" | "\r" | "\u{2028}" | "\u{2029}" => String::new(),
        _ => {
            if let Some(hex) = body.strip_prefix("u{").and_then(|h| h.strip_suffix('}')) {
                code_point(hex, 16)
            } else if let Some(hex) = body.strip_prefix('u').filter(|h| h.len() == 4) {
                code_point(hex, 16)
            } else if let Some(hex) = body.strip_prefix('x').filter(|h| h.len() == 2) {
                code_point(hex, 16)
            } else if !body.is_empty() && body.chars().all(|c| ('0'..='7').contains(&c)) {
                code_point(body, 8)
            } else {
                body.to_string()
            }
        }
    }
}

fn code_point(digits: &str, radix: u32) -> String {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
        .to_string()
}
