// src/core/sanitize.rs

/// Decode the HTML entities the site actually emits: the named basics plus
/// numeric `&#NN;` / `&#xHH;`. Unknown entities are kept verbatim.
/// Non-breaking spaces come out as plain spaces.
pub fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| entity(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out.replace('\u{a0}', " ")
}

fn entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop a trailing range dash: `"1/15/2024 9:00 AM -"` → `"1/15/2024 9:00 AM"`.
pub fn strip_trailing_dash(s: &str) -> String {
    let t = s.strip_suffix('-').map(|t| t.strip_suffix(' ').unwrap_or(t));
    t.unwrap_or(s).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_and_numeric() {
        assert_eq!(decode_entities("a&amp;b &lt;c&gt; &quot;d&quot;"), r#"a&b <c> "d""#);
        assert_eq!(decode_entities("&#39;x&#x27;"), "'x'");
        assert_eq!(decode_entities("a&nbsp;b\u{a0}c"), "a b c");
    }

    #[test]
    fn leaves_unknown_and_bare_ampersands() {
        assert_eq!(decode_entities("R&D &bogus; AT&T"), "R&D &bogus; AT&T");
    }

    #[test]
    fn trailing_dash_variants() {
        assert_eq!(strip_trailing_dash("9:00 AM -"), "9:00 AM");
        assert_eq!(strip_trailing_dash("9:00 AM-"), "9:00 AM");
        assert_eq!(strip_trailing_dash("9:00 AM"), "9:00 AM");
        assert_eq!(strip_trailing_dash("a - b"), "a - b");
    }
}
