// src/core/html.rs
// Tolerant HTML slicing. No DOM: we scan for tag openers case-insensitively
// and pair them with their closing tag by counting nesting depth.
// Byte offsets into the lower-cased copy are valid in the original because
// only ASCII is folded.

use super::sanitize::{decode_entities, normalize_ws};

/// Elements that never have a closing tag.
const VOID_TAGS: &[&str] = &["input", "br", "img", "meta", "link", "hr"];

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// One element found in a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element<'a> {
    /// `<tag attr=...>`
    pub open_tag: &'a str,
    /// Whole element, opener through closer. Equals `open_tag` for void elements.
    pub block: &'a str,
}

impl<'a> Element<'a> {
    /// Attribute value with entities decoded. Quoted or bare values.
    pub fn attr(&self, name: &str) -> Option<String> {
        attr_value(self.open_tag, name).map(|v| decode_entities(&v))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|x| x == class))
            .unwrap_or(false)
    }

    /// True when every whitespace-separated class in `classes` is present.
    pub fn has_classes(&self, classes: &str) -> bool {
        classes.split_whitespace().all(|c| self.has_class(c))
    }

    /// Markup between the opening and closing tag.
    pub fn inner(&self) -> &'a str {
        if self.block.len() == self.open_tag.len() {
            return "";
        }
        let body = &self.block[self.open_tag.len()..];
        match body.rfind("</") {
            Some(close) => &body[..close],
            None => body,
        }
    }

    /// Visible text: tags dropped, entities decoded, whitespace collapsed.
    pub fn text(&self) -> String {
        normalize_ws(&decode_entities(&strip_tags_raw(self.inner())))
    }

    /// Descendant elements named `tag`, in document order.
    pub fn descendants(&self, tag: &str) -> Vec<Element<'a>> {
        elements(self.inner(), tag)
    }
}

/// All elements named `tag` in document order, nested ones included.
pub fn elements<'a>(doc: &'a str, tag: &str) -> Vec<Element<'a>> {
    let lc = to_lower(doc);
    let tag = to_lower(tag);
    let void = VOID_TAGS.contains(&tag.as_str());

    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(start) = find_opener(&lc, &tag, pos) {
        let Some(open_end) = open_tag_end(doc, start) else { break };
        let open_tag = &doc[start..open_end];
        pos = open_end;

        let self_closing = open_tag.ends_with("/>");
        let end = if void || self_closing {
            open_end
        } else {
            matching_close(&lc, &tag, open_end).unwrap_or(doc.len())
        };
        out.push(Element { open_tag, block: &doc[start..end] });
    }
    out
}

/// First element named `tag` whose `id` attribute equals `id`.
pub fn element_by_id<'a>(doc: &'a str, tag: &str, id: &str) -> Option<Element<'a>> {
    elements(doc, tag)
        .into_iter()
        .find(|e| e.attr("id").as_deref() == Some(id))
}

/// Position of the next `<tag` that is followed by a tag-name boundary.
fn find_opener(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let needle = join!("<", tag);
    let mut pos = from;
    while let Some(rel) = lc.get(pos..)?.find(&needle) {
        let at = pos + rel;
        let next = lc.as_bytes().get(at + needle.len()).copied();
        match next {
            Some(b) if b.is_ascii_whitespace() || b == b'>' || b == b'/' => return Some(at),
            None => return None,
            _ => pos = at + needle.len(),
        }
    }
    None
}

/// Index one past the `>` closing the tag that starts at `start`; quote-aware.
fn open_tag_end(doc: &str, start: usize) -> Option<usize> {
    let b = doc.as_bytes();
    let (mut in_s, mut in_d) = (false, false);
    for (i, &c) in b.iter().enumerate().skip(start + 1) {
        match c {
            b'\'' if !in_d => in_s = !in_s,
            b'"' if !in_s => in_d = !in_d,
            b'>' if !in_s && !in_d => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// End of the `</tag>` that balances an opener ending at `from`.
fn matching_close(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let close = join!("</", tag);
    let mut depth = 1usize;
    let mut pos = from;
    loop {
        let next_close = lc.get(pos..)?.find(&close).map(|r| pos + r)?;
        match find_opener(lc, tag, pos) {
            Some(open) if open < next_close => {
                depth += 1;
                pos = open + 1;
            }
            _ => {
                depth -= 1;
                let gt = lc[next_close..].find('>').map(|r| next_close + r + 1)?;
                if depth == 0 {
                    return Some(gt);
                }
                pos = gt;
            }
        }
    }
}

/// Raw attribute value from an opening tag, without entity decoding.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let name = to_lower(name);
    let b = lc.as_bytes();
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find(&name) {
        let at = pos + rel;
        pos = at + name.len();
        // must start a new attribute
        let before_ok = at > 0 && b[at - 1].is_ascii_whitespace();
        let mut i = at + name.len();
        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
        if !before_ok || b.get(i) != Some(&b'=') { continue; }
        i += 1;
        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }

        return match b.get(i) {
            Some(&q) if q == b'"' || q == b'\'' => {
                let end = open_tag[i + 1..].find(q as char)? + i + 1;
                Some(open_tag[i + 1..end].to_string())
            }
            Some(_) => {
                let end = open_tag[i..]
                    .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                    .map(|r| i + r)
                    .unwrap_or(open_tag.len());
                Some(open_tag[i..end].to_string())
            }
            None => None,
        };
    }
    None
}

/// Remove all `<...>` tags; leaves entities alone.
fn strip_tags_raw(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Remove all tags, decode entities, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    normalize_ws(&decode_entities(&strip_tags_raw(s.as_ref())))
}
