//! Encoding boundary for user-supplied topic text.
//!
//! The topic string travels into three sinks with different rules: the model
//! prompt, an HTML `alt` attribute, and a URL path segment. Each sink gets its
//! own encoder here so no raw topic text reaches an outbound request.
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Longest topic accepted into a prompt or URL, in characters.
pub const MAX_TOPIC_LEN: usize = 300;

// RFC 3986 unreserved characters stay literal; everything else is encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Normalize a topic before it is interpolated anywhere.
///
/// Strips control characters, collapses whitespace runs (including newlines,
/// which would otherwise let a topic smuggle extra prompt lines), and caps the
/// length at [`MAX_TOPIC_LEN`].
pub fn clean_topic(topic: &str) -> String {
    let mut out = String::with_capacity(topic.len());
    let mut last_was_space = true;
    for c in topic.chars() {
        if c.is_control() || c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out.chars().take(MAX_TOPIC_LEN).collect()
}

/// Escape text for use inside a double-quoted HTML attribute.
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a string for use as a single URL path segment.
pub fn encode_path_segment(text: &str) -> String {
    utf8_percent_encode(text, PATH_SEGMENT).to_string()
}
