//! Deterministic image URLs from pollinations.ai plus the preview wrapper.
use crate::sanitize;

pub const POLLINATIONS_BASE_URL: &str = "https://image.pollinations.ai/prompt/";

/// Image-generation URL for a topic: the fixed base followed by the
/// percent-encoded topic as a single path segment.
pub fn pollinations_url(topic: &str) -> String {
    format!(
        "{}{}",
        POLLINATIONS_BASE_URL,
        sanitize::encode_path_segment(&sanitize::clean_topic(topic))
    )
}

/// Centered `<img>` wrapper placed above the generated blog body.
///
/// The inline style attributes are intentional: the no-inline-CSS rule in the
/// prompt governs the model's output, and this wrapper is added by the relay,
/// not the model.
pub fn centered_image_html(image_url: &str, topic: &str) -> String {
    format!(
        "<div style=\"text-align:center;\"><img src=\"{}\" alt=\"{}\" style=\"max-width:100%; height:auto;\" /></div>",
        sanitize::escape_attr(image_url),
        sanitize::escape_attr(&sanitize::clean_topic(topic)),
    )
}

/// Full preview document: image wrapper, blank line, model output.
pub fn compose_preview(image_url: &str, topic: &str, body_html: &str) -> String {
    format!("{}\n\n{}", centered_image_html(image_url, topic), body_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_base_plus_encoded_topic() {
        assert_eq!(
            pollinations_url("winter gear"),
            "https://image.pollinations.ai/prompt/winter%20gear"
        );
    }

    #[test]
    fn alt_attribute_is_escaped() {
        let html = centered_image_html("http://x/y.png", "\"snow\" <gear>");
        assert!(html.contains("alt=\"&quot;snow&quot; &lt;gear&gt;\""));
    }

    #[test]
    fn preview_places_image_above_body() {
        let preview = compose_preview("http://x/y.png", "gear", "<p>hi</p>");
        let parts: Vec<&str> = preview.splitn(2, "\n\n").collect();
        assert!(parts[0].starts_with("<div"));
        assert_eq!(parts[1], "<p>hi</p>");
    }
}
