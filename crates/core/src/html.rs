// ABOUTME: HTML entity escaping/unescaping and simple tag-soup text lookup.
// ABOUTME: Decoding covers the full HTML5 entity table; escaping never double-escapes.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use scraper::{Html, Selector};

static UPPERCASE_ENTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&([A-Z]+);").unwrap());

/// Named entities that legacy markup often writes in uppercase (`&AMP;`, `&LT;`).
/// Other uppercase names (`&ETH;`, `&THORN;`) differ from their lowercase forms
/// and are left alone.
const CASE_INSENSITIVE_ENTITIES: &[&str] = &[
    "amp", "lt", "gt", "quot", "apos", "nbsp", "copy", "reg", "trade",
];

/// Decodes HTML entities (named and numeric) into the characters they stand for.
///
/// Uppercase spellings of the common entities are accepted: `&LT;` decodes to `<`.
pub fn unescape_html_entities(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }

    let normalized = UPPERCASE_ENTITY_RE.replace_all(code, |caps: &Captures| {
        let lower = caps[1].to_ascii_lowercase();
        if CASE_INSENSITIVE_ENTITIES.contains(&lower.as_str()) {
            format!("&{lower};")
        } else {
            caps[0].to_string()
        }
    });

    html_escape::decode_html_entities(&normalized).into_owned()
}

/// Escapes `&`, `<`, `>`, `"` and `'` for safe inclusion in HTML.
///
/// The input is unescaped first, so text that is already (partly) escaped comes
/// out escaped exactly once.
pub fn escape_html_entities(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }

    let plain = unescape_html_entities(code);
    html_escape::encode_quoted_attribute(&plain).into_owned()
}

/// Parses an HTML document leniently.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Returns the trimmed text of the first element matching the CSS `selector`.
///
/// None when the selector is empty or invalid, or nothing matches.
pub fn read_element_text(doc: &Html, selector: &str) -> Option<String> {
    if selector.trim().is_empty() {
        return None;
    }

    let selector = Selector::parse(selector).ok()?;
    let element = doc.select(&selector).next()?;
    let text: String = element.text().collect();
    Some(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_basic() {
        assert_eq!(escape_html_entities("One & Two < Four"), "One &amp; Two &lt; Four");
        assert_eq!(
            escape_html_entities(r#"say "hi" it's"#),
            "say &quot;hi&quot; it&#x27;s"
        );
    }

    #[test]
    fn test_escape_does_not_double_escape() {
        assert_eq!(escape_html_entities("One &amp; Two"), "One &amp; Two");
        assert_eq!(escape_html_entities("&LT;b&GT;"), "&lt;b&gt;");
    }

    #[test]
    fn test_escape_mixed_entities_and_raw_specials() {
        assert_eq!(escape_html_entities("&LT;b&GT; > x"), "&lt;b&gt; &gt; x");
        assert_eq!(escape_html_entities("plain"), "plain");
        assert_eq!(
            escape_html_entities("Tom&#39;s <i>\"Q&amp;A\"</i>"),
            "Tom&#x27;s &lt;i&gt;&quot;Q&amp;A&quot;&lt;/i&gt;"
        );
    }

    #[test]
    fn test_unescape_uppercase_entities() {
        assert_eq!(unescape_html_entities("One & Two &LT; Four"), "One & Two < Four");
        assert_eq!(unescape_html_entities("&AMP;&QUOT;"), "&\"");
    }

    #[test]
    fn test_unescape_named_and_numeric() {
        assert_eq!(unescape_html_entities("caf&eacute;"), "café");
        assert_eq!(unescape_html_entities("&Eacute;cole"), "École");
        assert_eq!(unescape_html_entities("&#169; &#xA9;"), "© ©");
        assert_eq!(unescape_html_entities("&hellip;"), "…");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(escape_html_entities(""), "");
        assert_eq!(unescape_html_entities(""), "");
    }

    #[test]
    fn test_read_element_text() {
        let doc = parse_document(
            "<html><head><title> Chapter One </title></head>\
             <body><h1 class=\"t\">Heading <b>bold</b></h1><p>Body</p></body></html>",
        );

        assert_eq!(read_element_text(&doc, "title").as_deref(), Some("Chapter One"));
        assert_eq!(read_element_text(&doc, "h1.t").as_deref(), Some("Heading bold"));
        assert_eq!(read_element_text(&doc, "table"), None);
        assert_eq!(read_element_text(&doc, ""), None);
        assert_eq!(read_element_text(&doc, "[[invalid"), None);
    }
}
