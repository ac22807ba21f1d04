// ABOUTME: Response body decoding: charset from Content-Type, configured fallback, detection.
// ABOUTME: Always produces a String; undecodable bytes become replacement characters.

use encoding_rs::Encoding;

/// Decodes `body` to text.
///
/// Preference order: a `charset=` in `content_type`, then `fallback_label`,
/// then chardetng's guess.
pub fn decode_body(body: &[u8], content_type: Option<&str>, fallback_label: &str) -> String {
    let declared = content_type
        .and_then(extract_charset)
        .and_then(|charset| Encoding::for_label(charset.as_bytes()));

    let encoding = declared
        .or_else(|| Encoding::for_label(fallback_label.as_bytes()))
        .unwrap_or_else(|| {
            let mut detector = chardetng::EncodingDetector::new();
            detector.feed(body, true);
            detector.guess(None, true)
        });

    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from a Content-Type header.
pub fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}
