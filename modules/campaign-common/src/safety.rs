/// Escape text for insertion into HTML element content or quoted attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Percent-encode a URI component. Only ASCII alphanumerics and `-_.~` pass through.
pub fn encode_component(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}
