/// Escape text for element content.
pub fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for attribute values, quotes included.
pub fn attr_esc(s: &str) -> String {
    esc(s).replace('"', "&quot;").replace('\'', "&#39;")
}
