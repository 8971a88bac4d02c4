//! HTML escaping for text content and attribute values.

/// Escape the five HTML-significant characters (`&`, `<`, `>`, `"`, `'`).
///
/// Safe for both element text content and double- or single-quoted
/// attribute values, which is the full set of contexts this widget emits
/// into.
#[must_use]
pub fn html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}
