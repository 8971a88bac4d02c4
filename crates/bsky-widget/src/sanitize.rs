//! Sanitization for administrator-supplied text fields.

/// Reduce a submitted value to plain single-line text.
///
/// Tag spans (`<` up to the next `>`, or end of input when unterminated)
/// and control characters are dropped, then runs of whitespace collapse to
/// a single space and the result is trimmed.
#[must_use]
pub fn text_field(input: &str) -> String {
    let mut stripped = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        if in_tag {
            if ch == '>' {
                in_tag = false;
            }
        } else if ch == '<' {
            in_tag = true;
        } else if !ch.is_control() {
            stripped.push(ch);
        }
    }
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
