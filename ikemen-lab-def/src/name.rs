//! Stage display-name extraction from raw definition text.
//!
//! Stage authors hide the real name behind a semicolon, where an
//! ordinary reader sees only a trailing comment:
//! ```text
//! name = "O";"Avalon"
//! ```
//! The placeholder keeps legacy select screens narrow; the text after
//! the semicolon is the name players should see. Because the section
//! parser strips trailing comments before storing values, this
//! extraction works on the raw text instead.

/// Find the first `name =` line and resolve its display name.
///
/// Returns `None` when no `name` key appears outside comments.
pub fn stage_name(content: &str) -> Option<String> {
    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('[') {
            continue;
        }
        let Some(eq) = line.find('=') else {
            continue;
        };
        if line[..eq].trim().to_lowercase() != "name" {
            continue;
        }
        return Some(resolve_name(line[eq + 1..].trim()));
    }
    None
}

/// Resolve a raw (pre comment-strip, pre quote-strip) name value.
///
/// Split at the first semicolon and quote-strip each side on its own.
/// The right side is adopted only when the left is at most two
/// characters and the right is strictly longer; the threshold is tuned
/// against existing community content and must not change.
fn resolve_name(raw: &str) -> String {
    match raw.split_once(';') {
        Some((left, right)) => {
            let left = strip_quotes(left);
            let right = strip_quotes(right);
            if left.chars().count() <= 2 && right.chars().count() > left.chars().count() {
                right
            } else {
                left
            }
        }
        None => strip_quotes(raw),
    }
}

fn strip_quotes(s: &str) -> String {
    s.replace('"', "").trim().to_string()
}

#[cfg(test)]
#[path = "tests/name_tests.rs"]
mod tests;
