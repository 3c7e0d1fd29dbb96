//! Display helpers for product cards and listings.

const ELLIPSIS: &str = "...";

/// Cut `text` to at most `max_chars` characters, appending `...` when
/// anything was removed.
///
/// Counts characters rather than bytes, so multi-byte text such as `₹` or
/// Devanagari is never split mid-character.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", text.get(..cut).unwrap_or(text)),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_text("Gold band", 20), "Gold band");
        assert_eq!(truncate_text("Gold band", 9), "Gold band");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(
            truncate_text("Traditional Polki Choker", 11),
            "Traditional..."
        );
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_text("₹₹₹₹", 2), "₹₹...");
        assert_eq!(truncate_text("कुंदन हार", 3), "कुं...");
    }
}
