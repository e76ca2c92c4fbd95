//! Removing hidden content from a string.

use crate::selector::is_variation_selector;

/// Removes every variation selector from `text`, leaving only the visible
/// carrier characters in their original order.
///
/// Idempotent: stripping an already clean string returns it unchanged.
pub fn clean_hidden_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.chars().filter(|&ch| !is_variation_selector(ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::selector::to_variation_selector;

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_hidden_text(""), "");
    }

    #[test]
    fn test_clean_string_is_untouched() {
        let s = "nothing hidden, incluso con acentos y 中文";
        assert_eq!(clean_hidden_text(s), s);
    }

    #[test]
    fn test_strips_encoded_payload() {
        let encoded = encode("secret", "a public sentence");
        assert_eq!(clean_hidden_text(&encoded), "a public sentence");
    }

    #[test]
    fn test_strips_bare_selector_runs() {
        let mut s = String::new();
        for b in 0..=u8::MAX {
            s.push(to_variation_selector(b).unwrap());
        }
        assert_eq!(clean_hidden_text(&s), "");
    }

    #[test]
    fn test_idempotent() {
        let encoded = encode("payload", "carrier text here");
        let once = clean_hidden_text(&encoded);
        assert_eq!(clean_hidden_text(&once), once);
    }
}
