//! Caption input normalization
//!
//! Reads both caption fields off the page and normalizes them the same way
//! every time: surrounding whitespace trimmed, letters upper-cased.

use crate::page::Page;

/// The top and bottom text for one render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionPair {
    pub top: String,
    pub bottom: String,
}

impl CaptionPair {
    /// Normalizes raw caption input
    pub fn normalize(top: &str, bottom: &str) -> Self {
        Self {
            top: normalize_caption(top),
            bottom: normalize_caption(bottom),
        }
    }

    /// Whether both captions have text
    pub fn is_complete(&self) -> bool {
        !self.top.is_empty() && !self.bottom.is_empty()
    }
}

/// Trims and upper-cases a single caption
pub fn normalize_caption(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Reads the current values of both caption inputs
pub fn read_captions(page: &Page) -> CaptionPair {
    CaptionPair::normalize(&page.top_input.value, &page.bottom_input.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_uppercases() {
        let pair = CaptionPair::normalize("  Hello ", "\tWorld\n");
        assert_eq!(pair.top, "HELLO");
        assert_eq!(pair.bottom, "WORLD");
        assert!(pair.is_complete());
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let pair = CaptionPair::normalize("   ", "bottom");
        assert_eq!(pair.top, "");
        assert!(!pair.is_complete());
    }

    #[test]
    fn test_incomplete_combinations() {
        assert!(!CaptionPair::normalize("", "").is_complete());
        assert!(!CaptionPair::normalize("a", "").is_complete());
        assert!(!CaptionPair::normalize("", "b").is_complete());
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        assert_eq!(normalize_caption(" one  does not "), "ONE  DOES NOT");
    }

    #[test]
    fn test_non_ascii_is_uppercased() {
        assert_eq!(normalize_caption("straße"), "STRASSE");
        assert_eq!(normalize_caption("élan"), "ÉLAN");
    }

    #[test]
    fn test_read_captions_from_page() {
        let mut page = Page::new();
        page.top_input.value = " when the build ".to_string();
        page.bottom_input.value = "passes first try".to_string();

        let pair = read_captions(&page);

        assert_eq!(pair.top, "WHEN THE BUILD");
        assert_eq!(pair.bottom, "PASSES FIRST TRY");
    }

    #[test]
    fn test_read_captions_does_not_modify_inputs() {
        let mut page = Page::new();
        page.top_input.value = " lower ".to_string();

        let _ = read_captions(&page);

        assert_eq!(page.top_input.value, " lower ");
    }
}
