//! Field highlighting for missing captions
//!
//! Branches are checked in order; only the "both present" branch clears the
//! error text.

use crate::page::{BorderStyle, Page};

/// Updates the caption input borders (and possibly the error text)
///
/// `top` and `bottom` are the normalized caption values.
pub fn render_input_colors(page: &mut Page, top: &str, bottom: &str) {
    let top_present = !top.is_empty();
    let bottom_present = !bottom.is_empty();

    match (top_present, bottom_present) {
        (false, true) => {
            page.top_input.border = BorderStyle::Error;
            page.bottom_input.border = BorderStyle::Neutral;
        }
        (true, false) => {
            page.top_input.border = BorderStyle::Neutral;
            page.bottom_input.border = BorderStyle::Error;
        }
        (false, false) => {
            page.top_input.border = BorderStyle::Error;
            page.bottom_input.border = BorderStyle::Error;
        }
        (true, true) => {
            page.top_input.border = BorderStyle::Neutral;
            page.bottom_input.border = BorderStyle::Neutral;
            page.error_text.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_error() -> Page {
        let mut page = Page::new();
        page.error_text = "previous error".to_string();
        page
    }

    #[test]
    fn test_missing_top_only() {
        let mut page = page_with_error();
        render_input_colors(&mut page, "", "BOTTOM");

        assert_eq!(page.top_input.border, BorderStyle::Error);
        assert_eq!(page.bottom_input.border, BorderStyle::Neutral);
        assert_eq!(page.error_text, "previous error");
    }

    #[test]
    fn test_missing_bottom_only() {
        let mut page = page_with_error();
        render_input_colors(&mut page, "TOP", "");

        assert_eq!(page.top_input.border, BorderStyle::Neutral);
        assert_eq!(page.bottom_input.border, BorderStyle::Error);
        assert_eq!(page.error_text, "previous error");
    }

    #[test]
    fn test_both_missing() {
        let mut page = page_with_error();
        render_input_colors(&mut page, "", "");

        assert_eq!(page.top_input.border, BorderStyle::Error);
        assert_eq!(page.bottom_input.border, BorderStyle::Error);
        assert_eq!(page.error_text, "previous error");
    }

    #[test]
    fn test_both_present_clears_error() {
        let mut page = page_with_error();
        page.top_input.border = BorderStyle::Error;
        page.bottom_input.border = BorderStyle::Error;

        render_input_colors(&mut page, "TOP", "BOTTOM");

        assert_eq!(page.top_input.border, BorderStyle::Neutral);
        assert_eq!(page.bottom_input.border, BorderStyle::Neutral);
        assert!(page.error_text.is_empty());
    }

    #[test]
    fn test_fixing_one_field_resets_its_border() {
        let mut page = Page::new();
        render_input_colors(&mut page, "", "");
        render_input_colors(&mut page, "TOP", "");

        assert_eq!(page.top_input.border, BorderStyle::Neutral);
        assert_eq!(page.bottom_input.border, BorderStyle::Error);
    }
}
