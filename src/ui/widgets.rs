//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a scrollable list that automatically keeps the selected item visible.
///
/// This is the preferred way to render lists in the app. It wraps `render_stateful_widget`
/// with a `ListState`, ensuring the list scrolls to keep the selected item in view.
///
/// # Example
/// ```ignore
/// let list = List::new(items).block(block);
/// render_scrollable_list(frame, area, list, app.state.selected_index);
/// ```
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Uppercase the first character of a label for display.
///
/// Option and type names arrive lowercase from the backend; this is
/// display-only and never changes what gets sent back.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capitalize_lowercase_word() {
        assert_eq!(capitalize("apartment"), "Apartment");
    }

    #[test]
    fn test_capitalize_empty_string() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_leaves_rest_untouched() {
        assert_eq!(capitalize("buyER"), "BuyER");
        assert_eq!(capitalize("Already"), "Already");
    }

    #[test]
    fn test_capitalize_single_char() {
        assert_eq!(capitalize("x"), "X");
    }
}
