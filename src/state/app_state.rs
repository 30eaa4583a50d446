//! Application state definitions

use crate::session::Session;
use crate::state::forms::{FormField, FormState, Submission, PROPERTY_STATUSES, PROPERTY_TYPES};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Landing page with the property search bar
    #[default]
    Home,
    /// Search results list
    Properties,
    /// User registration form
    Register,
    /// Admin area: login modal until a session exists, panel afterwards
    Admin,
    /// Property create form (admin panel)
    PropertyCreate,
}

/// Reference data row for selects and checklists (roles, features)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOption {
    pub id: i64,
    pub name: String,
}

/// Response of the admin login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    pub token: String,
}

/// A property record as returned by the listings backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    #[serde(rename = "type")]
    pub property_type: String,
    pub status: String,
    pub price: i64,
    pub area: i64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub city: String,
    pub street: String,
    pub country: String,
    #[serde(default)]
    pub description: String,
}

impl Property {
    pub fn location_line(&self) -> String {
        format!("{}, {}, {}", self.street, self.city, self.country)
    }
}

/// Search filters; empty values are dropped from the query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFilters {
    pub status: String,
    pub property_type: String,
    pub location: String,
}

impl PropertyFilters {
    /// Query pairs for the GET request, skipping empty filters
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.status.is_empty() {
            pairs.push(("status", self.status.clone()));
        }
        if !self.property_type.is_empty() {
            pairs.push(("type", self.property_type.clone()));
        }
        if !self.location.is_empty() {
            pairs.push(("location", self.location.clone()));
        }
        pairs
    }
}

/// Everything the property create submission sends to the backend
#[derive(Debug, Clone, Default)]
pub struct PropertyDraft {
    pub property_type: String,
    pub status: String,
    pub price: i64,
    pub area: i64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub city: String,
    pub street: String,
    pub country: String,
    pub description: String,
    pub feature_ids: Vec<i64>,
    pub images: Vec<PathBuf>,
}

/// State of the home view's search bar
#[derive(Debug)]
pub struct SearchState {
    /// Index into [`PROPERTY_STATUSES`]; None means "any"
    pub status_index: Option<usize>,
    /// Index into [`PROPERTY_TYPES`]; None means "any"
    pub type_index: Option<usize>,
    pub location: FormField,
    /// 0 = status select, 1 = type select, 2 = location input
    pub active_field: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            status_index: None,
            type_index: None,
            location: FormField::text("location", "Search for location...", false),
            active_field: 0,
        }
    }
}

impl SearchState {
    pub fn cycle_status(&mut self) {
        // None -> each option -> back to None ("any")
        self.status_index = match self.status_index {
            None => Some(0),
            Some(i) if i + 1 < PROPERTY_STATUSES.len() => Some(i + 1),
            Some(_) => None,
        };
    }

    pub fn cycle_type(&mut self) {
        self.type_index = match self.type_index {
            None => Some(0),
            Some(i) if i + 1 < PROPERTY_TYPES.len() => Some(i + 1),
            Some(_) => None,
        };
    }

    pub fn next_field(&mut self) {
        self.active_field = (self.active_field + 1) % 3;
    }

    pub fn prev_field(&mut self) {
        self.active_field = if self.active_field == 0 {
            2
        } else {
            self.active_field - 1
        };
    }

    pub fn filters(&self) -> PropertyFilters {
        PropertyFilters {
            status: self
                .status_index
                .map(|i| PROPERTY_STATUSES[i].to_string())
                .unwrap_or_default(),
            property_type: self
                .type_index
                .map(|i| PROPERTY_TYPES[i].to_string())
                .unwrap_or_default(),
            location: self.location.as_text().to_string(),
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Session, present after a successful admin login (or rehydrated
    // at startup)
    pub session: Option<Session>,

    // Home search bar
    pub search: SearchState,

    // Search results
    pub properties: Vec<Property>,
    pub selected_index: usize,

    // Reference data, loaded once per form open; empty on fetch failure
    pub role_options: Vec<SelectionOption>,
    pub feature_options: Vec<SelectionOption>,

    // The currently open form and its submission machine
    pub form_state: FormState,
    pub submission: Submission,

    // UI state
    pub status_message: Option<String>,
    pub errors: Vec<String>,
}

impl AppState {
    /// True when an admin session is active
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_admin)
    }

    /// Push an error message for display in the status bar
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Move selection down in the results list
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up in the results list
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Open a form: install its state and a fresh submission machine
    pub fn open_form(&mut self, form: FormState, view: View) {
        self.form_state = form;
        self.submission = Submission::new();
        self.current_view = view;
    }

    /// Discard the open form (attachment previews are released by Drop)
    pub fn close_form(&mut self, view: View) {
        self.form_state = FormState::None;
        self.submission = Submission::new();
        self.current_view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_view_is_home() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Home);
        assert!(state.session.is_none());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let mut state = AppState::default();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        state.move_selection_down(3);
        state.move_selection_down(3);
        state.move_selection_down(3);
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn test_search_filters_drop_empty_values() {
        let search = SearchState::default();
        assert!(search.filters().to_query().is_empty());
    }

    #[test]
    fn test_search_filters_keep_chosen_values() {
        let mut search = SearchState::default();
        search.cycle_status(); // rent
        search.cycle_type(); // apartment
        for c in "Sofia".chars() {
            search.location.push_char(c);
        }
        let query = search.filters().to_query();
        assert_eq!(
            query,
            vec![
                ("status", "rent".to_string()),
                ("type", "apartment".to_string()),
                ("location", "Sofia".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_cycle_wraps_back_to_any() {
        let mut search = SearchState::default();
        search.cycle_status();
        search.cycle_status();
        assert_eq!(search.filters().status, "buy");
        search.cycle_status();
        assert_eq!(search.filters().status, "");
    }

    #[test]
    fn test_open_form_resets_submission() {
        let mut state = AppState::default();
        state.submission.reject_local();
        state.open_form(
            FormState::Register(crate::state::forms::RegisterForm::new()),
            View::Register,
        );
        assert!(state.submission.messages.is_empty());
        assert_eq!(state.current_view, View::Register);
    }

    #[test]
    fn test_close_form_clears_form_state() {
        let mut state = AppState::default();
        state.open_form(
            FormState::Register(crate::state::forms::RegisterForm::new()),
            View::Register,
        );
        state.close_form(View::Home);
        assert!(matches!(state.form_state, FormState::None));
        assert_eq!(state.current_view, View::Home);
    }

    #[test]
    fn test_property_location_line() {
        let property = Property {
            id: 1,
            property_type: "apartment".into(),
            status: "rent".into(),
            price: 900,
            area: 85,
            bedrooms: 2,
            bathrooms: 1,
            city: "Sofia".into(),
            street: "Vitosha Blvd 1".into(),
            country: "Bulgaria".into(),
            description: String::new(),
        };
        assert_eq!(property.location_line(), "Vitosha Blvd 1, Sofia, Bulgaria");
    }
}
