//! Application state and core logic

use crate::api::{ApiClient, ApiClientTrait};
use crate::config::TuiConfig;
use crate::session::{Session, SessionStore};
use crate::state::{
    revalidate_register_field, AdminLoginForm, AppState, Form, FormState, PropertyCreateForm,
    RegisterFieldChange, RegisterForm, SelectionOption, View,
};
use crate::platform::SUBMIT_MODIFIER;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Generic message when registration fails without field details
pub const REGISTRATION_FAILED_MSG: &str = "An error occurred during registration.";

/// Message for any failed admin login, including non-admin accounts
pub const LOGIN_FAILED_MSG: &str = "Invalid username or password";

/// Generic message when property creation fails without details
pub const PROPERTY_FAILED_MSG: &str = "An error occurred while creating the property.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// REST client for the listings backend
    pub api: ApiClient,
    /// Persists the admin session between runs
    pub session_store: SessionStore,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance, rehydrating any persisted session
    pub fn new(config: &TuiConfig) -> Self {
        let mut api = ApiClient::new(config.resolved_api_url());
        let session_store = SessionStore::new();
        let mut state = AppState::default();

        match session_store.load() {
            Ok(Some(session)) => {
                api.set_token(Some(session.token.clone()));
                state.session = Some(session);
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "failed to load persisted session"),
        }

        Self {
            state,
            api,
            session_store,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the status bar
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Open the registration form and load its role options
    pub async fn open_register_form(&mut self) {
        self.state
            .open_form(FormState::Register(RegisterForm::new()), View::Register);
        self.state.role_options = load_role_options(&self.api).await;
    }

    /// Open the admin area; shows the login modal unless a session exists
    pub fn open_admin(&mut self) {
        if self.state.is_admin() {
            self.state.current_view = View::Admin;
        } else {
            self.state.open_form(
                FormState::AdminLogin(AdminLoginForm::new()),
                View::Admin,
            );
        }
    }

    /// Open the property create form and load its feature options
    pub async fn open_property_form(&mut self) {
        self.state.open_form(
            FormState::PropertyCreate(PropertyCreateForm::new()),
            View::PropertyCreate,
        );
        self.state.feature_options = load_feature_options(&self.api).await;
    }

    /// Destroy the session and return to the home view
    pub fn logout(&mut self) {
        if let Err(err) = self.session_store.clear() {
            tracing::warn!(%err, "failed to clear persisted session");
        }
        self.state.session = None;
        self.api.set_token(None);
        self.state.current_view = View::Home;
        self.state.status_message = Some("Logged out".to_string());
    }

    async fn submit_login(&mut self) {
        submit_admin_login(&mut self.state, &self.api, &self.session_store).await;
        // Pick up the freshly created session's token for admin calls
        let token = self.state.session.as_ref().map(|s| s.token.clone());
        self.api.set_token(token);
    }

    /// Handle a key event for the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Home => self.handle_home_key(key).await,
            View::Properties => self.handle_properties_key(key),
            View::Register => self.handle_register_key(key).await,
            View::Admin => self.handle_admin_key(key).await,
            View::PropertyCreate => self.handle_property_form_key(key).await,
        }
        Ok(())
    }

    async fn handle_home_key(&mut self, key: KeyEvent) {
        let editing_location = self.state.search.active_field == 2;
        match key.code {
            KeyCode::Tab => self.state.search.next_field(),
            KeyCode::BackTab => self.state.search.prev_field(),
            KeyCode::Enter => run_search(&mut self.state, &self.api).await,
            KeyCode::Up | KeyCode::Down => match self.state.search.active_field {
                0 => self.state.search.cycle_status(),
                1 => self.state.search.cycle_type(),
                _ => {}
            },
            KeyCode::Backspace if editing_location => self.state.search.location.pop_char(),
            KeyCode::Char(c) if editing_location => self.state.search.location.push_char(c),
            KeyCode::Char(' ') => match self.state.search.active_field {
                0 => self.state.search.cycle_status(),
                1 => self.state.search.cycle_type(),
                _ => {}
            },
            KeyCode::Char('r') => self.open_register_form().await,
            KeyCode::Char('a') => self.open_admin(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_properties_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Down => {
                let max = self.state.properties.len();
                self.state.move_selection_down(max);
            }
            KeyCode::Esc | KeyCode::Char('h') => {
                self.state.current_view = View::Home;
                self.state.reset_selection();
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    async fn handle_register_key(&mut self, key: KeyEvent) {
        // Ctrl+S submits from any field
        if key.code == KeyCode::Char('s') && key.modifiers.contains(SUBMIT_MODIFIER) {
            submit_registration(&mut self.state, &self.api).await;
            return;
        }

        match key.code {
            KeyCode::Esc => self.state.close_form(View::Home),
            KeyCode::Tab => self.state.form_state.next_field(),
            KeyCode::BackTab => self.state.form_state.prev_field(),
            KeyCode::Up | KeyCode::Down => self.cycle_role(key.code == KeyCode::Down),
            KeyCode::Enter => {
                if let FormState::Register(form) = &self.state.form_state {
                    if form.is_role_row_active() {
                        submit_registration(&mut self.state, &self.api).await;
                    } else {
                        self.state.form_state.next_field();
                    }
                }
            }
            KeyCode::Backspace => {
                if let FormState::Register(form) = &mut self.state.form_state {
                    if !form.is_role_row_active() {
                        let index = form.active_field();
                        form.get_active_field_mut().pop_char();
                        revalidate_register_field(form, index);
                    }
                }
            }
            KeyCode::Char(c) => {
                if let FormState::Register(form) = &mut self.state.form_state {
                    if !form.is_role_row_active() {
                        let index = form.active_field();
                        form.get_active_field_mut().push_char(c);
                        revalidate_register_field(form, index);
                    }
                }
            }
            _ => {}
        }
    }

    /// Move the role select and dispatch the change through the reducer
    fn cycle_role(&mut self, down: bool) {
        let options = &self.state.role_options;
        if options.is_empty() {
            return;
        }
        if let FormState::Register(form) = &mut self.state.form_state {
            if !form.is_role_row_active() {
                return;
            }
            if down {
                form.role_cursor = (form.role_cursor + 1) % options.len();
            } else if form.role_cursor == 0 {
                form.role_cursor = options.len() - 1;
            } else {
                form.role_cursor -= 1;
            }
            let id = options[form.role_cursor].id;
            form.apply(RegisterFieldChange::Role(id));
        }
    }

    async fn handle_admin_key(&mut self, key: KeyEvent) {
        if self.state.is_admin() {
            match key.code {
                KeyCode::Char('p') => self.open_property_form().await,
                KeyCode::Char('l') => self.logout(),
                KeyCode::Esc | KeyCode::Char('h') => self.state.current_view = View::Home,
                KeyCode::Char('q') => self.quit = true,
                _ => {}
            }
            return;
        }

        // Login modal
        match key.code {
            KeyCode::Esc => self.state.close_form(View::Home),
            KeyCode::Tab | KeyCode::BackTab => self.state.form_state.next_field(),
            KeyCode::Enter => self.submit_login().await,
            KeyCode::Backspace => {
                if let FormState::AdminLogin(form) = &mut self.state.form_state {
                    form.get_active_field_mut().pop_char();
                }
            }
            KeyCode::Char(c) => {
                if let FormState::AdminLogin(form) = &mut self.state.form_state {
                    form.get_active_field_mut().push_char(c);
                }
            }
            _ => {}
        }
    }

    async fn handle_property_form_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('s') && key.modifiers.contains(SUBMIT_MODIFIER) {
            submit_property(&mut self.state, &self.api).await;
            return;
        }

        match key.code {
            KeyCode::Esc => self.state.close_form(View::Admin),
            KeyCode::Tab => self.state.form_state.next_field(),
            KeyCode::BackTab => self.state.form_state.prev_field(),
            KeyCode::Up | KeyCode::Down => self.move_feature_cursor(key.code == KeyCode::Down),
            KeyCode::Enter if self.state.form_state.is_active_field_multiline() => {
                if let FormState::PropertyCreate(form) = &mut self.state.form_state {
                    form.get_active_field_mut().push_char('\n');
                }
            }
            KeyCode::Enter => {
                if let FormState::PropertyCreate(form) = &mut self.state.form_state {
                    if form.is_attachments_row_active() {
                        let path =
                            std::path::PathBuf::from(form.attachment_input.as_text().to_string());
                        match form.attachments.add(&path) {
                            Ok(()) => form.attachment_input.clear(),
                            Err(err) => {
                                tracing::warn!(%err, "failed to attach image");
                                self.state.push_error(format!("Could not attach {}", path.display()));
                            }
                        }
                    } else {
                        self.state.form_state.next_field();
                    }
                }
            }
            KeyCode::Delete => {
                if let FormState::PropertyCreate(form) = &mut self.state.form_state {
                    if form.is_attachments_row_active() && !form.attachments.is_empty() {
                        let last = form.attachments.len() - 1;
                        form.attachments.remove_at(last);
                    }
                }
            }
            KeyCode::Char(' ') => {
                if let FormState::PropertyCreate(form) = &mut self.state.form_state {
                    match form.active_field() {
                        0 => form.cycle_type(),
                        1 => form.cycle_status(),
                        10 => {
                            if let Some(option) =
                                self.state.feature_options.get(form.feature_cursor)
                            {
                                let id = option.id;
                                form.apply(crate::state::PropertyFieldChange::ToggleFeature(id));
                            }
                        }
                        _ => form.get_active_field_mut().push_char(' '),
                    }
                }
            }
            KeyCode::Backspace => {
                if let FormState::PropertyCreate(form) = &mut self.state.form_state {
                    match form.active_field() {
                        // Select and checklist rows take no text input
                        0 | 1 | 10 => {}
                        _ => form.get_active_field_mut().pop_char(),
                    }
                }
            }
            KeyCode::Char(c) => {
                if let FormState::PropertyCreate(form) = &mut self.state.form_state {
                    match form.active_field() {
                        0 | 1 | 10 => {}
                        _ => form.get_active_field_mut().push_char(c),
                    }
                }
            }
            _ => {}
        }
    }

    fn move_feature_cursor(&mut self, down: bool) {
        let count = self.state.feature_options.len();
        if count == 0 {
            return;
        }
        if let FormState::PropertyCreate(form) = &mut self.state.form_state {
            if !form.is_features_row_active() {
                return;
            }
            if down {
                form.feature_cursor = (form.feature_cursor + 1) % count;
            } else if form.feature_cursor == 0 {
                form.feature_cursor = count - 1;
            } else {
                form.feature_cursor -= 1;
            }
        }
    }
}

/// Load role options; a failed fetch is logged and leaves the list empty
pub async fn load_role_options<C: ApiClientTrait + ?Sized>(api: &C) -> Vec<SelectionOption> {
    match api.list_roles().await {
        Ok(options) => options,
        Err(err) => {
            tracing::error!(%err, "error fetching roles");
            Vec::new()
        }
    }
}

/// Load feature options; a failed fetch is logged and leaves the list empty
pub async fn load_feature_options<C: ApiClientTrait + ?Sized>(api: &C) -> Vec<SelectionOption> {
    match api.list_features().await {
        Ok(options) => options,
        Err(err) => {
            tracing::error!(%err, "error fetching features");
            Vec::new()
        }
    }
}

/// Run the home search and show the results view
pub async fn run_search<C: ApiClientTrait + ?Sized>(state: &mut AppState, api: &C) {
    let filters = state.search.filters();
    match api.search_properties(&filters).await {
        Ok(properties) => {
            state.properties = properties;
            state.reset_selection();
            state.current_view = View::Properties;
        }
        Err(err) => {
            tracing::error!(%err, "property search failed");
            state.push_error("Could not load properties");
        }
    }
}

/// Submission flow for the registration form.
///
/// Local validation failure surfaces the generic message and makes no
/// call; a submit while one is outstanding is ignored; success clears
/// the sensitive fields and navigates home; failure surfaces the
/// server's field messages and stays on the form.
pub async fn submit_registration<C: ApiClientTrait + ?Sized>(state: &mut AppState, api: &C) {
    let (email, username, password, phone, re_password, role_id, valid) =
        match &state.form_state {
            FormState::Register(form) => (
                form.email.as_text().to_string(),
                form.username.as_text().to_string(),
                form.password.as_text().to_string(),
                form.phone.as_text().to_string(),
                form.re_password.as_text().to_string(),
                form.role_id,
                form.is_valid(),
            ),
            _ => return,
        };

    if !valid {
        state.submission.reject_local();
        return;
    }
    if !state.submission.begin() {
        return;
    }

    match api
        .register(&email, &username, &password, &phone, &re_password, role_id)
        .await
    {
        Ok(()) => {
            state.submission.finish_success();
            if let FormState::Register(form) = &mut state.form_state {
                form.clear_sensitive();
            }
            state.close_form(View::Home);
            state.status_message = Some("Registration successful".to_string());
        }
        Err(err) => {
            state
                .submission
                .finish_failure(err.messages(REGISTRATION_FAILED_MSG));
        }
    }
}

/// Submission flow for the admin login modal. A 2xx response with
/// `isAdmin == false` counts as a failed login.
pub async fn submit_admin_login<C: ApiClientTrait + ?Sized>(
    state: &mut AppState,
    api: &C,
    store: &SessionStore,
) {
    let (email, password) = match &state.form_state {
        FormState::AdminLogin(form) => (
            form.email.as_text().to_string(),
            form.password.as_text().to_string(),
        ),
        _ => return,
    };

    if !state.submission.begin() {
        return;
    }

    match api.admin_login(&email, &password).await {
        Ok(response) if response.is_admin => {
            let session = Session::new(email, response.token, true);
            if let Err(err) = store.save(&session) {
                tracing::warn!(%err, "failed to persist session");
            }
            state.session = Some(session);
            state.submission.finish_success();
            state.close_form(View::Admin);
        }
        Ok(_) | Err(_) => {
            state
                .submission
                .finish_failure(vec![LOGIN_FAILED_MSG.to_string()]);
        }
    }
}

/// Submission flow for the property create form. Closing the form on
/// success drops the attachment set, releasing every preview handle.
pub async fn submit_property<C: ApiClientTrait + ?Sized>(state: &mut AppState, api: &C) {
    let draft = match &state.form_state {
        FormState::PropertyCreate(form) => form.to_draft(),
        _ => return,
    };

    if !state.submission.begin() {
        return;
    }

    match api.create_property(&draft).await {
        Ok(()) => {
            state.submission.finish_success();
            state.close_form(View::Admin);
            state.status_message = Some("Property created".to_string());
        }
        Err(err) => {
            state
                .submission
                .finish_failure(err.messages(PROPERTY_FAILED_MSG));
        }
    }
}
