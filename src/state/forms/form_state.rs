//! Form state management and form structs

use super::field::{FormField, Validity};
use crate::state::attachments::AttachmentSet;
use crate::state::PropertyDraft;

/// Sentinel id of the "Choose a role" placeholder row
pub const ROLE_PLACEHOLDER_ID: i64 = -99;

/// Property types offered by the create form, in display order
pub const PROPERTY_TYPES: &[&str] = &["apartment", "house", "office", "garage"];

/// Listing statuses offered by the create form
pub const PROPERTY_STATUSES: &[&str] = &["rent", "buy"];

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Enum representing all possible form states
#[derive(Debug, Default)]
pub enum FormState {
    #[default]
    None,
    Register(RegisterForm),
    AdminLogin(AdminLoginForm),
    PropertyCreate(PropertyCreateForm),
}

impl FormState {
    pub fn next_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::Register(f) => f.next_field(),
            FormState::AdminLogin(f) => f.next_field(),
            FormState::PropertyCreate(f) => f.next_field(),
        }
    }

    pub fn prev_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::Register(f) => f.prev_field(),
            FormState::AdminLogin(f) => f.prev_field(),
            FormState::PropertyCreate(f) => f.prev_field(),
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        match self {
            FormState::None => false,
            FormState::Register(f) => f
                .get_field(f.active_field())
                .is_some_and(|f| f.is_multiline),
            FormState::AdminLogin(f) => f
                .get_field(f.active_field())
                .is_some_and(|f| f.is_multiline),
            FormState::PropertyCreate(f) => f
                .get_field(f.active_field())
                .is_some_and(|f| f.is_multiline),
        }
    }
}

// Registration form

#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub username: FormField,
    pub phone: FormField,
    pub email: FormField,
    pub password: FormField,
    pub re_password: FormField,
    /// Selected role id; stays at the placeholder sentinel until chosen
    pub role_id: i64,
    pub role_validity: Validity,
    /// Cursor into the loaded role options when the role row is active
    pub role_cursor: usize,
    pub active_field_index: usize,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            username: FormField::text("username", "Username", false),
            phone: FormField::text("phoneNumber", "Phone number", false),
            email: FormField::text("email", "Email", false),
            password: FormField::secret("password", "Password"),
            re_password: FormField::secret("rePassword", "Confirm password"),
            role_id: ROLE_PLACEHOLDER_ID,
            role_validity: Validity::Unknown,
            role_cursor: 0,
            active_field_index: 0,
        }
    }

    /// True when the role select row is the active field
    pub fn is_role_row_active(&self) -> bool {
        self.active_field_index == 5
    }

    /// Overall form validity: the conjunction of every required field.
    /// Pure over the current field validities, nothing else.
    pub fn is_valid(&self) -> bool {
        self.username.validity.is_valid()
            && self.phone.validity.is_valid()
            && self.email.validity.is_valid()
            && self.password.validity.is_valid()
            && self.re_password.validity.is_valid()
            && self.role_validity.is_valid()
    }

    /// Clear the sensitive fields after a successful submission
    pub fn clear_sensitive(&mut self) {
        self.password.clear();
        self.re_password.clear();
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn field_count(&self) -> usize {
        6 // username, phone, email, password, rePassword, role select
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(5);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.username,
            1 => &mut self.phone,
            2 => &mut self.email,
            3 => &mut self.password,
            // Role row (index 5) returns rePassword as dummy; it takes
            // no text input
            _ => &mut self.re_password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.username),
            1 => Some(&self.phone),
            2 => Some(&self.email),
            3 => Some(&self.password),
            4 => Some(&self.re_password),
            // Index 5 is the role select, no FormField for it
            _ => None,
        }
    }
}

// Admin login form (modal); no client-side validation, the backend
// answers with a single pass/fail

#[derive(Debug, Clone)]
pub struct AdminLoginForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

impl AdminLoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email", false),
            password: FormField::secret("password", "Password"),
            active_field_index: 0,
        }
    }
}

impl Default for AdminLoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for AdminLoginForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            _ => None,
        }
    }
}

// Property create form (admin panel)

#[derive(Debug)]
pub struct PropertyCreateForm {
    /// Index into [`PROPERTY_TYPES`]; None until chosen
    pub type_index: Option<usize>,
    /// Index into [`PROPERTY_STATUSES`]; None until chosen
    pub status_index: Option<usize>,
    pub price: FormField,
    pub area: FormField,
    pub bedrooms: FormField,
    pub bathrooms: FormField,
    pub city: FormField,
    pub street: FormField,
    pub country: FormField,
    pub description: FormField,
    /// Selected feature ids, in toggle order
    pub features: Vec<i64>,
    /// Cursor into the loaded feature options when the features row is active
    pub feature_cursor: usize,
    /// Path being typed on the attachments row
    pub attachment_input: FormField,
    pub attachments: AttachmentSet,
    pub active_field_index: usize,
}

impl PropertyCreateForm {
    pub fn new() -> Self {
        Self {
            type_index: None,
            status_index: None,
            price: FormField::number("price", "Price"),
            area: FormField::number("area", "Area (sq ft)"),
            bedrooms: FormField::number("bedrooms", "Bedrooms"),
            bathrooms: FormField::number("bathrooms", "Bathrooms"),
            city: FormField::text("city", "City", false),
            street: FormField::text("street", "Street", false),
            country: FormField::text("country", "Country", false),
            description: FormField::text("description", "Property Description", true),
            features: Vec::new(),
            feature_cursor: 0,
            attachment_input: FormField::text("attachment", "Image path", false),
            attachments: AttachmentSet::new(),
            active_field_index: 0,
        }
    }

    pub fn property_type(&self) -> &str {
        self.type_index.map(|i| PROPERTY_TYPES[i]).unwrap_or("")
    }

    pub fn property_status(&self) -> &str {
        self.status_index.map(|i| PROPERTY_STATUSES[i]).unwrap_or("")
    }

    /// Cycle the type select through its options
    pub fn cycle_type(&mut self) {
        self.type_index = Some(match self.type_index {
            None => 0,
            Some(i) => (i + 1) % PROPERTY_TYPES.len(),
        });
    }

    /// Cycle the status select through its options
    pub fn cycle_status(&mut self) {
        self.status_index = Some(match self.status_index {
            None => 0,
            Some(i) => (i + 1) % PROPERTY_STATUSES.len(),
        });
    }

    pub fn is_features_row_active(&self) -> bool {
        self.active_field_index == 10
    }

    /// Snapshot of everything the submission sends to the backend
    pub fn to_draft(&self) -> PropertyDraft {
        PropertyDraft {
            property_type: self.property_type().to_string(),
            status: self.property_status().to_string(),
            price: self.price.as_number(),
            area: self.area.as_number(),
            bedrooms: self.bedrooms.as_number(),
            bathrooms: self.bathrooms.as_number(),
            city: self.city.as_text().to_string(),
            street: self.street.as_text().to_string(),
            country: self.country.as_text().to_string(),
            description: self.description.as_text().to_string(),
            feature_ids: self.features.clone(),
            images: self.attachments.source_paths(),
        }
    }

    pub fn is_attachments_row_active(&self) -> bool {
        self.active_field_index == 11
    }
}

impl Default for PropertyCreateForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for PropertyCreateForm {
    fn field_count(&self) -> usize {
        12 // type, status, 4 numbers, 4 texts, features row, attachments row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(11);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            2 => &mut self.price,
            3 => &mut self.area,
            4 => &mut self.bedrooms,
            5 => &mut self.bathrooms,
            6 => &mut self.city,
            7 => &mut self.street,
            8 => &mut self.country,
            9 => &mut self.description,
            11 => &mut self.attachment_input,
            // Select rows (0, 1) and the features row (10) take no text
            // input; return description as dummy
            _ => &mut self.description,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            2 => Some(&self.price),
            3 => Some(&self.area),
            4 => Some(&self.bedrooms),
            5 => Some(&self.bathrooms),
            6 => Some(&self.city),
            7 => Some(&self.street),
            8 => Some(&self.country),
            9 => Some(&self.description),
            11 => Some(&self.attachment_input),
            _ => None,
        }
    }
}
