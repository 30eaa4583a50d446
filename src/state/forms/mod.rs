//! Form domain layer
//!
//! Type-safe form handling for the registration, admin login and
//! property create views: field values with their validity tri-state,
//! the validators, the field-change reducers and the submission flow.

mod events;
mod field;
mod form_state;
mod submit;
pub mod validators;

pub use events::{
    revalidate_register_field, LoginFieldChange, PropertyFieldChange, RegisterFieldChange,
};
pub use field::{FieldValue, FormField, Validity};
pub use form_state::{
    AdminLoginForm, Form, FormState, PropertyCreateForm, RegisterForm, PROPERTY_STATUSES,
    PROPERTY_TYPES, ROLE_PLACEHOLDER_ID,
};
pub use submit::{Submission, SubmitPhase, INVALID_DATA_MSG};
