//! Typed field-change events and the per-form reducers
//!
//! Each form consumes one tagged union of change events carrying its
//! own payload, applied through a single reducer. The reducer sets the
//! new value and re-runs exactly the validators that depend on it.

use super::form_state::{AdminLoginForm, PropertyCreateForm, RegisterForm};
use super::validators;

/// Field changes on the registration form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterFieldChange {
    Username(String),
    Phone(String),
    Email(String),
    Password(String),
    RePassword(String),
    Role(i64),
}

impl RegisterForm {
    /// Apply a field change and refresh the affected validities.
    ///
    /// A password change also re-validates the confirmation field: its
    /// validity depends on both sides and must track whichever moved.
    pub fn apply(&mut self, change: RegisterFieldChange) {
        match change {
            RegisterFieldChange::Username(value) => {
                self.username.validity = validators::username(&value);
                self.username.set_text(value);
            }
            RegisterFieldChange::Phone(value) => {
                self.phone.validity = validators::phone(&value);
                self.phone.set_text(value);
            }
            RegisterFieldChange::Email(value) => {
                self.email.validity = validators::email(&value);
                self.email.set_text(value);
            }
            RegisterFieldChange::Password(value) => {
                self.password.validity = validators::password(&value);
                self.re_password.validity =
                    validators::password_confirmation(self.re_password.as_text(), &value);
                self.password.set_text(value);
            }
            RegisterFieldChange::RePassword(value) => {
                self.re_password.validity =
                    validators::password_confirmation(&value, self.password.as_text());
                self.re_password.set_text(value);
            }
            RegisterFieldChange::Role(id) => {
                self.role_id = id;
                self.role_validity = validators::role(id);
            }
        }
    }
}

/// Field changes on the admin login form (no validation attached)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFieldChange {
    Email(String),
    Password(String),
}

impl AdminLoginForm {
    pub fn apply(&mut self, change: LoginFieldChange) {
        match change {
            LoginFieldChange::Email(value) => self.email.set_text(value),
            LoginFieldChange::Password(value) => self.password.set_text(value),
        }
    }
}

/// Field changes on the property create form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyFieldChange {
    CycleType,
    CycleStatus,
    Price(String),
    Area(String),
    Bedrooms(String),
    Bathrooms(String),
    City(String),
    Street(String),
    Country(String),
    Description(String),
    /// Check/uncheck one feature id
    ToggleFeature(i64),
}

impl PropertyCreateForm {
    pub fn apply(&mut self, change: PropertyFieldChange) {
        match change {
            PropertyFieldChange::CycleType => self.cycle_type(),
            PropertyFieldChange::CycleStatus => self.cycle_status(),
            PropertyFieldChange::Price(value) => self.price.set_text(value),
            PropertyFieldChange::Area(value) => self.area.set_text(value),
            PropertyFieldChange::Bedrooms(value) => self.bedrooms.set_text(value),
            PropertyFieldChange::Bathrooms(value) => self.bathrooms.set_text(value),
            PropertyFieldChange::City(value) => self.city.set_text(value),
            PropertyFieldChange::Street(value) => self.street.set_text(value),
            PropertyFieldChange::Country(value) => self.country.set_text(value),
            PropertyFieldChange::Description(value) => self.description.set_text(value),
            PropertyFieldChange::ToggleFeature(id) => {
                if let Some(pos) = self.features.iter().position(|&f| f == id) {
                    self.features.remove(pos);
                } else {
                    self.features.push(id);
                }
            }
        }
    }
}

/// Re-run the validator for whichever register field just changed via
/// direct character editing (push/pop on the active field).
pub fn revalidate_register_field(form: &mut RegisterForm, index: usize) {
    match index {
        0 => form.username.validity = validators::username(form.username.as_text()),
        1 => form.phone.validity = validators::phone(form.phone.as_text()),
        2 => form.email.validity = validators::email(form.email.as_text()),
        3 => {
            form.password.validity = validators::password(form.password.as_text());
            form.re_password.validity = validators::password_confirmation(
                form.re_password.as_text(),
                form.password.as_text(),
            );
        }
        4 => {
            form.re_password.validity = validators::password_confirmation(
                form.re_password.as_text(),
                form.password.as_text(),
            );
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::Validity;

    mod register_reducer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_username_change_sets_value_and_validity() {
            let mut form = RegisterForm::new();
            form.apply(RegisterFieldChange::Username("joe".into()));
            assert_eq!(form.username.as_text(), "joe");
            assert_eq!(form.username.validity, Validity::Invalid);

            form.apply(RegisterFieldChange::Username("johndoe".into()));
            assert_eq!(form.username.validity, Validity::Valid);
        }

        #[test]
        fn test_clearing_username_returns_to_unknown() {
            let mut form = RegisterForm::new();
            form.apply(RegisterFieldChange::Username("johndoe".into()));
            form.apply(RegisterFieldChange::Username(String::new()));
            assert_eq!(form.username.validity, Validity::Unknown);
        }

        #[test]
        fn test_password_change_revalidates_confirmation() {
            let mut form = RegisterForm::new();
            form.apply(RegisterFieldChange::Password("abcdefgh".into()));
            form.apply(RegisterFieldChange::RePassword("abcdefgh".into()));
            assert_eq!(form.re_password.validity, Validity::Valid);

            // Changing the password side must flip the confirmation
            form.apply(RegisterFieldChange::Password("abcdefghi".into()));
            assert_eq!(form.re_password.validity, Validity::Invalid);

            // And bringing it back restores it
            form.apply(RegisterFieldChange::Password("abcdefgh".into()));
            assert_eq!(form.re_password.validity, Validity::Valid);
        }

        #[test]
        fn test_empty_confirmation_stays_unknown_when_password_changes() {
            let mut form = RegisterForm::new();
            form.apply(RegisterFieldChange::Password("abcdefgh".into()));
            assert_eq!(form.re_password.validity, Validity::Unknown);
        }

        #[test]
        fn test_role_change() {
            let mut form = RegisterForm::new();
            form.apply(RegisterFieldChange::Role(2));
            assert_eq!(form.role_id, 2);
            assert_eq!(form.role_validity, Validity::Valid);

            form.apply(RegisterFieldChange::Role(-99));
            assert_eq!(form.role_validity, Validity::Invalid);
        }

        #[test]
        fn test_revalidate_after_char_edit() {
            let mut form = RegisterForm::new();
            form.email.push_char('a');
            revalidate_register_field(&mut form, 2);
            assert_eq!(form.email.validity, Validity::Invalid);

            for c in "@b.co".chars() {
                form.email.push_char(c);
            }
            revalidate_register_field(&mut form, 2);
            assert_eq!(form.email.validity, Validity::Valid);
        }
    }

    mod property_reducer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_toggle_feature_appends_then_removes() {
            let mut form = PropertyCreateForm::new();
            form.apply(PropertyFieldChange::ToggleFeature(3));
            form.apply(PropertyFieldChange::ToggleFeature(1));
            assert_eq!(form.features, vec![3, 1]);

            form.apply(PropertyFieldChange::ToggleFeature(3));
            assert_eq!(form.features, vec![1]);
        }

        #[test]
        fn test_scalar_changes() {
            let mut form = PropertyCreateForm::new();
            form.apply(PropertyFieldChange::Price("120000".into()));
            form.apply(PropertyFieldChange::City("Sofia".into()));
            form.apply(PropertyFieldChange::CycleStatus);
            assert_eq!(form.price.as_number(), 120_000);
            assert_eq!(form.city.as_text(), "Sofia");
            assert_eq!(form.property_status(), "rent");
        }
    }

    mod login_reducer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_login_changes_set_values() {
            let mut form = AdminLoginForm::new();
            form.apply(LoginFieldChange::Email("admin@example.com".into()));
            form.apply(LoginFieldChange::Password("hunter22".into()));
            assert_eq!(form.email.as_text(), "admin@example.com");
            assert_eq!(form.password.as_text(), "hunter22");
        }
    }
}
