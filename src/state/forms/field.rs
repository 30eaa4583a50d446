//! Form field value objects

/// Per-field validity tri-state.
///
/// `Unknown` means the field has not produced anything evaluable yet
/// (no input, or a dependent field is not comparable); it is distinct
/// from `Invalid` and also blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// Map a boolean check onto the tri-state.
    pub fn from_check(ok: bool) -> Self {
        if ok {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Digits-only input (price, area, bedrooms, bathrooms)
    Number(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration, value and validity
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub validity: Validity,
    pub is_multiline: bool,
    pub is_secret: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            validity: Validity::Unknown,
            is_multiline,
            is_secret: false,
        }
    }

    /// Create a new secret (masked) text field
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label, false)
        }
    }

    /// Create a new numeric field
    pub fn number(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Number(String::new()),
            validity: Validity::Unknown,
            is_multiline: false,
            is_secret: false,
        }
    }

    /// Get the raw text of the field (numeric fields return their digits)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Number(s) => s,
        }
    }

    /// Parse the numeric value, 0 when empty or not a number field
    pub fn as_number(&self) -> i64 {
        match &self.value {
            FieldValue::Number(s) => s.parse().unwrap_or(0),
            FieldValue::Text(_) => 0,
        }
    }

    /// Replace the field value, keeping the value kind. Numeric fields
    /// keep only the digits, same as character input.
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) => *s = value,
            FieldValue::Number(s) => {
                *s = value.chars().filter(char::is_ascii_digit).collect();
            }
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Number(s) => {
                if c.is_ascii_digit() {
                    s.push(c);
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Number(s) => {
                s.pop();
            }
        }
    }

    /// Clear the field value and reset its validity
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Number(s) => s.clear(),
        }
        self.validity = Validity::Unknown;
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().is_empty()
    }

    /// Get the display value for rendering (secrets are masked)
    pub fn display_value(&self) -> String {
        let text = self.as_text();
        if self.is_secret {
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_default_is_unknown() {
        assert_eq!(Validity::default(), Validity::Unknown);
    }

    #[test]
    fn test_validity_is_valid() {
        assert!(Validity::Valid.is_valid());
        assert!(!Validity::Unknown.is_valid());
        assert!(!Validity::Invalid.is_valid());
    }

    #[test]
    fn test_validity_from_check() {
        assert_eq!(Validity::from_check(true), Validity::Valid);
        assert_eq!(Validity::from_check(false), Validity::Invalid);
    }

    #[test]
    fn test_text_field_push_pop() {
        let mut field = FormField::text("city", "City", false);
        field.push_char('S');
        field.push_char('o');
        assert_eq!(field.as_text(), "So");
        field.pop_char();
        assert_eq!(field.as_text(), "S");
    }

    #[test]
    fn test_number_field_rejects_non_digits() {
        let mut field = FormField::number("price", "Price");
        field.push_char('1');
        field.push_char('a');
        field.push_char('2');
        assert_eq!(field.as_text(), "12");
        assert_eq!(field.as_number(), 12);
    }

    #[test]
    fn test_number_field_set_text_drops_non_digits() {
        let mut field = FormField::number("price", "Price");
        field.set_text("12a3".into());
        assert_eq!(field.as_text(), "123");
        assert_eq!(field.as_number(), 123);

        field.set_text("abc".into());
        assert_eq!(field.as_number(), 0);
    }

    #[test]
    fn test_number_field_empty_parses_to_zero() {
        let field = FormField::number("area", "Area");
        assert_eq!(field.as_number(), 0);
    }

    #[test]
    fn test_secret_field_masks_display() {
        let mut field = FormField::secret("password", "Password");
        field.push_char('a');
        field.push_char('b');
        field.push_char('c');
        assert_eq!(field.display_value(), "•••");
        assert_eq!(field.as_text(), "abc");
    }

    #[test]
    fn test_clear_resets_validity() {
        let mut field = FormField::text("email", "Email", false);
        field.push_char('x');
        field.validity = Validity::Invalid;
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.validity, Validity::Unknown);
    }
}
