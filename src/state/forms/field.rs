//! Form field value objects and field-level validation rules

/// A declarative constraint on a single field value.
///
/// Rules are pure and synchronous; evaluating one never touches I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Value must be non-empty after trimming whitespace
    NonBlank,
    /// Value must consist entirely of ASCII digits
    DigitsOnly,
}

/// A failed rule evaluation, carrying the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation(pub &'static str);

impl FieldRule {
    /// Evaluate this rule against a value
    pub fn evaluate(&self, value: &str) -> Result<(), Violation> {
        match self {
            FieldRule::NonBlank => {
                if value.trim().is_empty() {
                    Err(Violation("must not be blank"))
                } else {
                    Ok(())
                }
            }
            FieldRule::DigitsOnly => {
                if value.chars().all(|c| c.is_ascii_digit()) {
                    Ok(())
                } else {
                    Err(Violation("must contain only digits"))
                }
            }
        }
    }

    /// Convenience predicate form of [`FieldRule::evaluate`]
    pub fn passes(&self, value: &str) -> bool {
        self.evaluate(value).is_ok()
    }
}

/// Type-safe field values
///
/// `Digits` fields filter at the input boundary: an edit that would
/// introduce a non-digit character never reaches the stored value.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Digits(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new digits-only field (e.g. years of experience)
    pub fn digits(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Digits(String::new()),
            is_multiline: false,
        }
    }

    /// Get the stored value as text
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Digits(s) => s,
        }
    }

    /// Replace the stored value.
    ///
    /// For digits fields the proposed value is checked against
    /// [`FieldRule::DigitsOnly`]; a failing value is rejected outright and
    /// the old value kept.
    #[allow(dead_code)]
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) => *s = value,
            FieldValue::Digits(s) => {
                if FieldRule::DigitsOnly.passes(&value) {
                    *s = value;
                }
            }
        }
    }

    /// Push a character to the field value.
    ///
    /// Non-digit characters are dropped for digits fields.
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Digits(s) => {
                if c.is_ascii_digit() {
                    s.push(c);
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Digits(s) => {
                s.pop();
            }
        }
    }

    /// Clear the field value
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Digits(s) => s.clear(),
        }
    }

    /// Whether the field is blank after trimming
    #[allow(dead_code)]
    pub fn is_blank(&self) -> bool {
        self.as_text().trim().is_empty()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.as_text().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_rule {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_non_blank_rejects_empty() {
            assert!(FieldRule::NonBlank.evaluate("").is_err());
        }

        #[test]
        fn test_non_blank_rejects_whitespace_only() {
            assert!(FieldRule::NonBlank.evaluate("   \t ").is_err());
        }

        #[test]
        fn test_non_blank_accepts_padded_value() {
            assert!(FieldRule::NonBlank.evaluate("  Happy Paws  ").is_ok());
        }

        #[test]
        fn test_digits_only_accepts_digits() {
            assert!(FieldRule::DigitsOnly.evaluate("12345").is_ok());
        }

        #[test]
        fn test_digits_only_accepts_empty() {
            // Blankness is the aggregator's concern, not the character filter's
            assert!(FieldRule::DigitsOnly.evaluate("").is_ok());
        }

        #[test]
        fn test_digits_only_rejects_letters() {
            assert!(FieldRule::DigitsOnly.evaluate("12a").is_err());
        }

        #[test]
        fn test_digits_only_rejects_spaces() {
            assert!(FieldRule::DigitsOnly.evaluate("1 2").is_err());
        }

        #[test]
        fn test_violation_carries_reason() {
            let err = FieldRule::NonBlank.evaluate(" ").unwrap_err();
            assert_eq!(err, Violation("must not be blank"));
        }
    }

    mod form_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_text_field_starts_empty() {
            let field = FormField::text("degree", "Degree", false);
            assert_eq!(field.as_text(), "");
            assert!(field.is_blank());
        }

        #[test]
        fn test_text_field_accepts_any_char() {
            let mut field = FormField::text("degree", "Degree", false);
            field.push_char('D');
            field.push_char('V');
            field.push_char('M');
            assert_eq!(field.as_text(), "DVM");
        }

        #[test]
        fn test_digits_field_accepts_digits() {
            let mut field = FormField::digits("experience", "Experience (years)");
            field.push_char('1');
            field.push_char('0');
            assert_eq!(field.as_text(), "10");
        }

        #[test]
        fn test_digits_field_drops_non_digit_chars() {
            let mut field = FormField::digits("experience", "Experience (years)");
            field.push_char('3');
            field.push_char('x');
            field.push_char('-');
            field.push_char(' ');
            assert_eq!(field.as_text(), "3");
        }

        #[test]
        fn test_digits_field_rejects_invalid_set_text() {
            let mut field = FormField::digits("experience", "Experience (years)");
            field.set_text("5".to_string());
            field.set_text("5a".to_string());
            assert_eq!(field.as_text(), "5");
        }

        #[test]
        fn test_digits_field_accepts_valid_set_text() {
            let mut field = FormField::digits("experience", "Experience (years)");
            field.set_text("42".to_string());
            assert_eq!(field.as_text(), "42");
        }

        #[test]
        fn test_pop_char_removes_last() {
            let mut field = FormField::text("year", "Year", false);
            field.set_text("2021".to_string());
            field.pop_char();
            assert_eq!(field.as_text(), "202");
        }

        #[test]
        fn test_pop_char_on_empty_is_noop() {
            let mut field = FormField::text("year", "Year", false);
            field.pop_char();
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_clear_empties_value() {
            let mut field = FormField::digits("experience", "Experience (years)");
            field.set_text("7".to_string());
            field.clear();
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_is_blank_on_whitespace() {
            let mut field = FormField::text("name", "Name", false);
            field.set_text("   ".to_string());
            assert!(field.is_blank());
        }
    }
}
