use crate::core::registration::{Field, FormData};
use crate::input::validators::{self, Validator};
use indexmap::IndexMap;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "Please enter your name";
pub const EMAIL_REQUIRED: &str = "Please enter your email";
pub const EMAIL_MALFORMED: &str = "Email format is incorrect";
pub const COURSE_REQUIRED: &str = "Please select a course";

/// Per-field advisory messages. Iterates in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: IndexMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
        self.errors.sort_keys();
    }

    /// Returns true when an error was present.
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.errors.shift_remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn first_field(&self) -> Option<Field> {
        self.errors.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

pub struct FormValidator {
    rules: Vec<(Field, Vec<Validator>)>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rule(mut self, field: Field, validators: Vec<Validator>) -> Self {
        self.rules.push((field, validators));
        self
    }

    pub fn registration() -> Self {
        Self::new()
            .rule(Field::Name, vec![validators::required(NAME_REQUIRED)])
            .rule(
                Field::Email,
                vec![
                    validators::required(EMAIL_REQUIRED),
                    validators::email_shape(EMAIL_MALFORMED),
                ],
            )
            .rule(Field::Course, vec![validators::required(COURSE_REQUIRED)])
    }

    /// Checks every field; one failing field never hides another.
    pub fn validate(&self, form: &FormData) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, validators) in &self.rules {
            if let Err(message) = validators::run_all(validators, form.get(*field)) {
                errors.insert(*field, message);
            }
        }
        errors
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::registration()
    }
}

static REGISTRATION_RULES: LazyLock<FormValidator> = LazyLock::new(FormValidator::registration);

pub fn validate(form: &FormData) -> ValidationErrors {
    REGISTRATION_RULES.validate(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, course: &str) -> FormData {
        FormData {
            name: name.to_string(),
            email: email.to_string(),
            course: course.to_string(),
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        let errors = validate(&form("Ana Lee", "ana@example.com", "Computer Science"));
        assert!(errors.is_empty());
    }

    #[test]
    fn every_blank_field_is_reported() {
        let errors = validate(&form("  ", "", "\t"));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::Course), Some(COURSE_REQUIRED));
    }

    #[test]
    fn blank_email_gets_required_message_not_format() {
        let errors = validate(&form("Ana", "   ", "Civil Engineering"));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_email_flagged_regardless_of_other_fields() {
        for (name, course) in [("Ana", "Computer Science"), ("", ""), (" ", "Civil Engineering")] {
            for email in ["ana", "ana@example", "ana.example.com", "ana@ example.com"] {
                let errors = validate(&form(name, email, course));
                assert_eq!(errors.get(Field::Email), Some(EMAIL_MALFORMED), "email {email:?}");
            }
        }
    }

    #[test]
    fn errors_iterate_in_field_order() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Course, "c");
        errors.insert(Field::Name, "n");
        let order: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(order, vec![Field::Name, Field::Course]);
        assert_eq!(errors.first_field(), Some(Field::Name));
    }

    #[test]
    fn clear_field_only_touches_that_field() {
        let mut errors = validate(&form("", "", ""));
        assert!(errors.clear_field(Field::Email));
        assert!(!errors.clear_field(Field::Email));
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Course));
    }

    #[test]
    fn custom_rule_set() {
        let validator = FormValidator::new().rule(
            Field::Name,
            vec![validators::custom(|v| v.len() >= 3, "too short")],
        );
        let errors = validator.validate(&form("Al", "", ""));
        assert_eq!(errors.get(Field::Name), Some("too short"));
        assert_eq!(errors.len(), 1);
    }
}
