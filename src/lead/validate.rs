//! Field-level validation for lead submissions. `validate` is a pure
//! function: every field is checked independently so the form can show all
//! offending fields at once, and a draft either normalizes completely or is
//! rejected with per-field errors.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::catalog;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    Email,
    CountryCode,
    PhoneNumber,
    City,
    JobTitle,
    BusinessName,
    Timeline,
    SelectedGuide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    TooShort,
    TooLong,
    InvalidFormat,
}

/// Inline message shown next to the offending control.
pub fn message(field: Field, error: ValidationError) -> &'static str {
    use Field::*;
    use ValidationError::*;
    match (field, error) {
        (FirstName, TooShort) => "First name must be at least 2 characters",
        (FirstName, TooLong) => "First name must be less than 50 characters",
        (Email, InvalidFormat) => "Please enter a valid email address",
        (Email, TooLong) => "Email must be less than 255 characters",
        (CountryCode, _) => "Please select a country code",
        (PhoneNumber, TooShort) => "Phone number must be at least 8 digits",
        (PhoneNumber, TooLong) => "Phone number must be less than 15 digits",
        (City, _) => "Please select a city",
        (JobTitle, _) => "Please select a job title",
        (BusinessName, TooShort) => "Business name must be at least 2 characters",
        (BusinessName, TooLong) => "Business name must be less than 100 characters",
        (Timeline, _) => "Please select a timeline",
        (SelectedGuide, _) => "Please select a guide",
        _ => "Please check this field",
    }
}

/// At most one error per field; insertion order follows the form layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(Vec<(Field, ValidationError)>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0
            .iter()
            .find(|(entry, _)| *entry == field)
            .map(|(_, error)| *error)
    }

    pub fn clear(&mut self, field: Field) {
        self.0.retain(|(entry, _)| *entry != field);
    }

    fn push(&mut self, field: Field, error: ValidationError) {
        self.clear(field);
        self.0.push((field, error));
    }
}

/// Raw form state as the user typed it. Country code starts on the first
/// catalog entry; everything else starts empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadFields {
    pub first_name: String,
    pub email: String,
    pub country_code: String,
    pub phone_number: String,
    pub city: String,
    pub job_title: String,
    pub business_name: String,
    pub timeline: String,
    pub selected_guide: String,
}

impl Default for LeadFields {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            email: String::new(),
            country_code: catalog::DIAL_CODES[0].code.to_string(),
            phone_number: String::new(),
            city: String::new(),
            job_title: String::new(),
            business_name: String::new(),
            timeline: String::new(),
            selected_guide: String::new(),
        }
    }
}

impl LeadFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::Email => self.email = value,
            Field::CountryCode => self.country_code = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::City => self.city = value,
            Field::JobTitle => self.job_title = value,
            Field::BusinessName => self.business_name = value,
            Field::Timeline => self.timeline = value,
            Field::SelectedGuide => self.selected_guide = value,
        }
    }
}

/// A fully validated, normalized submission ready to forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub first_name: String,
    pub email: String,
    pub country_code: String,
    pub phone_number: String,
    pub city: String,
    pub job_title: String,
    pub business_name: String,
    pub timeline: String,
    pub selected_guide: String,
}

pub fn validate(fields: &LeadFields) -> Result<LeadSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();

    let first_name = fields.first_name.trim();
    match first_name.chars().count() {
        n if n < 2 => errors.push(Field::FirstName, ValidationError::TooShort),
        n if n > 50 => errors.push(Field::FirstName, ValidationError::TooLong),
        _ => {}
    }

    let email = fields.email.trim();
    if !EMAIL_RE.is_match(email) {
        errors.push(Field::Email, ValidationError::InvalidFormat);
    } else if email.chars().count() > 255 {
        errors.push(Field::Email, ValidationError::TooLong);
    }

    let country_code = fields.country_code.trim();
    if !catalog::is_dial_code(country_code) {
        errors.push(Field::CountryCode, ValidationError::Required);
    }

    let phone_number = fields.phone_number.trim();
    match phone_number.chars().count() {
        n if n < 8 => errors.push(Field::PhoneNumber, ValidationError::TooShort),
        n if n > 15 => errors.push(Field::PhoneNumber, ValidationError::TooLong),
        _ => {}
    }

    let city = fields.city.trim();
    if !catalog::is_city(city) {
        errors.push(Field::City, ValidationError::Required);
    }

    let job_title = fields.job_title.trim();
    if !catalog::is_job_title(job_title) {
        errors.push(Field::JobTitle, ValidationError::Required);
    }

    let business_name = fields.business_name.trim();
    match business_name.chars().count() {
        n if n < 2 => errors.push(Field::BusinessName, ValidationError::TooShort),
        n if n > 100 => errors.push(Field::BusinessName, ValidationError::TooLong),
        _ => {}
    }

    let timeline = fields.timeline.trim();
    if !catalog::is_timeline(timeline) {
        errors.push(Field::Timeline, ValidationError::Required);
    }

    let selected_guide = fields.selected_guide.trim();
    if catalog::guide(selected_guide).is_none() {
        errors.push(Field::SelectedGuide, ValidationError::Required);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(LeadSubmission {
        first_name: first_name.to_string(),
        email: email.to_string(),
        country_code: country_code.to_string(),
        phone_number: phone_number.to_string(),
        city: city.to_string(),
        job_title: job_title.to_string(),
        business_name: business_name.to_string(),
        timeline: timeline.to_string(),
        selected_guide: selected_guide.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn valid_fields() -> LeadFields {
        LeadFields {
            first_name: "Fahad".to_string(),
            email: "fahad@example.com".to_string(),
            country_code: "+966".to_string(),
            phone_number: "501234567".to_string(),
            city: "Riyadh".to_string(),
            job_title: "Kitchen Manager".to_string(),
            business_name: "Al Noor Catering".to_string(),
            timeline: "1–3 months".to_string(),
            selected_guide: "coffee".to_string(),
        }
    }

    #[test]
    fn test_valid_fields_normalize() {
        let mut fields = valid_fields();
        fields.first_name = "  Fahad ".to_string();
        let lead = validate(&fields).expect("valid submission");
        assert_eq!(lead.first_name, "Fahad");
        assert_eq!(lead.selected_guide, "coffee");
    }

    #[test]
    fn test_validation_is_deterministic() {
        let mut fields = valid_fields();
        fields.email = "fahad@".to_string();
        fields.city = String::new();
        let first = validate(&fields).unwrap_err();
        let second = validate(&fields).unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn test_each_missing_field_is_attributed() {
        let cases = [
            Field::FirstName,
            Field::Email,
            Field::CountryCode,
            Field::PhoneNumber,
            Field::City,
            Field::JobTitle,
            Field::BusinessName,
            Field::Timeline,
            Field::SelectedGuide,
        ];
        for field in cases {
            let mut fields = valid_fields();
            fields.set(field, String::new());
            let errors = validate(&fields).unwrap_err();
            assert_eq!(errors.len(), 1, "blanking {field:?} should fail that field alone");
            assert!(errors.get(field).is_some());
        }
    }

    #[test]
    fn test_first_name_boundaries() {
        let mut fields = valid_fields();
        fields.first_name = "F".to_string();
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.get(Field::FirstName), Some(ValidationError::TooShort));

        fields.first_name = "Fa".to_string();
        assert!(validate(&fields).is_ok());

        fields.first_name = "x".repeat(51);
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.get(Field::FirstName), Some(ValidationError::TooLong));
    }

    #[test]
    fn test_business_name_boundaries() {
        let mut fields = valid_fields();
        fields.business_name = "x".repeat(100);
        assert!(validate(&fields).is_ok());

        fields.business_name = "x".repeat(101);
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.get(Field::BusinessName), Some(ValidationError::TooLong));
    }

    #[test]
    fn test_email_format() {
        let mut fields = valid_fields();
        fields.email = "user@example.com".to_string();
        assert!(validate(&fields).is_ok());

        fields.email = "user@".to_string();
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(ValidationError::InvalidFormat));

        fields.email = format!("{}@example.com", "a".repeat(250));
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(ValidationError::TooLong));
    }

    #[test]
    fn test_phone_number_boundaries() {
        let mut fields = valid_fields();
        for (digits, expected) in [
            (7usize, Some(ValidationError::TooShort)),
            (8, None),
            (15, None),
            (16, Some(ValidationError::TooLong)),
        ] {
            fields.phone_number = "5".repeat(digits);
            match expected {
                None => assert!(validate(&fields).is_ok(), "{digits} digits should pass"),
                Some(error) => {
                    let errors = validate(&fields).unwrap_err();
                    assert_eq!(errors.get(Field::PhoneNumber), Some(error));
                }
            }
        }
    }

    #[test]
    fn test_enumerated_fields_reject_unknown_values() {
        let mut fields = valid_fields();
        fields.country_code = "+1".to_string();
        fields.city = "Atlantis".to_string();
        fields.selected_guide = "submarines".to_string();
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::CountryCode), Some(ValidationError::Required));
        assert_eq!(errors.get(Field::City), Some(ValidationError::Required));
        assert_eq!(errors.get(Field::SelectedGuide), Some(ValidationError::Required));
    }

    #[test]
    fn test_errors_do_not_short_circuit_across_fields() {
        let errors = validate(&LeadFields::default()).unwrap_err();
        // Country code defaults to a valid entry, every other field is empty.
        assert_eq!(errors.len(), 8);
        assert!(errors.get(Field::CountryCode).is_none());
    }

    #[test]
    fn test_messages_match_form_copy() {
        assert_eq!(
            message(Field::FirstName, ValidationError::TooShort),
            "First name must be at least 2 characters"
        );
        assert_eq!(message(Field::City, ValidationError::Required), "Please select a city");
    }
}
