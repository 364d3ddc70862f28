//! Form submission payloads and their validation rules.
//!
//! Length windows apply to trimmed values, and every violated rule is
//! collected so the client sees the full list in one response.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{AppError, FieldError};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Optional leading '+', non-zero first digit, at most 16 digits total.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").unwrap());

pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdpRegistration {
    pub college_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub expected_participants: String,
    pub preferred_dates: String,
    #[serde(default)]
    pub specific_requirements: Option<String>,
}

impl FdpRegistration {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.college_name);
        trim_in_place(&mut self.contact_person);
        trim_in_place(&mut self.email);
        trim_in_place(&mut self.phone);
        trim_in_place(&mut self.location);
        trim_in_place(&mut self.expected_participants);
        trim_in_place(&mut self.preferred_dates);
        trim_optional(&mut self.specific_requirements);
    }
}

impl Validate for FdpRegistration {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        check_length(
            &mut errors,
            "collegeName",
            &self.college_name,
            2,
            200,
            "College name must be between 2 and 200 characters",
        );
        check_length(
            &mut errors,
            "contactPerson",
            &self.contact_person,
            2,
            100,
            "Contact person name must be between 2 and 100 characters",
        );
        check_email(&mut errors, "email", &self.email);
        check_phone(&mut errors, "phone", &self.phone);
        check_length(
            &mut errors,
            "location",
            &self.location,
            2,
            100,
            "Location must be between 2 and 100 characters",
        );
        check_length(
            &mut errors,
            "expectedParticipants",
            &self.expected_participants,
            1,
            10,
            "Expected participants is required",
        );
        check_length(
            &mut errors,
            "preferredDates",
            &self.preferred_dates,
            5,
            200,
            "Preferred dates must be between 5 and 200 characters",
        );
        if let Some(requirements) = &self.specific_requirements {
            check_length(
                &mut errors,
                "specificRequirements",
                requirements,
                0,
                1000,
                "Specific requirements cannot exceed 1000 characters",
            );
        }

        finish(errors)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialSubmission {
    pub name: String,
    pub role: String,
    pub company: String,
    pub course: String,
    pub rating: i64,
    pub testimonial: String,
}

impl TestimonialSubmission {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.role);
        trim_in_place(&mut self.company);
        trim_in_place(&mut self.course);
        trim_in_place(&mut self.testimonial);
    }
}

impl Validate for TestimonialSubmission {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        check_length(
            &mut errors,
            "name",
            &self.name,
            2,
            100,
            "Name must be between 2 and 100 characters",
        );
        check_length(
            &mut errors,
            "role",
            &self.role,
            2,
            100,
            "Role must be between 2 and 100 characters",
        );
        check_length(
            &mut errors,
            "company",
            &self.company,
            2,
            100,
            "Company must be between 2 and 100 characters",
        );
        check_length(
            &mut errors,
            "course",
            &self.course,
            2,
            100,
            "Course must be between 2 and 100 characters",
        );
        if !(1..=5).contains(&self.rating) {
            errors.push(FieldError {
                field: "rating",
                message: "Rating must be between 1 and 5",
            });
        }
        check_length(
            &mut errors,
            "testimonial",
            &self.testimonial,
            10,
            1000,
            "Testimonial must be between 10 and 1000 characters",
        );

        finish(errors)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Trims all fields; an empty phone counts as absent.
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.first_name);
        trim_in_place(&mut self.last_name);
        trim_in_place(&mut self.email);
        trim_optional(&mut self.phone);
        trim_in_place(&mut self.subject);
        trim_in_place(&mut self.message);
    }
}

impl Validate for ContactMessage {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        check_length(
            &mut errors,
            "firstName",
            &self.first_name,
            1,
            50,
            "First name must be between 1 and 50 characters",
        );
        check_length(
            &mut errors,
            "lastName",
            &self.last_name,
            1,
            50,
            "Last name must be between 1 and 50 characters",
        );
        check_email(&mut errors, "email", &self.email);
        if let Some(phone) = &self.phone {
            check_phone(&mut errors, "phone", phone);
        }
        check_length(
            &mut errors,
            "subject",
            &self.subject,
            2,
            100,
            "Subject must be between 2 and 100 characters",
        );
        check_length(
            &mut errors,
            "message",
            &self.message,
            10,
            2000,
            "Message must be between 10 and 2000 characters",
        );

        finish(errors)
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

fn trim_optional(value: &mut Option<String>) {
    if let Some(inner) = value {
        trim_in_place(inner);
        if inner.is_empty() {
            *value = None;
        }
    }
}

fn check_length(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
    message: &'static str,
) {
    let len = value.trim().chars().count();
    if len < min || len > max {
        errors.push(FieldError { field, message });
    }
}

fn check_email(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if !EMAIL_RE.is_match(value.trim()) {
        errors.push(FieldError {
            field,
            message: "Please provide a valid email address",
        });
    }
}

fn check_phone(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if !PHONE_RE.is_match(value.trim()) {
        errors.push(FieldError {
            field,
            message: "Please provide a valid phone number",
        });
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contact() -> ContactMessage {
        ContactMessage {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            subject: "Course enquiry".to_string(),
            message: "I would like to know more about the LLM course.".to_string(),
        }
    }

    fn valid_testimonial() -> TestimonialSubmission {
        TestimonialSubmission {
            name: "Sarah Johnson".to_string(),
            role: "Software Engineer".to_string(),
            company: "Tech Solutions Inc.".to_string(),
            course: "Generative AI Fundamentals".to_string(),
            rating: 5,
            testimonial: "This course completely transformed my understanding.".to_string(),
        }
    }

    fn valid_fdp() -> FdpRegistration {
        FdpRegistration {
            college_name: "Sri Sai College of Pharmacy".to_string(),
            contact_person: "Dr. Priya Sharma".to_string(),
            email: "priya@college.edu".to_string(),
            phone: "+919876543210".to_string(),
            location: "Pathankot, Punjab".to_string(),
            expected_participants: "45".to_string(),
            preferred_dates: "Last week of October".to_string(),
            specific_requirements: None,
        }
    }

    fn field_errors(result: Result<(), AppError>) -> Vec<FieldError> {
        match result {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn valid_forms_pass() {
        assert!(valid_contact().validate().is_ok());
        assert!(valid_testimonial().validate().is_ok());
        assert!(valid_fdp().validate().is_ok());
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let mut form = valid_contact();
        form.email = "ada.example.com".to_string();
        let errors = field_errors(form.validate());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Please provide a valid email address");
    }

    #[test]
    fn all_violations_are_collected() {
        let mut form = valid_contact();
        form.first_name = String::new();
        form.email = "nope".to_string();
        form.message = "short".to_string();
        let errors = field_errors(form.validate());
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["firstName", "email", "message"]);
    }

    #[test]
    fn contact_phone_is_optional_but_checked_when_present() {
        let mut form = valid_contact();
        form.phone = Some("abc".to_string());
        let errors = field_errors(form.validate());
        assert_eq!(errors[0].field, "phone");

        let mut form = valid_contact();
        form.phone = Some("  ".to_string());
        form.normalize();
        assert_eq!(form.phone, None);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn phone_pattern_rejects_leading_zero() {
        let mut form = valid_fdp();
        form.phone = "0123456789".to_string();
        let errors = field_errors(form.validate());
        assert_eq!(errors[0].field, "phone");

        let mut form = valid_fdp();
        form.phone = "+442071234567".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn rating_bounds_are_enforced() {
        for rating in [0, 6, -1] {
            let mut form = valid_testimonial();
            form.rating = rating;
            let errors = field_errors(form.validate());
            assert_eq!(errors[0].message, "Rating must be between 1 and 5");
        }
    }

    #[test]
    fn lengths_are_checked_on_trimmed_values() {
        let mut form = valid_testimonial();
        form.testimonial = format!("   {}   ", "x".repeat(9));
        let errors = field_errors(form.validate());
        assert_eq!(errors[0].field, "testimonial");
    }

    #[test]
    fn long_requirements_are_rejected() {
        let mut form = valid_fdp();
        form.specific_requirements = Some("x".repeat(1001));
        let errors = field_errors(form.validate());
        assert_eq!(
            errors[0].message,
            "Specific requirements cannot exceed 1000 characters"
        );
    }
}
