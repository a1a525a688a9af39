//! Pure field validation for the form variants
//!
//! Each validator maps a form snapshot to a field-name -> message map.
//! Validation never fails and never mutates the form; an empty map means
//! the snapshot is ready to submit.

use super::form_state::{ContactForm, NewsletterForm, ServiceInquiryForm};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// local-part@domain.tld, 2+ letter TLD, case-insensitive
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern is valid")
});

/// Minimum digits a phone number must contain after stripping formatting
const MIN_PHONE_DIGITS: usize = 10;
/// Service-inquiry message cap
const MAX_INQUIRY_MESSAGE_CHARS: usize = 500;
/// Contact message floor
const MIN_CONTACT_MESSAGE_CHARS: usize = 10;

/// Per-field error messages from a validation pass.
/// Absence of a key means that field is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(HashMap<&'static str, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn phone_digit_count(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}

/// Validate the general contact form
pub fn validate_contact(form: &ContactForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.name.as_text().trim().chars().count() < 2 {
        errors.insert("name", "Name must be at least 2 characters long.");
    }

    if !valid_email(form.email.as_text()) {
        errors.insert("email", "Invalid email address.");
    }

    if phone_digit_count(form.phone.as_text()) < MIN_PHONE_DIGITS {
        errors.insert("phone", "Valid phone number required.");
    }

    let message = form.message.as_text();
    if message.trim().is_empty() {
        errors.insert("message", "Message is required.");
    } else if message.chars().count() < MIN_CONTACT_MESSAGE_CHARS {
        errors.insert("message", "Message must be at least 10 characters.");
    }

    errors
}

/// Validate the service-inquiry form
pub fn validate_inquiry(form: &ServiceInquiryForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.name.as_text().trim().chars().count() < 2 {
        errors.insert("name", "Name must be at least 2 characters long.");
    }

    if !valid_email(form.email.as_text()) {
        errors.insert("email", "Invalid email address.");
    }

    if form.service.as_text().is_empty() {
        errors.insert("service", "Please select a service.");
    }

    if phone_digit_count(form.number.as_text()) < MIN_PHONE_DIGITS {
        errors.insert("number", "Valid phone number required.");
    }

    if form.message.as_text().chars().count() > MAX_INQUIRY_MESSAGE_CHARS {
        errors.insert("message", "Message cannot exceed 500 characters.");
    }

    if form.budget.as_text().is_empty() {
        errors.insert("budget", "Please select a budget.");
    }

    errors
}

/// Validate the newsletter signup form
pub fn validate_newsletter(form: &NewsletterForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if !valid_email(form.email.as_text()) {
        errors.insert("email", "Invalid email address.");
    }

    errors
}
