//! Form state management and form structs

use super::field::FormField;
use super::validate::ValidationErrors;
use crate::state::SubmissionOutcome;

/// Offerings shown in the service-inquiry dropdown
pub const SERVICE_OPTIONS: &[&str] = &[
    "Custom Software Development",
    "Web Applications",
    "Mobile Solutions",
    "UX, Product and Design",
    "Backend Development Services",
    "Frontend Development Services",
    "QA and Software Testing",
    "DevOps",
];

/// Buttons on the form action row (index into the row)
pub const BUTTON_CLEAR: usize = 0;
pub const BUTTON_SUBMIT: usize = 1;
pub const BUTTON_COUNT: usize = 2;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn errors_mut(&mut self) -> &mut ValidationErrors;

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

    /// True when the action row (last index) is active
    fn is_buttons_row_active(&self) -> bool {
        self.active_field() == self.field_count() - 1
    }

    /// Type a character into the active field and clear its stale error.
    /// Only the edited field's entry is dropped; other fields keep theirs
    /// until the next full validation pass.
    fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
            let name = field.name;
            self.errors_mut().remove(name);
        }
    }

    /// Delete the last character of the active field and clear its stale error
    fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
            let name = field.name;
            self.errors_mut().remove(name);
        }
    }

    /// Cycle the active select field forward and clear its stale error
    fn next_option(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.next_option();
            let name = field.name;
            self.errors_mut().remove(name);
        }
    }

    /// Cycle the active select field backward and clear its stale error
    fn prev_option(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.prev_option();
            let name = field.name;
            self.errors_mut().remove(name);
        }
    }
}

// General contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub message: FormField,
    pub errors: ValidationErrors,
    pub outcome: SubmissionOutcome,
    pub active_field_index: usize,
    /// Which button is selected when on the action row (0=Clear, 1=Submit)
    pub selected_button: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", false),
            email: FormField::text("email", "Email", false),
            phone: FormField::phone("phone", "Phone"),
            message: FormField::text("message", "Message", true),
            errors: ValidationErrors::default(),
            outcome: SubmissionOutcome::default(),
            active_field_index: 0,
            selected_button: BUTTON_SUBMIT,
        }
    }

    /// Reset every field to its initial empty value after a successful send
    pub fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
        self.errors = ValidationErrors::default();
    }

    pub fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            message: self.message.as_text().to_string(),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, phone, message, action row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.message),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.message),
            _ => None,
        }
    }
    fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }
}

// Service-inquiry form
#[derive(Debug, Clone)]
pub struct ServiceInquiryForm {
    pub name: FormField,
    pub email: FormField,
    /// The relay expects this variant's phone under the key `number`
    pub number: FormField,
    pub service: FormField,
    pub message: FormField,
    pub budget: FormField,
    pub errors: ValidationErrors,
    pub outcome: SubmissionOutcome,
    pub active_field_index: usize,
    pub selected_button: usize,
}

impl ServiceInquiryForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", false),
            email: FormField::text("email", "Email", false),
            number: FormField::phone("number", "Phone"),
            service: FormField::select("service", "Service", SERVICE_OPTIONS),
            message: FormField::text("message", "Details", true),
            budget: FormField::numeric("budget", "Budget"),
            errors: ValidationErrors::default(),
            outcome: SubmissionOutcome::default(),
            active_field_index: 0,
            selected_button: BUTTON_SUBMIT,
        }
    }

    /// Reset every field to its initial empty value after a successful send
    pub fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.number.clear();
        self.service.clear();
        self.message.clear();
        self.budget.clear();
        self.errors = ValidationErrors::default();
    }

    pub fn submission(&self) -> InquirySubmission {
        InquirySubmission {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            number: self.number.as_text().to_string(),
            service: self.service.as_text().to_string(),
            message: self.message.as_text().to_string(),
            budget: self.budget.as_text().to_string(),
        }
    }
}

impl Default for ServiceInquiryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ServiceInquiryForm {
    fn field_count(&self) -> usize {
        7 // name, email, number, service, message, budget, action row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(6);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.number),
            3 => Some(&mut self.service),
            4 => Some(&mut self.message),
            5 => Some(&mut self.budget),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.number),
            3 => Some(&self.service),
            4 => Some(&self.message),
            5 => Some(&self.budget),
            _ => None,
        }
    }
    fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }
}

// Newsletter signup form
#[derive(Debug, Clone)]
pub struct NewsletterForm {
    pub email: FormField,
    pub errors: ValidationErrors,
    pub outcome: SubmissionOutcome,
    pub active_field_index: usize,
    pub selected_button: usize,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email", false),
            errors: ValidationErrors::default(),
            outcome: SubmissionOutcome::default(),
            active_field_index: 0,
            selected_button: BUTTON_SUBMIT,
        }
    }

    pub fn reset_fields(&mut self) {
        self.email.clear();
        self.errors = ValidationErrors::default();
    }
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for NewsletterForm {
    fn field_count(&self) -> usize {
        2 // email, action row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.email),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            _ => None,
        }
    }
    fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }
}

/// Contact form data ready for dispatch (JSON payload)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Service-inquiry form data ready for dispatch (multipart payload)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquirySubmission {
    pub name: String,
    pub email: String,
    pub number: String,
    pub service: String,
    pub message: String,
    pub budget: String,
}
