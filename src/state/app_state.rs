//! Top-level application state

use crate::state::{ContactForm, NewsletterForm, ServiceInquiryForm};

/// Which form the user is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Contact,
    ServiceInquiry,
    Newsletter,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Contact => "Contact",
            View::ServiceInquiry => "Service Inquiry",
            View::Newsletter => "Newsletter",
        }
    }

    pub const ALL: [View; 3] = [View::Contact, View::ServiceInquiry, View::Newsletter];
}

/// Application state: one instance of each form, alive for the whole session
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub contact: ContactForm,
    pub inquiry: ServiceInquiryForm,
    pub newsletter: NewsletterForm,
}
