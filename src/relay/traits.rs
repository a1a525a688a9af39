//! Trait abstraction for the form relay to enable mocking in tests

use super::RelayError;
use crate::state::{ContactSubmission, InquirySubmission};
use async_trait::async_trait;

/// Trait for relay operations, enabling mocking in tests
///
/// One call is one POST; the relay never retries and reports only
/// accepted / rejected / transport failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormRelay: Send + Sync {
    /// Send a general contact submission (JSON-encoded)
    async fn submit_contact(&self, submission: ContactSubmission) -> Result<(), RelayError>;

    /// Send a service-inquiry submission (multipart-encoded)
    async fn submit_inquiry(&self, submission: InquirySubmission) -> Result<(), RelayError>;

    /// Subscribe an address to the newsletter (JSON-encoded)
    async fn subscribe(&self, email: String) -> Result<(), RelayError>;
}
