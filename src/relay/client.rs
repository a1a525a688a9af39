//! HTTP client for the Web3Forms relay
//!
//! One POST per submission. The relay's response is a JSON object of which
//! only the boolean `success` field matters; everything else is ignored.

use super::traits::FormRelay;
use crate::config::RelayConfig;
use crate::state::{ContactSubmission, InquirySubmission};
use async_trait::async_trait;
use reqwest::multipart;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What can go wrong talking to the relay
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The relay processed the request and said no
    #[error("relay rejected the submission")]
    Rejected,
    /// The request never completed, or the response was not parseable
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Transport(err.to_string())
    }
}

/// Client for submitting forms to the Web3Forms relay
pub struct Web3FormsClient {
    http: reqwest::Client,
    endpoint: String,
    access_key: String,
}

impl Web3FormsClient {
    /// Create a new relay client from configuration.
    /// Environment variables trump the config file for both settings.
    pub fn new(config: &RelayConfig) -> Self {
        let endpoint = std::env::var("WEB3FORMS_ENDPOINT")
            .ok()
            .or_else(|| config.endpoint.clone())
            .unwrap_or_else(|| crate::config::DEFAULT_ENDPOINT.to_string());
        let access_key = std::env::var("WEB3FORMS_ACCESS_KEY")
            .ok()
            .or_else(|| config.access_key.clone())
            .unwrap_or_else(|| crate::config::DEFAULT_ACCESS_KEY.to_string());

        Self {
            http: reqwest::Client::new(),
            endpoint,
            access_key,
        }
    }

    async fn check_response(&self, response: reqwest::Response) -> Result<(), RelayError> {
        let body: RelayResponse = response.json().await?;
        if body.success {
            Ok(())
        } else {
            tracing::debug!("relay reported failure");
            Err(RelayError::Rejected)
        }
    }
}

#[async_trait]
impl FormRelay for Web3FormsClient {
    async fn submit_contact(&self, submission: ContactSubmission) -> Result<(), RelayError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting contact form");
        let payload = ContactPayload {
            access_key: &self.access_key,
            name: &submission.name,
            email: &submission.email,
            phone: &submission.phone,
            message: &submission.message,
        };
        let response = self.http.post(&self.endpoint).json(&payload).send().await?;
        self.check_response(response).await
    }

    async fn submit_inquiry(&self, submission: InquirySubmission) -> Result<(), RelayError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting service inquiry");
        let form = inquiry_parts(&self.access_key, &submission)
            .into_iter()
            .fold(multipart::Form::new(), |form, (key, value)| {
                form.text(key, value)
            });
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;
        self.check_response(response).await
    }

    async fn subscribe(&self, email: String) -> Result<(), RelayError> {
        tracing::debug!(endpoint = %self.endpoint, "subscribing to newsletter");
        let payload = NewsletterPayload {
            access_key: &self.access_key,
            email: &email,
        };
        let response = self.http.post(&self.endpoint).json(&payload).send().await?;
        self.check_response(response).await
    }
}

/// Relay response; unknown fields are ignored
#[derive(Debug, Deserialize)]
struct RelayResponse {
    success: bool,
}

/// JSON wire shape of a contact submission
#[derive(Debug, Serialize)]
struct ContactPayload<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
}

/// JSON wire shape of a newsletter signup
#[derive(Debug, Serialize)]
struct NewsletterPayload<'a> {
    access_key: &'a str,
    email: &'a str,
}

/// Multipart parts for a service inquiry, in wire order
fn inquiry_parts(access_key: &str, s: &InquirySubmission) -> Vec<(&'static str, String)> {
    vec![
        ("access_key", access_key.to_string()),
        ("name", s.name.clone()),
        ("email", s.email.clone()),
        ("service", s.service.clone()),
        ("number", s.number.clone()),
        ("message", s.message.clone()),
        ("budget", s.budget.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_inquiry() -> InquirySubmission {
        InquirySubmission {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            number: "+1 403 555 0199".to_string(),
            service: "Web Applications".to_string(),
            message: "Hello".to_string(),
            budget: "5000".to_string(),
        }
    }

    #[test]
    fn test_inquiry_parts_carry_every_field_and_the_key() {
        let parts = inquiry_parts("test-key", &sample_inquiry());
        assert_eq!(
            parts,
            vec![
                ("access_key", "test-key".to_string()),
                ("name", "Jo".to_string()),
                ("email", "jo@example.com".to_string()),
                ("service", "Web Applications".to_string()),
                ("number", "+1 403 555 0199".to_string()),
                ("message", "Hello".to_string()),
                ("budget", "5000".to_string()),
            ]
        );
    }

    #[test]
    fn test_contact_payload_json_shape() {
        let payload = ContactPayload {
            access_key: "test-key",
            name: "Jo",
            email: "jo@example.com",
            phone: "+1 403 555 0199",
            message: "Hello there",
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "access_key": "test-key",
                "name": "Jo",
                "email": "jo@example.com",
                "phone": "+1 403 555 0199",
                "message": "Hello there",
            })
        );
    }

    #[test]
    fn test_newsletter_payload_json_shape() {
        let payload = NewsletterPayload {
            access_key: "test-key",
            email: "jo@example.com",
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "access_key": "test-key",
                "email": "jo@example.com",
            })
        );
    }

    #[test]
    fn test_relay_response_ignores_unknown_fields() {
        let parsed: RelayResponse =
            serde_json::from_str(r#"{"success": true, "message": "ok", "data": {}}"#).unwrap();
        assert!(parsed.success);

        let parsed: RelayResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!parsed.success);
    }

    #[test]
    fn test_relay_response_without_success_is_an_error() {
        // A body missing `success` entirely counts as malformed
        let parsed = serde_json::from_str::<RelayResponse>(r#"{"message": "ok"}"#);
        assert!(parsed.is_err());
    }
}
