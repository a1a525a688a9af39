//! Application state and core logic

use crate::relay::{FormRelay, RelayError};
use crate::state::{
    validate_contact, validate_inquiry, validate_newsletter, AppState, Form, SubmissionOutcome,
    ValidationErrors, View, BANNER_CLEAR_DELAY, BUTTON_CLEAR, BUTTON_COUNT, BUTTON_SUBMIT,
    NEWSLETTER_CLEAR_DELAY,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Which form a settled relay call belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Inquiry,
    Newsletter,
}

/// Message sent back from a spawned submission task
#[derive(Debug)]
pub struct RelayEvent {
    pub kind: FormKind,
    pub result: Result<(), RelayError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Relay client for form submission
    relay: Arc<dyn FormRelay>,
    /// Sender cloned into spawned submission tasks
    events_tx: mpsc::UnboundedSender<RelayEvent>,
    /// Settled submissions waiting to be applied on the next tick
    events_rx: mpsc::UnboundedReceiver<RelayEvent>,
    /// Handles of spawned submission tasks, aborted on drop
    in_flight: Vec<JoinHandle<()>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(relay: Arc<dyn FormRelay>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            relay,
            events_tx,
            events_rx,
            in_flight: Vec::new(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event, dispatching to the active form
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global bindings first
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::F(1) => {
                self.state.current_view = View::Contact;
                return;
            }
            KeyCode::F(2) => {
                self.state.current_view = View::ServiceInquiry;
                return;
            }
            KeyCode::F(3) => {
                self.state.current_view = View::Newsletter;
                return;
            }
            _ => {}
        }

        // Submit shortcut works from any field
        if key.code == KeyCode::Char('s') && key.modifiers.contains(crate::platform::SUBMIT_MODIFIER)
        {
            self.submit_current();
            return;
        }

        match self.state.current_view {
            View::Contact => self.handle_contact_key(key),
            View::ServiceInquiry => self.handle_inquiry_key(key),
            View::Newsletter => self.handle_newsletter_key(key),
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        let on_action_row = self.state.contact.is_buttons_row_active();
        match key.code {
            KeyCode::Tab => self.state.contact.next_field(),
            KeyCode::BackTab => self.state.contact.prev_field(),
            KeyCode::Left | KeyCode::Right if on_action_row => {
                self.state.contact.selected_button =
                    (self.state.contact.selected_button + 1) % BUTTON_COUNT;
            }
            KeyCode::Enter if on_action_row => match self.state.contact.selected_button {
                BUTTON_SUBMIT => self.submit_contact(),
                BUTTON_CLEAR => self.state.contact.reset_fields(),
                _ => {}
            },
            // Enter in the message field adds a newline; elsewhere it advances
            KeyCode::Enter => {
                if self.state.contact.active_field_index == 3 {
                    self.state.contact.input_char('\n');
                } else {
                    self.state.contact.next_field();
                }
            }
            KeyCode::Char(c) if !on_action_row && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.contact.input_char(c);
            }
            KeyCode::Backspace if !on_action_row => self.state.contact.backspace(),
            _ => {}
        }
    }

    fn handle_inquiry_key(&mut self, key: KeyEvent) {
        let on_action_row = self.state.inquiry.is_buttons_row_active();
        let on_select = self.state.inquiry.active_field_index == 3;
        match key.code {
            KeyCode::Tab => self.state.inquiry.next_field(),
            KeyCode::BackTab => self.state.inquiry.prev_field(),
            KeyCode::Left | KeyCode::Right if on_action_row => {
                self.state.inquiry.selected_button =
                    (self.state.inquiry.selected_button + 1) % BUTTON_COUNT;
            }
            KeyCode::Up | KeyCode::Left if on_select => self.state.inquiry.prev_option(),
            KeyCode::Down | KeyCode::Right if on_select => self.state.inquiry.next_option(),
            KeyCode::Enter if on_action_row => match self.state.inquiry.selected_button {
                BUTTON_SUBMIT => self.submit_inquiry(),
                BUTTON_CLEAR => self.state.inquiry.reset_fields(),
                _ => {}
            },
            KeyCode::Enter => {
                if self.state.inquiry.active_field_index == 4 {
                    self.state.inquiry.input_char('\n');
                } else {
                    self.state.inquiry.next_field();
                }
            }
            KeyCode::Char(c) if !on_action_row && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.inquiry.input_char(c);
            }
            KeyCode::Backspace if !on_action_row => self.state.inquiry.backspace(),
            _ => {}
        }
    }

    fn handle_newsletter_key(&mut self, key: KeyEvent) {
        let on_action_row = self.state.newsletter.is_buttons_row_active();
        match key.code {
            KeyCode::Tab => self.state.newsletter.next_field(),
            KeyCode::BackTab => self.state.newsletter.prev_field(),
            KeyCode::Left | KeyCode::Right if on_action_row => {
                self.state.newsletter.selected_button =
                    (self.state.newsletter.selected_button + 1) % BUTTON_COUNT;
            }
            KeyCode::Enter if on_action_row => match self.state.newsletter.selected_button {
                BUTTON_SUBMIT => self.submit_newsletter(),
                BUTTON_CLEAR => self.state.newsletter.reset_fields(),
                _ => {}
            },
            KeyCode::Enter => self.submit_newsletter(),
            KeyCode::Char(c) if !on_action_row && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.newsletter.input_char(c);
            }
            KeyCode::Backspace if !on_action_row => self.state.newsletter.backspace(),
            _ => {}
        }
    }

    /// Submit whichever form is on screen
    pub fn submit_current(&mut self) {
        match self.state.current_view {
            View::Contact => self.submit_contact(),
            View::ServiceInquiry => self.submit_inquiry(),
            View::Newsletter => self.submit_newsletter(),
        }
    }

    /// Validate and dispatch the contact form
    pub fn submit_contact(&mut self) {
        if self.state.contact.outcome.is_sending() {
            return;
        }
        let errors = validate_contact(&self.state.contact);
        if !errors.is_empty() {
            self.state.contact.errors = errors;
            return;
        }
        self.state.contact.errors = ValidationErrors::default();
        self.state.contact.outcome = SubmissionOutcome::Sending;

        let relay = Arc::clone(&self.relay);
        let tx = self.events_tx.clone();
        let submission = self.state.contact.submission();
        self.in_flight.push(tokio::spawn(async move {
            let result = relay.submit_contact(submission).await;
            // Receiver gone means the app is shutting down; drop the result
            let _ = tx.send(RelayEvent {
                kind: FormKind::Contact,
                result,
            });
        }));
    }

    /// Validate and dispatch the service-inquiry form
    pub fn submit_inquiry(&mut self) {
        if self.state.inquiry.outcome.is_sending() {
            return;
        }
        let errors = validate_inquiry(&self.state.inquiry);
        if !errors.is_empty() {
            self.state.inquiry.errors = errors;
            return;
        }
        self.state.inquiry.errors = ValidationErrors::default();
        self.state.inquiry.outcome = SubmissionOutcome::Sending;

        let relay = Arc::clone(&self.relay);
        let tx = self.events_tx.clone();
        let submission = self.state.inquiry.submission();
        self.in_flight.push(tokio::spawn(async move {
            let result = relay.submit_inquiry(submission).await;
            let _ = tx.send(RelayEvent {
                kind: FormKind::Inquiry,
                result,
            });
        }));
    }

    /// Validate and dispatch the newsletter signup
    pub fn submit_newsletter(&mut self) {
        if self.state.newsletter.outcome.is_sending() {
            return;
        }
        let errors = validate_newsletter(&self.state.newsletter);
        if !errors.is_empty() {
            self.state.newsletter.errors = errors;
            return;
        }
        self.state.newsletter.errors = ValidationErrors::default();
        self.state.newsletter.outcome = SubmissionOutcome::Sending;

        let relay = Arc::clone(&self.relay);
        let tx = self.events_tx.clone();
        let email = self.state.newsletter.email.as_text().to_string();
        self.in_flight.push(tokio::spawn(async move {
            let result = relay.subscribe(email).await;
            let _ = tx.send(RelayEvent {
                kind: FormKind::Newsletter,
                result,
            });
        }));
    }

    /// Apply settled submissions queued by spawned tasks
    pub fn drain_relay_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_relay_event(event, Instant::now());
        }
    }

    fn apply_relay_event(&mut self, event: RelayEvent, now: Instant) {
        let (success, message) = match &event.result {
            Ok(()) => (true, "Message sent successfully!"),
            Err(RelayError::Rejected) => (false, "Failed to send message. Please try again."),
            Err(RelayError::Transport(err)) => {
                tracing::warn!("relay transport failure: {err}");
                (false, "Network error. Please try again.")
            }
        };

        match event.kind {
            FormKind::Contact => {
                if success {
                    self.state.contact.reset_fields();
                }
                self.state
                    .contact
                    .outcome
                    .settle(success, message, now, BANNER_CLEAR_DELAY);
            }
            FormKind::Inquiry => {
                if success {
                    self.state.inquiry.reset_fields();
                }
                self.state
                    .inquiry
                    .outcome
                    .settle(success, message, now, BANNER_CLEAR_DELAY);
            }
            FormKind::Newsletter => {
                if success {
                    self.state.newsletter.reset_fields();
                }
                self.state
                    .newsletter
                    .outcome
                    .settle(success, message, now, NEWSLETTER_CLEAR_DELAY);
            }
        }
    }

    /// Advance time-driven state: banner clear deadlines, finished task handles
    pub fn tick(&mut self, now: Instant) {
        self.state.contact.outcome.tick(now);
        self.state.inquiry.outcome.tick(now);
        self.state.newsletter.outcome.tick(now);
        self.in_flight.retain(|handle| !handle.is_finished());
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // An in-flight request must not outlive the app
        for handle in &self.in_flight {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::MockFormRelay;
    use crate::state::FormField;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn set_text(field: &mut FormField, s: &str) {
        field.clear();
        for c in s.chars() {
            field.push_char(c);
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(mock: MockFormRelay) -> App {
        App::new(Arc::new(mock))
    }

    fn fill_valid_contact(app: &mut App) {
        set_text(&mut app.state.contact.name, "Jo");
        set_text(&mut app.state.contact.email, "jo@example.com");
        set_text(&mut app.state.contact.phone, "+1 403 555 0199");
        set_text(&mut app.state.contact.message, "Hello from the test suite");
    }

    fn fill_valid_inquiry(app: &mut App) {
        set_text(&mut app.state.inquiry.name, "Jo");
        set_text(&mut app.state.inquiry.email, "jo@example.com");
        set_text(&mut app.state.inquiry.number, "+1 403 555 0199");
        app.state.inquiry.service.next_option();
        app.state.inquiry.service.next_option(); // "Web Applications"
        set_text(&mut app.state.inquiry.message, "Hello");
        set_text(&mut app.state.inquiry.budget, "5000");
    }

    /// Wait for spawned submissions, then apply their results
    async fn settle_in_flight(app: &mut App) {
        for handle in app.in_flight.drain(..) {
            let _ = handle.await;
        }
        app.drain_relay_events();
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_successful_inquiry_settles_and_resets() {
            let mut mock = MockFormRelay::new();
            mock.expect_submit_inquiry()
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(mock);
            fill_valid_inquiry(&mut app);

            app.submit_inquiry();
            assert!(app.state.inquiry.outcome.is_sending());

            settle_in_flight(&mut app).await;

            let banner = app.state.inquiry.outcome.banner().unwrap();
            assert!(banner.success);
            assert_eq!(banner.message, "Message sent successfully!");
            // Fields return to their initial empty values
            let fresh = crate::state::ServiceInquiryForm::new();
            assert_eq!(app.state.inquiry.submission(), fresh.submission());
        }

        #[tokio::test]
        async fn test_invalid_email_never_reaches_the_relay() {
            let mut mock = MockFormRelay::new();
            mock.expect_submit_contact().never();
            let mut app = app_with(mock);
            fill_valid_contact(&mut app);
            set_text(&mut app.state.contact.email, "not-an-email");

            app.submit_contact();

            assert_eq!(
                app.state.contact.errors.get("email"),
                Some("Invalid email address.")
            );
            assert_eq!(app.state.contact.outcome, SubmissionOutcome::Idle);
            assert!(app.in_flight.is_empty());
        }

        #[tokio::test]
        async fn test_transport_error_keeps_fields() {
            let mut mock = MockFormRelay::new();
            mock.expect_submit_contact()
                .times(1)
                .returning(|_| Err(RelayError::Transport("connection refused".to_string())));
            let mut app = app_with(mock);
            fill_valid_contact(&mut app);
            let before = app.state.contact.submission();

            app.submit_contact();
            settle_in_flight(&mut app).await;

            let banner = app.state.contact.outcome.banner().unwrap();
            assert!(!banner.success);
            assert_eq!(banner.message, "Network error. Please try again.");
            // Not reset on failure
            assert_eq!(app.state.contact.submission(), before);
        }

        #[tokio::test]
        async fn test_rejected_submission_message() {
            let mut mock = MockFormRelay::new();
            mock.expect_submit_contact()
                .times(1)
                .returning(|_| Err(RelayError::Rejected));
            let mut app = app_with(mock);
            fill_valid_contact(&mut app);

            app.submit_contact();
            settle_in_flight(&mut app).await;

            let banner = app.state.contact.outcome.banner().unwrap();
            assert_eq!(banner.message, "Failed to send message. Please try again.");
        }

        #[tokio::test]
        async fn test_no_second_submission_while_sending() {
            let mut mock = MockFormRelay::new();
            mock.expect_submit_contact().never();
            let mut app = app_with(mock);
            fill_valid_contact(&mut app);
            app.state.contact.outcome = SubmissionOutcome::Sending;

            app.submit_contact();

            assert!(app.in_flight.is_empty());
        }

        #[tokio::test]
        async fn test_newsletter_success_resets_email() {
            let mut mock = MockFormRelay::new();
            mock.expect_subscribe()
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(mock);
            set_text(&mut app.state.newsletter.email, "reader@example.org");

            app.submit_newsletter();
            settle_in_flight(&mut app).await;

            assert_eq!(app.state.newsletter.email.as_text(), "");
            assert!(app.state.newsletter.outcome.banner().unwrap().success);
        }

        #[tokio::test]
        async fn test_banner_clears_after_deadline() {
            let mut app = app_with(MockFormRelay::new());
            let now = Instant::now();
            app.apply_relay_event(
                RelayEvent {
                    kind: FormKind::Contact,
                    result: Ok(()),
                },
                now,
            );
            assert!(app.state.contact.outcome.banner().is_some());

            app.tick(now + Duration::from_millis(3999));
            assert!(app.state.contact.outcome.banner().is_some());

            app.tick(now + BANNER_CLEAR_DELAY);
            assert_eq!(app.state.contact.outcome, SubmissionOutcome::Idle);
        }
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_fills_the_active_field() {
            let mut app = app_with(MockFormRelay::new());
            app.handle_key(key(KeyCode::Char('J')));
            app.handle_key(key(KeyCode::Char('o')));
            assert_eq!(app.state.contact.name.as_text(), "Jo");

            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Char('j')));
            assert_eq!(app.state.contact.email.as_text(), "j");
        }

        #[tokio::test]
        async fn test_typing_clears_field_error() {
            let mut app = app_with(MockFormRelay::new());
            app.state
                .contact
                .errors
                .insert("name", "Name must be at least 2 characters long.");
            app.handle_key(key(KeyCode::Char('J')));
            assert!(app.state.contact.errors.get("name").is_none());
        }

        #[tokio::test]
        async fn test_function_keys_switch_views() {
            let mut app = app_with(MockFormRelay::new());
            app.handle_key(key(KeyCode::F(2)));
            assert_eq!(app.state.current_view, View::ServiceInquiry);
            app.handle_key(key(KeyCode::F(3)));
            assert_eq!(app.state.current_view, View::Newsletter);
            app.handle_key(key(KeyCode::F(1)));
            assert_eq!(app.state.current_view, View::Contact);
        }

        #[tokio::test]
        async fn test_esc_quits() {
            let mut app = app_with(MockFormRelay::new());
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc));
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_select_field_cycles_with_arrows() {
            let mut app = app_with(MockFormRelay::new());
            app.handle_key(key(KeyCode::F(2)));
            app.state.inquiry.set_active_field(3); // service
            app.handle_key(key(KeyCode::Down));
            assert_eq!(
                app.state.inquiry.service.as_text(),
                "Custom Software Development"
            );
            app.handle_key(key(KeyCode::Down));
            assert_eq!(app.state.inquiry.service.as_text(), "Web Applications");
            app.handle_key(key(KeyCode::Up));
            assert_eq!(
                app.state.inquiry.service.as_text(),
                "Custom Software Development"
            );
        }

        #[tokio::test]
        async fn test_enter_on_action_row_submits() {
            let mut mock = MockFormRelay::new();
            mock.expect_subscribe().times(1).returning(|_| Ok(()));
            let mut app = app_with(mock);
            app.handle_key(key(KeyCode::F(3)));
            for c in "reader@example.org".chars() {
                app.handle_key(key(KeyCode::Char(c)));
            }
            app.handle_key(key(KeyCode::Tab)); // action row
            app.handle_key(key(KeyCode::Enter));

            settle_in_flight(&mut app).await;
            assert!(app.state.newsletter.outcome.banner().unwrap().success);
        }

        #[tokio::test]
        async fn test_clear_button_resets_fields() {
            let mut app = app_with(MockFormRelay::new());
            fill_valid_contact(&mut app);
            app.state.contact.set_active_field(4);
            app.handle_key(key(KeyCode::Left)); // move to Clear
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.contact.name.as_text(), "");
        }

        #[tokio::test]
        async fn test_enter_in_message_adds_newline() {
            let mut app = app_with(MockFormRelay::new());
            app.state.contact.set_active_field(3);
            app.handle_key(key(KeyCode::Char('a')));
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(key(KeyCode::Char('b')));
            assert_eq!(app.state.contact.message.as_text(), "a\nb");
        }
    }
}
