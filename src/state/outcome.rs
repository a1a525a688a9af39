//! Submission outcome tracking
//!
//! Each form owns one of these. The settled banner carries its own clear
//! deadline and is dropped with the form, so a stale timer can never touch
//! a form that no longer exists.

use std::time::{Duration, Instant};

/// How long a settled banner stays on screen
pub const BANNER_CLEAR_DELAY: Duration = Duration::from_millis(4000);
/// The newsletter banner lingers a little longer
pub const NEWSLETTER_CLEAR_DELAY: Duration = Duration::from_millis(5000);

/// Tri-state submission status for a single form instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Not yet attempted
    #[default]
    Idle,
    /// Request in flight; submit stays disabled until it settles
    Sending,
    Settled(Settled),
}

/// A finished submission attempt and its banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    pub success: bool,
    pub message: String,
    settled_at: Instant,
    clear_after: Duration,
}

impl SubmissionOutcome {
    /// Record a finished attempt, starting the banner clock at `now`
    pub fn settle(
        &mut self,
        success: bool,
        message: impl Into<String>,
        now: Instant,
        clear_after: Duration,
    ) {
        *self = SubmissionOutcome::Settled(Settled {
            success,
            message: message.into(),
            settled_at: now,
            clear_after,
        });
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionOutcome::Sending)
    }

    /// Banner text to show, if any
    pub fn banner(&self) -> Option<&Settled> {
        match self {
            SubmissionOutcome::Settled(settled) => Some(settled),
            _ => None,
        }
    }

    /// Drop the settled banner once its deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if let SubmissionOutcome::Settled(settled) = self {
            if now.duration_since(settled.settled_at) >= settled.clear_after {
                *self = SubmissionOutcome::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionOutcome::default(), SubmissionOutcome::Idle);
    }

    #[test]
    fn test_settle_records_message() {
        let mut outcome = SubmissionOutcome::Sending;
        outcome.settle(
            true,
            "Message sent successfully!",
            Instant::now(),
            BANNER_CLEAR_DELAY,
        );
        let banner = outcome.banner().unwrap();
        assert!(banner.success);
        assert_eq!(banner.message, "Message sent successfully!");
        assert!(!outcome.is_sending());
    }

    #[test]
    fn test_tick_keeps_banner_before_deadline() {
        let now = Instant::now();
        let mut outcome = SubmissionOutcome::Idle;
        outcome.settle(false, "Failed to send message. Please try again.", now, BANNER_CLEAR_DELAY);
        outcome.tick(now + Duration::from_millis(3999));
        assert!(outcome.banner().is_some());
    }

    #[test]
    fn test_tick_clears_banner_at_deadline() {
        let now = Instant::now();
        let mut outcome = SubmissionOutcome::Idle;
        outcome.settle(true, "Message sent successfully!", now, BANNER_CLEAR_DELAY);
        outcome.tick(now + BANNER_CLEAR_DELAY);
        assert_eq!(outcome, SubmissionOutcome::Idle);
    }

    #[test]
    fn test_tick_ignores_idle_and_sending() {
        let now = Instant::now();
        let mut idle = SubmissionOutcome::Idle;
        idle.tick(now);
        assert_eq!(idle, SubmissionOutcome::Idle);

        let mut sending = SubmissionOutcome::Sending;
        sending.tick(now + Duration::from_secs(60));
        assert!(sending.is_sending());
    }

    #[test]
    fn test_newsletter_delay_is_longer() {
        let now = Instant::now();
        let mut outcome = SubmissionOutcome::Idle;
        outcome.settle(true, "Subscribed!", now, NEWSLETTER_CLEAR_DELAY);
        outcome.tick(now + BANNER_CLEAR_DELAY);
        assert!(outcome.banner().is_some());
        outcome.tick(now + NEWSLETTER_CLEAR_DELAY);
        assert!(outcome.banner().is_none());
    }
}
