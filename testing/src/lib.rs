//! # Evalix Testing
//!
//! Testing utilities and helpers for the Evalix client architecture.
//!
//! This crate provides:
//! - Mock implementations of environment dependencies (clock, notifier)
//! - A fluent Given-When-Then harness for reducer tests
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use evalix_testing::{ReducerTest, assertions, mocks::test_clock};
//!
//! ReducerTest::new(SkillReducer)
//!     .with_env(test_environment())
//!     .given_state(SkillState::default())
//!     .when_action(SkillAction::Fetched { seq: 1, skills: vec![] })
//!     .then_state(|state| assert!(!state.loading))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

pub mod reducer_test;

/// Mock implementations for testing
pub mod mocks {
    use chrono::{DateTime, Utc};
    use evalix_core::environment::Clock;
    use evalix_http::{NotificationId, NotificationKind, Notifier};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use evalix_testing::mocks::FixedClock;
    /// use evalix_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// One notification captured by [`RecordingNotifier`]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedNotification {
        /// The emitted message
        pub message: String,
        /// The notification kind
        pub kind: NotificationKind,
    }

    /// Notifier that captures every emitted notification
    ///
    /// Clones share the captured list, so the notifier can be handed to a
    /// middleware and inspected from the test afterwards.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingNotifier {
        recorded: Arc<Mutex<Vec<RecordedNotification>>>,
    }

    impl RecordingNotifier {
        /// Create an empty recorder
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Everything recorded so far, in emission order
        #[must_use]
        pub fn recorded(&self) -> Vec<RecordedNotification> {
            self.recorded
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .clone()
        }

        /// Messages of every recorded notification of the given kind
        #[must_use]
        pub fn messages_of(&self, kind: NotificationKind) -> Vec<String> {
            self.recorded()
                .into_iter()
                .filter(|n| n.kind == kind)
                .map(|n| n.message)
                .collect()
        }

        /// Drop everything recorded so far
        pub fn clear(&self) {
            self.recorded
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .clear();
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(
            &self,
            message: &str,
            kind: NotificationKind,
            _duration: Option<Duration>,
        ) -> NotificationId {
            self.recorded
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push(RecordedNotification {
                    message: message.to_string(),
                    kind,
                });
            uuid::Uuid::new_v4().to_string()
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, RecordedNotification, RecordingNotifier, test_clock};
pub use reducer_test::{ReducerTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;
    use evalix_core::environment::Clock;
    use evalix_http::{NotificationKind, Notifier};

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn recording_notifier_captures_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify("one", NotificationKind::Success, None);
        notifier.notify("two", NotificationKind::Error, None);

        let recorded = notifier.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].message, "one");
        assert_eq!(
            notifier.messages_of(NotificationKind::Error),
            vec!["two".to_string()]
        );

        notifier.clear();
        assert!(notifier.recorded().is_empty());
    }
}
