//! # Greeter Module
//!
//! Construction emits exactly one INFO record into the sink it is given.
//! After that the instance is read-only.

use serde::Serialize;
use tracing::Dispatch;

/// The greeting every `Greeter` holds.
pub const GREETING: &str = "Hello from a maven app.";

/// Message of the single record emitted on construction.
pub const STARTUP_MESSAGE: &str = "MavenApp starting";

/// Holds a fixed greeting and signals its own initialization.
///
/// A value of this type is always ready: there is no partially built state
/// and no teardown beyond the normal drop of its `String`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeter {
    message: String,
}

impl Greeter {
    /// Create a greeter, logging the startup record into `sink`.
    ///
    /// The record is fire-and-forget: whatever the sink does with it
    /// (render, drop, fail) does not reach the caller.
    #[must_use]
    pub fn new(sink: &Dispatch) -> Self {
        tracing::dispatcher::with_default(sink, || {
            tracing::info!("{}", STARTUP_MESSAGE);
        });
        Self {
            message: GREETING.to_owned(),
        }
    }

    /// The stored greeting.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Greeter {
    /// Construct against the current thread's default dispatcher.
    fn default() -> Self {
        Self::new(&Dispatch::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::testing::RecordingLayer;
    use proptest::prelude::*;
    use tracing::Level;

    #[test]
    fn new_holds_fixed_greeting() {
        let greeter = Greeter::new(&Dispatch::none());
        assert_eq!(greeter.message(), "Hello from a maven app.");
    }

    #[test]
    fn construction_emits_one_info_record() {
        let recorder = RecordingLayer::new();
        let _greeter = Greeter::new(&recorder.dispatch());

        let events = recorder.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::INFO);
        assert_eq!(events[0].message, STARTUP_MESSAGE);
    }

    #[test]
    fn message_does_not_log() {
        let recorder = RecordingLayer::new();
        let greeter = Greeter::new(&recorder.dispatch());

        for _ in 0..10 {
            let _ = greeter.message();
        }
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn two_constructions_two_records() {
        let recorder = RecordingLayer::new();
        let sink = recorder.dispatch();

        let first = Greeter::new(&sink);
        let second = Greeter::new(&sink);

        assert_eq!(first.message(), GREETING);
        assert_eq!(second.message(), GREETING);
        assert_eq!(recorder.count(), 2);
    }

    #[test]
    fn instances_do_not_share_storage() {
        let first = Greeter::new(&Dispatch::none());
        let second = Greeter::new(&Dispatch::none());
        assert_ne!(first.message().as_ptr(), second.message().as_ptr());

        let cloned = first.clone();
        drop(first);
        assert_eq!(cloned.message(), GREETING);
        assert_eq!(second.message(), GREETING);
    }

    #[test]
    fn sink_is_scoped_to_construction() {
        let recorder = RecordingLayer::new();
        let _greeter = Greeter::new(&recorder.dispatch());

        // Events after construction go to the thread default, not the sink.
        tracing::info!("unrelated");
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn default_uses_current_dispatcher() {
        let recorder = RecordingLayer::new();
        let greeter = tracing::dispatcher::with_default(&recorder.dispatch(), Greeter::default);

        assert_eq!(greeter.message(), GREETING);
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn concurrent_construction_with_independent_sinks() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    let recorder = RecordingLayer::new();
                    let greeter = Greeter::new(&recorder.dispatch());
                    (greeter, recorder.count())
                })
            })
            .collect();

        for handle in handles {
            let (greeter, count) = handle.join().unwrap();
            assert_eq!(greeter.message(), GREETING);
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn serializes_message_field() {
        let greeter = Greeter::new(&Dispatch::none());
        let json = serde_json::to_string(&greeter).unwrap();
        assert_eq!(json, r#"{"message":"Hello from a maven app."}"#);
    }

    proptest! {
        #[test]
        fn message_is_stable_across_calls(calls in 1usize..256) {
            let greeter = Greeter::new(&Dispatch::none());
            for _ in 0..calls {
                prop_assert_eq!(greeter.message(), GREETING);
            }
        }
    }
}
