// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use monoflux_core::{Completion, MonofluxError, Subscriber};
use parking_lot::Mutex;
use std::sync::Arc;

/// One recorded signal, in arrival order.
#[derive(Debug, Clone)]
pub enum Signal<T> {
    /// A delivered value.
    Value(T),
    /// The terminal completion.
    Completed(Completion),
}

/// Subscriber that records every signal it receives.
///
/// Created together with a [`RecordHandle`] that shares the recorded
/// signals, so assertions remain possible after the subscriber box has
/// been consumed by `attach` and dropped by the handshake.
pub struct RecordingSubscriber<T> {
    signals: Arc<Mutex<Vec<Signal<T>>>>,
}

impl<T> RecordingSubscriber<T> {
    /// Create a recording subscriber and its inspection handle.
    #[must_use]
    pub fn new() -> (Self, RecordHandle<T>) {
        let signals = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                signals: signals.clone(),
            },
            RecordHandle { signals },
        )
    }
}

impl<T: Send> Subscriber<T> for RecordingSubscriber<T> {
    fn receive(&mut self, value: T) {
        self.signals.lock().push(Signal::Value(value));
    }

    fn receive_completion(&mut self, completion: Completion) {
        self.signals.lock().push(Signal::Completed(completion));
    }
}

/// Inspection handle over the signals a [`RecordingSubscriber`] received.
#[derive(Clone)]
pub struct RecordHandle<T> {
    signals: Arc<Mutex<Vec<Signal<T>>>>,
}

impl<T: Clone> RecordHandle<T> {
    /// All recorded signals, in arrival order.
    #[must_use]
    pub fn signals(&self) -> Vec<Signal<T>> {
        self.signals.lock().clone()
    }

    /// The delivered values, in arrival order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.signals
            .lock()
            .iter()
            .filter_map(|s| match s {
                Signal::Value(v) => Some(v.clone()),
                Signal::Completed(_) => None,
            })
            .collect()
    }

    /// The recorded completions (there should be at most one).
    #[must_use]
    pub fn completions(&self) -> Vec<Completion> {
        self.signals
            .lock()
            .iter()
            .filter_map(|s| match s {
                Signal::Value(_) => None,
                Signal::Completed(c) => Some(c.clone()),
            })
            .collect()
    }

    /// Total number of signals received.
    #[must_use]
    pub fn signal_count(&self) -> usize {
        self.signals.lock().len()
    }

    /// Returns `true` if exactly one `Finished` completion was recorded.
    #[must_use]
    pub fn finished(&self) -> bool {
        let completions = self.completions();
        completions.len() == 1 && completions[0].is_finished()
    }

    /// The error carried by a recorded failure completion, if any.
    #[must_use]
    pub fn failure(&self) -> Option<MonofluxError> {
        self.completions()
            .into_iter()
            .find_map(|c| c.failure().cloned())
    }

    /// Asserts the canonical success shape: exactly one value, immediately
    /// followed by exactly one `Finished`, and nothing after.
    ///
    /// # Panics
    ///
    /// Panics with a description of the recorded signals otherwise.
    pub fn assert_value_then_finished(&self, expected: &T)
    where
        T: PartialEq + std::fmt::Debug,
    {
        let signals = self.signals.lock();
        match signals.as_slice() {
            [Signal::Value(v), Signal::Completed(c)] if v == expected && c.is_finished() => {}
            other => panic!("expected [Value({expected:?}), Finished], got {other:?}"),
        }
    }
}
