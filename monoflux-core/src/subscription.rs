// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::completion::Completion;
use crate::demand::Demand;
use crate::error::{MonofluxError, Result};
use crate::subscriber::BoxSubscriber;
use tracing::trace;

/// One-shot state of a subscription handle.
///
/// `Fulfilled` and `Cancelled` are terminal; there is no transition out of
/// either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    /// No delivery has happened yet; the subscriber reference is live.
    Unfulfilled,
    /// The single outcome has been delivered; the subscriber is released.
    Fulfilled,
    /// Cancelled before delivery; the subscriber is released.
    Cancelled,
}

/// What a one-shot publisher delivers on the first request.
enum Outcome<T> {
    /// A value followed by `Completion::Finished`.
    Value(T),
    /// A single `Completion::Failed` carrying this error; no value.
    Failure(MonofluxError),
}

/// The live link between a one-shot publisher and its sole subscriber.
///
/// The handle owns the subscriber reference exclusively; all mutation goes
/// through `&mut self`, so the single-caller shape of the handshake is
/// enforced by the borrow checker rather than by a lock.
///
/// Invariant: at most one value is ever delivered through a given handle,
/// and no interaction with the subscriber occurs after completion or
/// cancellation.
pub struct OneShotSubscription<T> {
    subscriber: Option<BoxSubscriber<T>>,
    outcome: Option<Outcome<T>>,
    state: HandleState,
}

impl<T> OneShotSubscription<T> {
    fn new(outcome: Outcome<T>, subscriber: BoxSubscriber<T>) -> Self {
        Self {
            subscriber: Some(subscriber),
            outcome: Some(outcome),
            state: HandleState::Unfulfilled,
        }
    }

    /// Handle that will deliver `value` followed by `Completion::Finished`.
    ///
    /// This is how a [`Publisher`](crate::Publisher) implementation builds
    /// its handle on attach.
    #[must_use]
    pub fn value(value: T, subscriber: BoxSubscriber<T>) -> Self {
        Self::new(Outcome::Value(value), subscriber)
    }

    /// Handle that will deliver a single `Completion::Failed` carrying
    /// `error`, and no value.
    #[must_use]
    pub fn failure(error: MonofluxError, subscriber: BoxSubscriber<T>) -> Self {
        Self::new(Outcome::Failure(error), subscriber)
    }

    /// Request delivery.
    ///
    /// Regardless of the demand quantity — including [`Demand::none`] — the
    /// publisher's single outcome is delivered synchronously in this call:
    /// the value, then [`Completion::Finished`] (or one
    /// [`Completion::Failed`] for a failure outcome). The subscriber
    /// reference is released before returning.
    ///
    /// # Errors
    ///
    /// - [`MonofluxError::AlreadyFulfilled`] if delivery already happened.
    /// - [`MonofluxError::HandleCancelled`] if the handle was cancelled;
    ///   nothing is delivered in either case.
    pub fn request(&mut self, demand: Demand) -> Result<()> {
        match self.state {
            HandleState::Cancelled => return Err(MonofluxError::HandleCancelled),
            HandleState::Fulfilled => return Err(MonofluxError::AlreadyFulfilled),
            HandleState::Unfulfilled => {}
        }

        let (Some(mut subscriber), Some(outcome)) = (self.subscriber.take(), self.outcome.take())
        else {
            return Err(MonofluxError::AlreadyFulfilled);
        };

        self.state = HandleState::Fulfilled;

        match outcome {
            Outcome::Value(value) => {
                trace!(%demand, "delivering single value");
                subscriber.receive(value);
                subscriber.receive_completion(Completion::Finished);
            }
            Outcome::Failure(error) => {
                trace!(%demand, %error, "delivering failure completion");
                subscriber.receive_completion(Completion::Failed(error));
            }
        }

        // `subscriber` drops here: the handle holds no live reference past
        // the terminal transition.
        Ok(())
    }

    /// Cancel the subscription, releasing the subscriber reference.
    ///
    /// Idempotent. After delivery this is a no-op; before delivery it moves
    /// the handle to its terminal `Cancelled` state, after which `request`
    /// fails and nothing is ever delivered.
    pub fn cancel(&mut self) {
        self.subscriber = None;
        self.outcome = None;
        if self.state == HandleState::Unfulfilled {
            trace!("subscription cancelled before delivery");
            self.state = HandleState::Cancelled;
        }
    }

    /// Current state of the handle.
    #[must_use]
    pub const fn state(&self) -> HandleState {
        self.state
    }

    /// Returns `true` while the handle still holds its subscriber.
    ///
    /// Becomes `false` immediately after delivery or cancellation.
    #[must_use]
    pub const fn has_subscriber(&self) -> bool {
        self.subscriber.is_some()
    }

    /// Returns `true` once the handle is `Fulfilled` or `Cancelled`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self.state, HandleState::Unfulfilled)
    }
}

impl<T> std::fmt::Debug for OneShotSubscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OneShotSubscription")
            .field("state", &self.state)
            .field("has_subscriber", &self.has_subscriber())
            .finish()
    }
}
