// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::completion::Completion;

/// Consumer side of the one-shot handshake.
///
/// A subscriber receives at most one value followed by exactly one
/// completion signal. After the completion (or after cancellation) the
/// publisher drops its reference and never calls back in.
pub trait Subscriber<T>: Send {
    /// Called with the delivered value, before the completion signal.
    fn receive(&mut self, value: T);

    /// Called exactly once with the terminal signal.
    fn receive_completion(&mut self, completion: Completion);
}

/// Owned, type-erased subscriber as held by a subscription handle.
pub type BoxSubscriber<T> = Box<dyn Subscriber<T>>;
