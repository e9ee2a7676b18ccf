// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::publisher::Publisher;
use crate::subscriber::BoxSubscriber;
use crate::subscription::OneShotSubscription;

/// Deterministic single-value emitter.
///
/// On the first `request`, for any demand quantity, `Just` synchronously
/// hands its fixed value to the subscriber, signals successful completion,
/// and releases the subscriber reference. It cannot fail and exists to
/// stand in for a real asynchronous source in tests.
///
/// # Examples
///
/// ```
/// use monoflux_core::{single, Just};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let value = single(Just::new("hello")).await.unwrap();
/// assert_eq!(value, "hello");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Just<T> {
    value: T,
}

impl<T> Just<T> {
    /// Create an emitter that will deliver `value` exactly once.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Send> Publisher for Just<T> {
    type Output = T;

    fn attach(self, subscriber: BoxSubscriber<T>) -> OneShotSubscription<T> {
        OneShotSubscription::value(self.value, subscriber)
    }
}
