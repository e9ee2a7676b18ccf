// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::MonofluxError;
use crate::publisher::Publisher;
use crate::subscriber::BoxSubscriber;
use crate::subscription::OneShotSubscription;
use std::marker::PhantomData;

/// Deterministic failing emitter, the sibling of [`Just`](crate::Just).
///
/// On the first `request` it delivers a single `Completion::Failed`
/// carrying its fixed error. No value is ever produced. Useful for
/// exercising a consumer's error path deterministically.
#[derive(Debug)]
pub struct Fail<T> {
    error: MonofluxError,
    marker: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    /// Create an emitter that will deliver `error` as its completion.
    #[must_use]
    pub const fn new(error: MonofluxError) -> Self {
        Self {
            error,
            marker: PhantomData,
        }
    }
}

impl<T: Send> Publisher for Fail<T> {
    type Output = T;

    fn attach(self, subscriber: BoxSubscriber<T>) -> OneShotSubscription<T> {
        OneShotSubscription::failure(self.error, subscriber)
    }
}
