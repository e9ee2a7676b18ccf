// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from the synchronous one-shot handshake into async code.
//!
//! [`single`] attaches a channel-backed subscriber, drives one request, and
//! resolves to the delivered value or the failure carried by the
//! completion. Because delivery is synchronous, the returned future is
//! ready as soon as the request has been driven; the channel only exists
//! so async consumers can sit on the handshake without caring about that.

use crate::completion::Completion;
use crate::demand::Demand;
use crate::error::{MonofluxError, Result};
use crate::publisher::Publisher;
use crate::subscriber::Subscriber;
use futures_channel::oneshot;

struct ChannelSubscriber<T> {
    tx: Option<oneshot::Sender<Result<T>>>,
}

impl<T: Send> Subscriber<T> for ChannelSubscriber<T> {
    fn receive(&mut self, value: T) {
        if let Some(tx) = self.tx.take() {
            // Receiver dropped means nobody is awaiting; nothing to do.
            let _ = tx.send(Ok(value));
        }
    }

    fn receive_completion(&mut self, completion: Completion) {
        if let Completion::Failed(error) = completion {
            if let Some(tx) = self.tx.take() {
                let _ = tx.send(Err(error));
            }
        }
    }
}

/// Await the single outcome of a one-shot publisher.
///
/// # Errors
///
/// Returns the error carried by a failure completion, or
/// [`MonofluxError::NoValue`] if the publisher terminated without
/// delivering anything.
///
/// # Examples
///
/// ```
/// use monoflux_core::{single, Fail, Just, MonofluxError};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// assert_eq!(single(Just::new(7)).await.unwrap(), 7);
///
/// let err = single(Fail::<i32>::new(MonofluxError::invalid_address("x")))
///     .await
///     .unwrap_err();
/// assert!(matches!(err, MonofluxError::InvalidAddress { .. }));
/// # }
/// ```
pub async fn single<P>(publisher: P) -> Result<P::Output>
where
    P: Publisher,
    P::Output: Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    let mut handle = publisher.attach(Box::new(ChannelSubscriber { tx: Some(tx) }));
    handle.request(Demand::max(1))?;
    rx.await.map_err(|_| MonofluxError::NoValue)?
}
