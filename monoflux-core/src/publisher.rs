// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::subscriber::BoxSubscriber;
use crate::subscription::OneShotSubscription;

/// Producer side of the one-shot handshake.
///
/// Attaching registers the subscriber and hands back the subscription
/// handle; it always succeeds and delivers nothing. Delivery happens only
/// when the handle's [`request`](OneShotSubscription::request) is called.
///
/// The publisher is consumed on attach: its single outcome moves into the
/// handle, which is the only place it can be delivered from.
pub trait Publisher {
    /// The type of the single value this publisher can emit.
    type Output;

    /// Register `subscriber` and return the handle that drives delivery.
    fn attach(self, subscriber: BoxSubscriber<Self::Output>) -> OneShotSubscription<Self::Output>;
}
