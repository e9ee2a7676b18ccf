// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Monoflux
//!
//! A one-shot reactive value source: exactly one subscriber, at most one
//! value, exactly one completion — built so that concrete, otherwise
//! un-substitutable data sources can be replaced with deterministic fakes
//! in tests.
//!
//! ## Overview
//!
//! Monoflux has two layers:
//!
//! - **The handshake** (`monoflux-core`): [`Publisher`], [`Subscriber`] and
//!   [`OneShotSubscription`] — attach, request, synchronous delivery,
//!   terminal state. [`Just`] and [`Fail`] are the deterministic emitters.
//! - **The seam** (`monoflux-fetch`): [`AddressSource`], the capability to
//!   obtain a one-shot result for a validated [`Address`], with a JSON
//!   decode step on top. Production wires in a real integration; tests
//!   wire in the doubles from `monoflux-test-utils`.
//!
//! ## Quick start
//!
//! ```rust
//! use monoflux::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! // Await the single outcome of a deterministic emitter.
//! let value = single(Just::new(42)).await.unwrap();
//! assert_eq!(value, 42);
//! # }
//! ```

// Re-export the handshake contract
pub use monoflux_core::{
    single, BoxSubscriber, Completion, Demand, Fail, HandleState, Just, MonofluxError,
    OneShotSubscription, Publisher, Result, Subscriber,
};

// Re-export the fetch seam
pub use monoflux_fetch::{
    fetch_bytes, fetch_json, Address, AddressSource, FetchResponse, ResponseMetadata,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use monoflux_core::{
        single, Completion, Demand, Fail, Just, MonofluxError, Publisher, Result, Subscriber,
    };
    pub use monoflux_fetch::{fetch_bytes, fetch_json, Address, AddressSource, FetchResponse};
}
