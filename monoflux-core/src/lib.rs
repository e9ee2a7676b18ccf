// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # monoflux-core
//!
//! The one-shot publisher contract: a producer/consumer handshake that
//! delivers at most one value to exactly one subscriber, then terminates.
//!
//! The handshake has three steps:
//!
//! 1. **Attach** — a [`Publisher`] registers a [`Subscriber`] and hands back
//!    a [`OneShotSubscription`]. Nothing is delivered yet.
//! 2. **Request** — the subscriber (or whoever drives it) calls
//!    [`OneShotSubscription::request`] with a [`Demand`]. The publisher's
//!    single outcome is delivered synchronously in the caller's stack: the
//!    value, then [`Completion::Finished`] — or a single
//!    [`Completion::Failed`] for the failure variant.
//! 3. **Terminal** — the handle drops its subscriber reference and refuses
//!    further interaction. A second `request` fails loudly instead of
//!    double-delivering; `cancel` is idempotent in every state.
//!
//! Two deterministic emitters implement the contract: [`Just`] (one fixed
//! value, then finished) and [`Fail`] (one fixed error, no value). They exist
//! to stand in for real asynchronous sources in tests.
//!
//! ```
//! use monoflux_core::{Demand, Just, Publisher, Subscriber, Completion};
//!
//! struct Print;
//! impl Subscriber<i32> for Print {
//!     fn receive(&mut self, value: i32) {
//!         println!("got {value}");
//!     }
//!     fn receive_completion(&mut self, completion: Completion) {
//!         assert!(completion.is_finished());
//!     }
//! }
//!
//! let mut handle = Just::new(42).attach(Box::new(Print));
//! handle.request(Demand::max(1)).unwrap();
//! assert!(!handle.has_subscriber());
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod completion;
pub mod demand;
pub mod error;
pub mod fail;
pub mod just;
pub mod publisher;
pub mod single;
pub mod subscriber;
pub mod subscription;

pub use self::completion::Completion;
pub use self::demand::Demand;
pub use self::error::{MonofluxError, Result};
pub use self::fail::Fail;
pub use self::just::Just;
pub use self::publisher::Publisher;
pub use self::single::single;
pub use self::subscriber::{BoxSubscriber, Subscriber};
pub use self::subscription::{HandleState, OneShotSubscription};
