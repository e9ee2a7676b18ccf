// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the monoflux workspace.
//!
//! This crate provides the deterministic doubles the one-shot contract was
//! built for: a recording subscriber to assert signal ordering, mock
//! sources that drive the real emitters through the real handshake, and
//! canned response fixtures. It is meant for development and testing only.
//!
//! # Key types
//!
//! ## `RecordingSubscriber<T>`
//!
//! Records every value and completion in arrival order, with an inspection
//! handle that outlives the boxed subscriber:
//!
//! ```rust
//! use monoflux_core::{Demand, Just, Publisher};
//! use monoflux_test_utils::RecordingSubscriber;
//!
//! let (subscriber, record) = RecordingSubscriber::new();
//! let mut handle = Just::new(42).attach(Box::new(subscriber));
//! handle.request(Demand::max(1)).unwrap();
//!
//! assert_eq!(record.values(), vec![42]);
//! assert!(record.finished());
//! ```
//!
//! ## `MockSource`
//!
//! An [`AddressSource`](monoflux_fetch::AddressSource) double that wires a
//! `Just` emitter in as the underlying source, standing in for a real
//! network call:
//!
//! ```rust
//! use monoflux_fetch::fetch_bytes;
//! use monoflux_test_utils::{text_response, MockSource};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let source = MockSource::new(text_response("hello"));
//! let response = fetch_bytes(&source, "https://example.com/x").await.unwrap();
//! assert_eq!(response.body, b"hello");
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod fixtures;
pub mod recording;
pub mod sources;

pub use self::fixtures::{json_response, post_fixture, post_response, text_response, Post};
pub use self::recording::{RecordHandle, RecordingSubscriber, Signal};
pub use self::sources::{FailingSource, MockSource};
