// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # monoflux-fetch
//!
//! The fetch seam: obtain a one-shot result for an address, from whatever
//! source is wired in.
//!
//! Consumers depend only on the [`AddressSource`] capability trait, so a
//! concrete integration (a real network client) and a deterministic test
//! double are interchangeable. The fetch operations validate the address
//! first — a malformed string is returned to the caller immediately as
//! [`MonofluxError::InvalidAddress`](monoflux_core::MonofluxError) and the
//! source is never consulted. All source errors are surfaced unmodified;
//! there is no retry and no recovery.
//!
//! ```
//! use monoflux_fetch::{fetch_json, Address, AddressSource, FetchResponse, ResponseMetadata};
//! use monoflux_core::Result;
//! use async_trait::async_trait;
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl AddressSource for Canned {
//!     async fn load(&self, _address: &Address) -> Result<FetchResponse> {
//!         Ok(FetchResponse::new(br#"{"id":1}"#.to_vec(), ResponseMetadata::ok()))
//!     }
//! }
//!
//! #[derive(serde::Deserialize)]
//! struct Doc { id: u32 }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let doc: Doc = fetch_json(&Canned, "https://example.com/doc").await.unwrap();
//! assert_eq!(doc.id, 1);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod address;
pub mod fetch;
pub mod response;
pub mod source;

pub use self::address::Address;
pub use self::fetch::{fetch_bytes, fetch_json};
pub use self::response::{FetchResponse, ResponseMetadata};
pub use self::source::AddressSource;
