// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::address::Address;
use crate::response::FetchResponse;
use async_trait::async_trait;
use monoflux_core::Result;

/// Capability to obtain a one-shot result for an address.
///
/// This is the substitution seam: production code wires in a real
/// integration, tests wire in a deterministic double (see
/// `monoflux-test-utils`). Consumers depend only on this trait, never on a
/// concrete source, so the two are interchangeable.
///
/// Implementations load the address exactly once per call and surface
/// failures unmodified; retrying is the caller's decision, and no
/// implementation in this workspace makes it.
#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Load the single result for `address`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying source reports, unmodified.
    async fn load(&self, address: &Address) -> Result<FetchResponse>;
}
