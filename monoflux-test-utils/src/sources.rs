// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use monoflux_core::{single, Fail, Just, MonofluxError, Result};
use monoflux_fetch::{Address, AddressSource, FetchResponse};

/// Deterministic [`AddressSource`] double backed by a [`Just`] emitter.
///
/// Every `load` drives a fresh one-shot handshake: attach, request,
/// deliver the canned response, finish. The address is ignored; syntactic
/// validation has already happened by the time a source is consulted.
pub struct MockSource {
    response: FetchResponse,
}

impl MockSource {
    /// Create a source that always delivers `response`.
    #[must_use]
    pub const fn new(response: FetchResponse) -> Self {
        Self { response }
    }
}

#[async_trait]
impl AddressSource for MockSource {
    async fn load(&self, _address: &Address) -> Result<FetchResponse> {
        single(Just::new(self.response.clone())).await
    }
}

/// Deterministic failing [`AddressSource`] double backed by a [`Fail`]
/// emitter.
///
/// Every `load` delivers a failure completion carrying (a clone of) the
/// fixed error, exercising the consumer's error path.
pub struct FailingSource {
    error: MonofluxError,
}

impl FailingSource {
    /// Create a source that always fails with `error`.
    #[must_use]
    pub const fn new(error: MonofluxError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl AddressSource for FailingSource {
    async fn load(&self, _address: &Address) -> Result<FetchResponse> {
        single(Fail::new(self.error.clone())).await
    }
}
