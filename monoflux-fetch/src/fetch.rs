// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::address::Address;
use crate::response::FetchResponse;
use crate::source::AddressSource;
use monoflux_core::{MonofluxError, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Fetch the raw payload for `raw` from `source`.
///
/// The address is validated first: a malformed string is returned to the
/// caller immediately as
/// [`MonofluxError::InvalidAddress`](monoflux_core::MonofluxError) and the
/// source is never consulted. Source errors are surfaced unmodified.
///
/// # Errors
///
/// - [`MonofluxError::InvalidAddress`](monoflux_core::MonofluxError) for a
///   syntactically invalid address.
/// - Whatever `source.load` reports, unchanged.
pub async fn fetch_bytes<S>(source: &S, raw: &str) -> Result<FetchResponse>
where
    S: AddressSource + ?Sized,
{
    let address: Address = raw.parse()?;
    debug!(%address, "loading address");
    source.load(&address).await
}

/// Fetch the payload for `raw` and decode it as JSON into `T`.
///
/// # Errors
///
/// Everything [`fetch_bytes`] reports, plus
/// [`MonofluxError::DecodeError`](monoflux_core::MonofluxError) when the
/// payload is not valid JSON for `T`.
pub async fn fetch_json<T, S>(source: &S, raw: &str) -> Result<T>
where
    T: DeserializeOwned,
    S: AddressSource + ?Sized,
{
    let response = fetch_bytes(source, raw).await?;
    debug!(bytes = response.len(), "decoding payload");
    serde_json::from_slice(&response.body)
        .map_err(|e| MonofluxError::decode_error(format!("payload from {raw}"), e))
}
