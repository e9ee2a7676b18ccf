// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use monoflux_fetch::{FetchResponse, ResponseMetadata};
use serde::{Deserialize, Serialize};

/// Fixture document for JSON decode tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
}

/// The canned post every fixture response decodes to.
#[must_use]
pub fn post_fixture() -> Post {
    Post {
        id: 1,
        title: "A one-shot emitter".to_string(),
    }
}

/// A JSON response containing [`post_fixture`].
#[must_use]
pub fn post_response() -> FetchResponse {
    json_response(&post_fixture())
}

/// A JSON response containing `value`, with a `application/json` content
/// type.
///
/// # Panics
///
/// Panics if `value` cannot be serialized; fixtures are expected to be
/// serializable by construction.
#[must_use]
pub fn json_response<T: Serialize>(value: &T) -> FetchResponse {
    let body = serde_json::to_vec(value).expect("fixture must serialize");
    FetchResponse::new(body, ResponseMetadata::ok().content_type("application/json"))
}

/// A plain-text response with the given body.
#[must_use]
pub fn text_response(body: &str) -> FetchResponse {
    FetchResponse::new(
        body.as_bytes().to_vec(),
        ResponseMetadata::ok().content_type("text/plain"),
    )
}
