// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Metadata accompanying a fetched payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// Status code reported by the source.
    pub status: u16,
    /// Content type reported by the source, when known.
    pub content_type: Option<String>,
}

impl ResponseMetadata {
    /// Metadata for a plain successful response (status 200, no content
    /// type).
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            status: 200,
            content_type: None,
        }
    }

    /// Metadata with the given status and no content type.
    #[must_use]
    pub const fn with_status(status: u16) -> Self {
        Self {
            status,
            content_type: None,
        }
    }

    /// Sets the content type, consuming and returning the metadata.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// The emitted value of a fetch: an immutable pair of payload bytes and
/// response metadata.
///
/// Produced once per activation and handed to the consumer whole; the
/// source does not retain it after delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// The raw payload bytes.
    pub body: Vec<u8>,
    /// Metadata describing the response.
    pub metadata: ResponseMetadata,
}

impl FetchResponse {
    /// Build a response from payload bytes and metadata.
    #[must_use]
    pub const fn new(body: Vec<u8>, metadata: ResponseMetadata) -> Self {
        Self { body, metadata }
    }

    /// Returns `true` if the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }
}
