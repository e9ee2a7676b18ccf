use async_trait::async_trait;
use monoflux_core::{MonofluxError, Result};
use monoflux_fetch::{fetch_bytes, fetch_json, Address, AddressSource, FetchResponse, ResponseMetadata};
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Deserialize, PartialEq)]
struct Post {
    id: u32,
    title: String,
}

/// Source that counts how often it is consulted.
struct CountingSource {
    calls: AtomicUsize,
    body: Vec<u8>,
}

impl CountingSource {
    fn with_body(body: &[u8]) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            body: body.to_vec(),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressSource for CountingSource {
    async fn load(&self, _address: &Address) -> Result<FetchResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(FetchResponse::new(self.body.clone(), ResponseMetadata::ok()))
    }
}

struct RefusingSource;

#[async_trait]
impl AddressSource for RefusingSource {
    async fn load(&self, _address: &Address) -> Result<FetchResponse> {
        Err(MonofluxError::source_error(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

#[tokio::test]
async fn invalid_address_fails_before_the_source_is_consulted() {
    let source = CountingSource::with_body(b"{}");

    let err = fetch_bytes(&source, "not an address").await.unwrap_err();

    assert!(matches!(err, MonofluxError::InvalidAddress { .. }));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn valid_address_yields_the_source_payload() {
    let source = CountingSource::with_body(b"hello");

    let response = fetch_bytes(&source, "https://example.com/greeting")
        .await
        .unwrap();

    assert_eq!(response.body, b"hello");
    assert_eq!(response.metadata.status, 200);
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn source_errors_are_surfaced_unmodified() {
    let err = fetch_bytes(&RefusingSource, "https://example.com/x")
        .await
        .unwrap_err();

    match err {
        MonofluxError::SourceError(inner) => {
            assert!(inner.to_string().contains("connection refused"));
        }
        other => panic!("expected SourceError, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_json_decodes_the_payload() {
    let source = CountingSource::with_body(br#"{"id":7,"title":"one-shot"}"#);

    let post: Post = fetch_json(&source, "https://example.com/posts/7")
        .await
        .unwrap();

    assert_eq!(
        post,
        Post {
            id: 7,
            title: "one-shot".to_string()
        }
    );
}

#[tokio::test]
async fn fetch_json_reports_decode_failures_with_context() {
    let source = CountingSource::with_body(b"definitely not json");

    let err = fetch_json::<Post, _>(&source, "https://example.com/posts/7")
        .await
        .unwrap_err();

    match err {
        MonofluxError::DecodeError { context, .. } => {
            assert!(context.contains("https://example.com/posts/7"));
        }
        other => panic!("expected DecodeError, got {other:?}"),
    }
}

#[tokio::test]
async fn works_through_a_trait_object() {
    let source = CountingSource::with_body(b"[]");
    let dyn_source: &dyn AddressSource = &source;

    let values: Vec<u8> = fetch_json(dyn_source, "https://example.com/empty")
        .await
        .unwrap();

    assert!(values.is_empty());
}
