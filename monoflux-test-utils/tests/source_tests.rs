use monoflux_core::MonofluxError;
use monoflux_fetch::{fetch_bytes, fetch_json};
use monoflux_test_utils::{
    post_fixture, post_response, text_response, FailingSource, MockSource, Post,
};

#[tokio::test]
async fn mock_source_delivers_a_non_empty_payload_for_a_valid_address() {
    let source = MockSource::new(text_response("quote of the day"));

    let response = fetch_bytes(&source, "https://example.com/quote")
        .await
        .unwrap();

    assert!(!response.is_empty());
    assert_eq!(response.body, b"quote of the day");
    assert_eq!(response.metadata.content_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn mock_source_feeds_the_json_decode_step() {
    let source = MockSource::new(post_response());

    let post: Post = fetch_json(&source, "https://example.com/posts/1")
        .await
        .unwrap();

    assert_eq!(post, post_fixture());
}

#[tokio::test]
async fn invalid_address_never_reaches_the_mock() {
    let source = MockSource::new(post_response());

    let err = fetch_bytes(&source, "no-scheme").await.unwrap_err();

    assert!(matches!(err, MonofluxError::InvalidAddress { .. }));
}

#[tokio::test]
async fn mock_source_is_reusable_across_loads() {
    let source = MockSource::new(text_response("again"));

    for _ in 0..3 {
        let response = fetch_bytes(&source, "https://example.com/r").await.unwrap();
        assert_eq!(response.body, b"again");
    }
}

#[tokio::test]
async fn failing_source_surfaces_its_fixed_error() {
    let source = FailingSource::new(MonofluxError::source_error(std::io::Error::new(
        std::io::ErrorKind::TimedOut,
        "timed out",
    )));

    let err = fetch_bytes(&source, "https://example.com/slow")
        .await
        .unwrap_err();

    match err {
        MonofluxError::SourceError(inner) => assert!(inner.to_string().contains("timed out")),
        other => panic!("expected SourceError, got {other:?}"),
    }
}
