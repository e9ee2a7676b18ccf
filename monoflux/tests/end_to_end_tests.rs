use monoflux::prelude::*;
use monoflux::HandleState;
use monoflux_test_utils::{json_response, MockSource, RecordingSubscriber};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Quote {
    author: String,
    text: String,
}

#[tokio::test]
async fn a_consumer_under_test_sees_the_faked_response() {
    // The mock stands in for the real integration; the consumer only ever
    // talks to the AddressSource seam.
    let source = MockSource::new(json_response(&serde_json::json!({
        "author": "anonymous",
        "text": "ship it"
    })));

    let quote: Quote = fetch_json(&source, "https://api.example.com/quotes/today")
        .await
        .unwrap();

    assert_eq!(
        quote,
        Quote {
            author: "anonymous".to_string(),
            text: "ship it".to_string()
        }
    );
}

#[tokio::test]
async fn the_failure_path_is_just_as_deterministic() {
    let source = monoflux_test_utils::FailingSource::new(MonofluxError::source_error(
        std::io::Error::other("backend down"),
    ));

    let err = fetch_bytes(&source, "https://api.example.com/quotes/today")
        .await
        .unwrap_err();

    assert!(matches!(err, MonofluxError::SourceError(_)));
}

#[test]
fn the_handshake_is_fully_synchronous() {
    let (subscriber, record) = RecordingSubscriber::new();
    let mut handle = Just::new("sync").attach(Box::new(subscriber));

    // Delivery happens inside this call stack, no executor involved.
    handle.request(Demand::max(1)).unwrap();

    record.assert_value_then_finished(&"sync");
    assert_eq!(handle.state(), HandleState::Fulfilled);
}
