use monoflux_core::{Completion, MonofluxError};
use std::error::Error;

#[test]
fn invalid_address_carries_the_raw_string() {
    let err = MonofluxError::invalid_address("htp:/broken");
    assert_eq!(err.to_string(), "invalid address: htp:/broken");
}

#[test]
fn source_error_preserves_the_cause() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let err = MonofluxError::source_error(io);

    assert!(err.source().is_some());
    assert!(err.to_string().contains("refused"));
}

#[test]
fn decode_error_reports_context() {
    let json = serde_json::from_str::<u32>("not json").unwrap_err();
    let err = MonofluxError::decode_error("payload for test", json);

    assert_eq!(err.to_string(), "decode error: payload for test");
    assert!(err.source().is_some());
}

#[test]
fn clone_keeps_the_rendered_source_message() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
    let err = MonofluxError::source_error(io);
    let cloned = err.clone();

    assert_eq!(cloned.to_string(), err.to_string());
}

#[test]
fn finished_completions_compare_equal_failures_never_do() {
    assert_eq!(Completion::Finished, Completion::Finished);

    let a = Completion::Failed(MonofluxError::AlreadyFulfilled);
    let b = Completion::Failed(MonofluxError::AlreadyFulfilled);
    assert_ne!(a, b);
    assert_ne!(a, Completion::Finished);
}

#[test]
fn completion_into_result_surfaces_the_error() {
    assert!(Completion::Finished.into_result().is_ok());

    let err = Completion::Failed(MonofluxError::HandleCancelled)
        .into_result()
        .unwrap_err();
    assert!(matches!(err, MonofluxError::HandleCancelled));
}
