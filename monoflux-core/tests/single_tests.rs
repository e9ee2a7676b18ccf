use monoflux_core::{single, Fail, Just, MonofluxError};

#[tokio::test]
async fn resolves_to_the_emitted_value() {
    let value = single(Just::new(String::from("payload"))).await.unwrap();
    assert_eq!(value, "payload");
}

#[tokio::test]
async fn surfaces_the_failure_completion() {
    let err = single(Fail::<u8>::new(MonofluxError::invalid_address("bad")))
        .await
        .unwrap_err();
    assert!(matches!(err, MonofluxError::InvalidAddress { .. }));
}

#[tokio::test]
async fn works_with_non_copy_values() {
    let value = single(Just::new(vec![1u8, 2, 3])).await.unwrap();
    assert_eq!(value, vec![1, 2, 3]);
}
