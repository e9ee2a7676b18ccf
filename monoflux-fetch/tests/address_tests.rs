use monoflux_core::MonofluxError;
use monoflux_fetch::Address;

#[test]
fn parses_scheme_host_and_path() {
    let address = Address::parse("https://api.example.com/v1/posts/7").unwrap();

    assert_eq!(address.scheme(), "https");
    assert_eq!(address.host(), "api.example.com");
    assert_eq!(address.path(), "/v1/posts/7");
}

#[test]
fn path_is_optional() {
    let address: Address = "http://localhost:8080".parse().unwrap();

    assert_eq!(address.host(), "localhost:8080");
    assert_eq!(address.path(), "");
}

#[test]
fn display_round_trips_the_raw_form() {
    let raw = "https://example.com/quote";
    let address: Address = raw.parse().unwrap();
    assert_eq!(address.to_string(), raw);
}

#[test]
fn rejects_malformed_addresses() {
    let malformed = [
        "",
        "no separator",
        "://missing-scheme.com",
        "1http://leading-digit.com",
        "https://",
        "https:// spaced.com",
        "https://host.com/white space",
        "htt ps://host.com",
    ];

    for raw in malformed {
        let err = Address::parse(raw).unwrap_err();
        match err {
            MonofluxError::InvalidAddress { address } => assert_eq!(address, raw),
            other => panic!("expected InvalidAddress for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn scheme_may_contain_plus_dash_and_dot() {
    assert!(Address::parse("git+ssh://example.com/repo").is_ok());
    assert!(Address::parse("x-custom.v1://example.com").is_ok());
}
