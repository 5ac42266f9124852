// crates/dbus-text/tests/address.rs

//! Integration tests for the bus address format.

use dbus_text::{Address, AddressError, decode_many, decode_one, encode_many, encode_one};
use std::collections::BTreeMap;

fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_parse_unix_address() {
    let _ = env_logger::builder().is_test(true).try_init();

    let address = decode_one("unix:path=/tmp/dbus-test,guid=1234").expect("valid address");
    assert_eq!(address.method(), "unix");
    assert_eq!(
        address.parameters(),
        &params(&[("path", "/tmp/dbus-test"), ("guid", "1234")])
    );

    // Parameters are formatted in key order.
    let encoded = encode_one(&address);
    assert_eq!(encoded, "unix:guid=1234,path=/tmp/dbus-test");
    assert_eq!(decode_one(&encoded), Ok(address));
}

#[test]
fn test_last_duplicate_key_wins() {
    let address = decode_one("unix:a=1,a=2").unwrap();
    assert_eq!(address.parameters(), &params(&[("a", "2")]));
}

#[test]
fn test_percent_decoding() {
    let address = decode_one("tcp:host=%68%6f%73%74").unwrap();
    assert_eq!(address.parameter("host"), Some("host"));
}

#[test]
fn test_method_with_colon_is_rejected() {
    assert!(decode_one("bad:method:k=v").is_err());
    assert!("bad:method:k=v".parse::<Address>().is_err());
}

#[test]
fn test_single_address_must_consume_everything() {
    assert!(decode_one("unix:path=/a;tcp:host=b").is_err());
    assert!(decode_one("unix:path=/a;").is_err());
    assert_eq!(
        decode_one("unix"),
        Err(AddressError::MissingMethodSeparator("unix".into()))
    );
}

#[test]
fn test_malformed_parameters() {
    assert_eq!(
        decode_one("unix:path"),
        Err(AddressError::MissingValue("path".into()))
    );
    assert_eq!(
        decode_one("unix:=v"),
        Err(AddressError::InvalidKey("".into()))
    );
    assert_eq!(
        decode_one("unix:path="),
        Err(AddressError::EmptyValue {
            key: "path".into()
        })
    );
    assert_eq!(
        decode_one("unix:path=a b"),
        Err(AddressError::InvalidCharacter {
            key: "path".into(),
            character: ' '
        })
    );
    assert_eq!(
        decode_one("unix:path=%4"),
        Err(AddressError::InvalidEscape {
            key: "path".into()
        })
    );
}

/// An empty method with no parameters is accepted by the grammar even though
/// the validating constructor refuses to build it.
#[test]
fn test_empty_address_parses_but_cannot_be_constructed() {
    let parsed = decode_one(":").unwrap();
    assert_eq!(parsed.method(), "");
    assert!(parsed.parameters().is_empty());
    assert_eq!(Address::new("", BTreeMap::new()), Err(AddressError::Empty));

    let method_only = decode_one("unix:").unwrap();
    assert_eq!(method_only.method(), "unix");
    assert!(method_only.parameters().is_empty());
}

#[test]
fn test_decode_many_with_trailing_separator() {
    let addresses = decode_many("unix:path=/a;tcp:host=localhost,port=1;").unwrap();
    assert_eq!(addresses.len(), 2);
    assert_eq!(addresses[0].method(), "unix");
    assert_eq!(addresses[1].parameter("port"), Some("1"));

    assert!(decode_many("unix:path=/a;bad").is_err());
}

#[test]
fn test_encode_many_round_trip() {
    let addresses = vec![
        Address::new("unix", params(&[("path", "/tmp/with space"), ("guid", "abc")])).unwrap(),
        Address::new("tcp", params(&[("host", "example.org"), ("port", "55556")])).unwrap(),
        Address::new("", params(&[("k", "x:y\u{e9}")])).unwrap(),
        Address::new("autolaunch", BTreeMap::new()).unwrap(),
    ];

    let encoded = encode_many(&addresses);
    assert_eq!(
        encoded,
        "unix:guid=abc,path=/tmp/with%20space;tcp:host=example.org,port=55556;:k=x%3Ay%E9;autolaunch:"
    );
    assert_eq!(decode_many(&encoded), Ok(addresses));
}

#[test]
fn test_encode_escapes_reserved_characters() {
    let address = Address::new("tcp", params(&[("bind", "*"), ("family", "ipv4")])).unwrap();
    assert_eq!(address.to_string(), "tcp:bind=*,family=ipv4");

    let decoded = decode_one("x:k=%3B%2C%3D").unwrap();
    assert_eq!(decoded.parameter("k"), Some(";,="));
    assert_eq!(encode_one(&decoded), "x:k=%3B%2C%3D");
}
