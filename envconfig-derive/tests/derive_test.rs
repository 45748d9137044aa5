//! Expansion tests for `#[derive(Envconfig)]`

use std::collections::HashMap;
use std::net::SocketAddr;

use envconfig::{Envconfig, FieldError, Processor, Specification};

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Debug, Default, Envconfig)]
struct Tagged {
    #[envconfig(key = "alpha")]
    pub alpha: String,

    /// Doc comments and other attributes are left alone
    #[allow(dead_code)]
    pub skipped: u32,

    #[envconfig(default = "ignored without a key")]
    pub no_key: String,

    #[envconfig(key = "type", default = 3)]
    pub r#type: u8,
}

#[derive(Debug, Default, Envconfig)]
struct Limits<T: Default> {
    #[envconfig(key = "max")]
    pub max: u64,

    pub extra: T,
}

#[derive(Debug, Default, Envconfig)]
struct Empty {}

#[derive(Debug, Envconfig)]
struct Listener {
    #[envconfig(key = "listen_port")]
    pub port: u16,

    // No `Default` here, and the struct is never nested
    pub bound: SocketAddr,
}

#[test]
fn test_only_keyed_fields_are_described() {
    let mut config = Tagged::default();
    let names: Vec<String> = config
        .fields()
        .iter()
        .map(|field| field.name().to_string())
        .collect();

    assert_eq!(names, ["alpha", "type"]);
}

#[test]
fn test_raw_identifier_and_numeric_default() {
    let vars = vars(&[("T_ALPHA", "a"), ("T_NO_KEY", "x"), ("T_SKIPPED", "9")]);
    let processor = Processor::with_lookup(|key| vars.get(key).cloned());

    let mut config = Tagged::default();
    processor.process("t", &mut config).unwrap();

    assert_eq!(config.alpha, "a");
    assert_eq!(config.r#type, 3);
    assert_eq!(config.no_key, "");
    assert_eq!(config.skipped, 0);
}

#[test]
fn test_parse_error_uses_key_suffix() {
    let vars = vars(&[("T_TYPE", "many")]);
    let processor = Processor::with_lookup(|key| vars.get(key).cloned());

    let mut config = Tagged::default();
    let err = processor.process("t", &mut config).unwrap_err();

    assert_eq!(err.errors(), &[FieldError::parse::<u8>("T_TYPE", "type", "many")]);
}

#[test]
fn test_top_level_target_without_default() {
    let vars = vars(&[("A_LISTEN_PORT", "8443")]);
    let processor = Processor::with_lookup(|key| vars.get(key).cloned());

    let bound: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let mut listener = Listener { port: 0, bound };
    processor.process("a", &mut listener).unwrap();

    assert_eq!(listener.port, 8443);
    assert_eq!(listener.bound, bound);
}

#[test]
fn test_key_suffix_differs_from_field_name() {
    let vars = vars(&[("A_LISTEN_PORT", "x")]);
    let processor = Processor::with_lookup(|key| vars.get(key).cloned());

    let bound: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let mut listener = Listener { port: 7, bound };
    let err = processor.process("a", &mut listener).unwrap_err();

    assert_eq!(
        err.errors(),
        &[FieldError::parse::<u16>("A_LISTEN_PORT", "listen_port", "x")]
    );
    assert_eq!(listener.port, 7);
}

#[test]
fn test_generic_struct() {
    let vars = vars(&[("L_MAX", "0xff")]);
    let processor = Processor::with_lookup(|key| vars.get(key).cloned());

    let mut limits: Limits<Vec<String>> = Limits::default();
    processor.process("l", &mut limits).unwrap();

    assert_eq!(limits.max, 255);
    assert!(limits.extra.is_empty());
}

#[test]
fn test_struct_without_fields() {
    let processor = Processor::with_lookup(|_| None);
    let mut empty = Empty::default();

    assert!(empty.fields().is_empty());
    assert!(processor.process("e", &mut empty).is_ok());
}
