// crates/dbus-text/src/address.rs

//! Bus addresses: parsing and formatting of `method:key=value,...;...` strings.
//!
//! A single address is a transport method followed by `:` and a comma
//! separated list of `key=value` parameters. Several addresses are joined
//! with `;`. Values outside a small unescaped character set are written as
//! `%XX` escapes of their byte value.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Write};
use core::str::FromStr;
use log::{debug, trace};

/// Errors from decoding an address string or from the validating constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The address has no `:` separating the method from its parameters.
    MissingMethodSeparator(String),
    /// The method contains `:` or `;`.
    InvalidMethod(String),
    /// A parameter has no `=` separating key from value.
    MissingValue(String),
    /// A key is empty or contains a reserved character.
    InvalidKey(String),
    /// A parameter value is empty.
    EmptyValue { key: String },
    /// A `%` was not followed by two hex digits.
    InvalidEscape { key: String },
    /// A value contains a character that must have been escaped, or that has no single-byte escape.
    InvalidCharacter { key: String, character: char },
    /// An address with an empty method and no parameters.
    Empty,
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::MissingMethodSeparator(s) => {
                write!(f, "Address {:?} has no ':' after the method", s)
            }
            AddressError::InvalidMethod(m) => write!(f, "Invalid address method: {:?}", m),
            AddressError::MissingValue(p) => write!(f, "Address parameter {:?} has no '='", p),
            AddressError::InvalidKey(k) => write!(f, "Invalid address parameter key: {:?}", k),
            AddressError::EmptyValue { key } => {
                write!(f, "Address parameter {:?} has an empty value", key)
            }
            AddressError::InvalidEscape { key } => {
                write!(f, "Malformed percent-escape in value of {:?}", key)
            }
            AddressError::InvalidCharacter { key, character } => {
                write!(f, "Character {:?} not allowed in value of {:?}", character, key)
            }
            AddressError::Empty => write!(f, "Address has neither a method nor parameters"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddressError {}

/// A bus address: a transport method plus its parameters.
///
/// Parameters are kept sorted by key, which is also the order in which they
/// are formatted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    method: String,
    parameters: BTreeMap<String, String>,
}

impl Address {
    /// Builds an address, validating every component.
    ///
    /// The method may not contain `:` or `;`. Keys must be non-empty and free
    /// of `;`, `,`, `=` and `:`. Values must be non-empty, free of `;`, `,`
    /// and `=`, and limited to characters that fit a single escaped byte.
    /// An empty method with no parameters is rejected.
    pub fn new(
        method: impl Into<String>,
        parameters: BTreeMap<String, String>,
    ) -> Result<Self, AddressError> {
        let method = method.into();
        if !is_valid_method(&method) {
            return Err(AddressError::InvalidMethod(method));
        }
        for (key, value) in &parameters {
            if !is_valid_key(key) {
                return Err(AddressError::InvalidKey(key.clone()));
            }
            if value.is_empty() {
                return Err(AddressError::EmptyValue { key: key.clone() });
            }
            if let Some(character) = value
                .chars()
                .find(|&c| matches!(c, ';' | ',' | '=') || u8::try_from(c).is_err())
            {
                return Err(AddressError::InvalidCharacter {
                    key: key.clone(),
                    character,
                });
            }
        }
        if method.is_empty() && parameters.is_empty() {
            return Err(AddressError::Empty);
        }
        Ok(Address { method, parameters })
    }

    /// The transport method, e.g. `unix` or `tcp`.
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    /// Looks up a single parameter value.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }
}

fn is_valid_method(method: &str) -> bool {
    !method.contains([':', ';'])
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains([';', ',', '=', ':'])
}

/// Characters written into a value without escaping.
fn is_unescaped(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '\\' | '*' | '.')
}

/// Parses a string holding exactly one address.
///
/// Repeated keys are allowed; the last occurrence wins. The result does not
/// go through [`Address::new`], so `":"` parses as an address with an empty
/// method and no parameters.
pub fn decode_one(text: &str) -> Result<Address, AddressError> {
    trace!("Decoding address {:?}", text);
    let (method, params) = text
        .split_once(':')
        .ok_or_else(|| AddressError::MissingMethodSeparator(text.to_string()))?;
    if !is_valid_method(method) {
        debug!("Rejecting address method {:?}", method);
        return Err(AddressError::InvalidMethod(method.to_string()));
    }

    let mut parameters = BTreeMap::new();
    if !params.is_empty() {
        for param in params.split(',') {
            let (key, raw_value) = param
                .split_once('=')
                .ok_or_else(|| AddressError::MissingValue(param.to_string()))?;
            if !is_valid_key(key) {
                debug!("Rejecting address key {:?}", key);
                return Err(AddressError::InvalidKey(key.to_string()));
            }
            let value = decode_value(key, raw_value)?;
            parameters.insert(key.to_string(), value);
        }
    }

    Ok(Address {
        method: method.to_string(),
        parameters,
    })
}

/// Parses a `;`-separated list of addresses. A single trailing `;` is
/// allowed and the empty string yields an empty list.
pub fn decode_many(text: &str) -> Result<Vec<Address>, AddressError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let body = text.strip_suffix(';').unwrap_or(text);
    body.split(';').map(decode_one).collect()
}

/// Decodes the raw text of a value, resolving `%XX` escapes to single bytes.
fn decode_value(key: &str, raw: &str) -> Result<String, AddressError> {
    if raw.is_empty() {
        return Err(AddressError::EmptyValue {
            key: key.to_string(),
        });
    }
    let invalid = || AddressError::InvalidEscape {
        key: key.to_string(),
    };
    let mut value = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(c) = rest.chars().next() {
        if c == '%' {
            // Short or split-character escapes fail here; non-hex digits fail in `hex`.
            let digits = rest.get(1..3).ok_or_else(invalid)?;
            let mut byte = [0u8; 1];
            hex::decode_to_slice(digits, &mut byte).map_err(|_| invalid())?;
            value.push(char::from(byte[0]));
            rest = &rest[3..];
        } else if is_unescaped(c) {
            value.push(c);
            rest = &rest[c.len_utf8()..];
        } else {
            debug!("Unescaped {:?} in value of address key {:?}", c, key);
            return Err(AddressError::InvalidCharacter {
                key: key.to_string(),
                character: c,
            });
        }
    }
    Ok(value)
}

fn encode_value<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    for c in value.chars() {
        if is_unescaped(c) {
            out.write_char(c)?;
        } else {
            write!(out, "%{:02X}", u32::from(c))?;
        }
    }
    Ok(())
}

/// Formats a single address. Equivalent to `address.to_string()`.
pub fn encode_one(address: &Address) -> String {
    address.to_string()
}

/// Formats a list of addresses joined by `;`.
pub fn encode_many(addresses: &[Address]) -> String {
    addresses
        .iter()
        .map(encode_one)
        .collect::<Vec<_>>()
        .join(";")
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.method)?;
        f.write_char(':')?;
        for (i, (key, value)) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            f.write_str(key)?;
            f.write_char('=')?;
            encode_value(f, value)?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_one(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_constructor_validation() {
        assert!(Address::new("unix", params(&[("path", "/tmp/x")])).is_ok());
        assert!(Address::new("", params(&[("k", "v")])).is_ok());
        assert!(Address::new("unix", BTreeMap::new()).is_ok());

        assert_eq!(Address::new("", BTreeMap::new()), Err(AddressError::Empty));
        assert_eq!(
            Address::new("un:ix", BTreeMap::new()),
            Err(AddressError::InvalidMethod("un:ix".into()))
        );
        assert_eq!(
            Address::new("unix", params(&[("a=b", "v")])),
            Err(AddressError::InvalidKey("a=b".into()))
        );
        assert_eq!(
            Address::new("unix", params(&[("", "v")])),
            Err(AddressError::InvalidKey("".into()))
        );
        assert_eq!(
            Address::new("unix", params(&[("k", "")])),
            Err(AddressError::EmptyValue { key: "k".into() })
        );
        assert_eq!(
            Address::new("unix", params(&[("k", "a,b")])),
            Err(AddressError::InvalidCharacter {
                key: "k".into(),
                character: ','
            })
        );
        assert!(matches!(
            Address::new("unix", params(&[("k", "€")])),
            Err(AddressError::InvalidCharacter { character: '€', .. })
        ));
    }

    #[test]
    fn test_decode_value_escapes() {
        assert_eq!(decode_value("k", "%68%6f%73%74").unwrap(), "host");
        assert_eq!(decode_value("k", "a%2Cb").unwrap(), "a,b");
        assert_eq!(decode_value("k", "%e9").unwrap(), "\u{e9}");
        assert!(decode_value("k", "%6").is_err());
        assert!(decode_value("k", "%zz").is_err());
        assert!(decode_value("k", "%g1").is_err());
        assert!(decode_value("k", "%\u{e9}").is_err());
        assert!(decode_value("k", "%4\u{e9}").is_err());
        assert_eq!(decode_value("k", "a%41b").unwrap(), "aAb");
        assert!(decode_value("k", "a b").is_err());
    }

    #[test]
    fn test_encode_value_escapes() {
        let mut out = String::new();
        encode_value(&mut out, "a b,c=\u{e9}/x").unwrap();
        assert_eq!(out, "a%20b%2Cc%3D%E9/x");
    }

    #[test]
    fn test_decode_many_edges() {
        assert!(decode_many("").unwrap().is_empty());
        assert_eq!(decode_many("unix:a=1;").unwrap().len(), 1);
        assert!(decode_many(";").is_err());
        assert!(decode_many("unix:a=1;;").is_err());
        assert!(decode_many("unix:a=1,").is_err());
    }
}
