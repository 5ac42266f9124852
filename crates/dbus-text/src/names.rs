// crates/dbus-text/src/names.rs

//! Validated D-Bus identifiers.
//!
//! Each identifier is a newtype over `String` that can only be built through
//! `TryFrom<&str>` (or `FromStr`), so holding one proves the text obeys the
//! D-Bus naming grammar.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// Maximum length in bytes of an interface or member name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Error returned when a string is not a valid identifier of the requested kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The string is not a valid absolute object path.
    ObjectPath(String),
    /// The string is not a valid interface name.
    InterfaceName(String),
    /// The string is not a valid member name.
    MemberName(String),
    /// The string is not a well-formed type signature.
    Signature(String),
    /// The signature is well-formed but does not hold exactly one complete type.
    NotSingleType(String),
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::ObjectPath(s) => write!(f, "Invalid object path: {:?}", s),
            NameError::InterfaceName(s) => write!(f, "Invalid interface name: {:?}", s),
            NameError::MemberName(s) => write!(f, "Invalid member name: {:?}", s),
            NameError::Signature(s) => write!(f, "Invalid signature: {:?}", s),
            NameError::NotSingleType(s) => {
                write!(f, "Signature {:?} does not denote exactly one complete type", s)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NameError {}

/// `[A-Za-z0-9_]`
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => chars.all(is_name_char),
        _ => false,
    }
}

/// Generates the shared newtype plumbing for a validated identifier.
macro_rules! identifier {
    ($name:ident, $validate:ident, $err:ident) => {
        impl $name {
            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<&str> for $name {
            type Error = NameError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                if $validate(value) {
                    Ok($name(value.to_string()))
                } else {
                    Err(NameError::$err(value.to_string()))
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = NameError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if $validate(&value) {
                    Ok($name(value))
                } else {
                    Err(NameError::$err(value))
                }
            }
        }

        impl FromStr for $name {
            type Err = NameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// An absolute object path such as `/org/freedesktop/DBus`.
///
/// The root path `/` is valid. Every other path is a sequence of non-empty
/// `/`-prefixed segments made of `[A-Za-z0-9_]`, with no trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectPath(String);

impl ObjectPath {
    /// The root object path, `/`.
    pub fn root() -> Self {
        ObjectPath("/".to_string())
    }

    /// Returns `true` for the root path `/`.
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

fn is_object_path(s: &str) -> bool {
    if s == "/" {
        return true;
    }
    match s.strip_prefix('/') {
        Some(rest) => rest
            .split('/')
            .all(|segment| !segment.is_empty() && segment.chars().all(is_name_char)),
        None => false,
    }
}

identifier!(ObjectPath, is_object_path, ObjectPath);

/// A dotted interface name such as `org.freedesktop.DBus.Properties`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InterfaceName(String);

fn is_interface_name(s: &str) -> bool {
    if s.len() > MAX_NAME_LENGTH {
        return false;
    }
    let mut elements = 0usize;
    for element in s.split('.') {
        if !is_identifier(element) {
            return false;
        }
        elements += 1;
    }
    elements >= 2
}

identifier!(InterfaceName, is_interface_name, InterfaceName);

/// A method, signal or property member name such as `GetAll`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberName(String);

fn is_member_name(s: &str) -> bool {
    s.len() <= MAX_NAME_LENGTH && is_identifier(s)
}

identifier!(MemberName, is_member_name, MemberName);
