// crates/dbus-text/src/signature.rs

//! D-Bus type signatures.
//!
//! A signature is a string of type codes describing zero or more complete
//! types. Parsing produces a `Vec<Type>`; rendering a `Type` back with
//! `Display` yields its type code string.

use crate::names::NameError;
use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// Maximum length in bytes of a signature.
pub const MAX_SIGNATURE_LENGTH: usize = 255;

/// Maximum nesting depth of arrays, and separately of structures.
pub const MAX_NESTING_DEPTH: u8 = 32;

/// A single complete D-Bus type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Byte,
    Boolean,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Double,
    UnixFd,
    String,
    ObjectPath,
    Signature,
    Variant,
    Array(Box<Type>),
    /// `a{KV}`; the key is always a basic type.
    Dictionary(Box<Type>, Box<Type>),
    Structure(Vec<Type>),
}

impl Type {
    /// Returns `true` for the fixed and string-like basic types that may key a dictionary.
    pub fn is_basic(&self) -> bool {
        !matches!(
            self,
            Type::Variant | Type::Array(_) | Type::Dictionary(_, _) | Type::Structure(_)
        )
    }

    fn from_basic_code(code: u8) -> Option<Type> {
        let ty = match code {
            b'y' => Type::Byte,
            b'b' => Type::Boolean,
            b'n' => Type::Int16,
            b'q' => Type::UInt16,
            b'i' => Type::Int32,
            b'u' => Type::UInt32,
            b'x' => Type::Int64,
            b't' => Type::UInt64,
            b'd' => Type::Double,
            b'h' => Type::UnixFd,
            b's' => Type::String,
            b'o' => Type::ObjectPath,
            b'g' => Type::Signature,
            _ => return None,
        };
        Some(ty)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Byte => f.write_str("y"),
            Type::Boolean => f.write_str("b"),
            Type::Int16 => f.write_str("n"),
            Type::UInt16 => f.write_str("q"),
            Type::Int32 => f.write_str("i"),
            Type::UInt32 => f.write_str("u"),
            Type::Int64 => f.write_str("x"),
            Type::UInt64 => f.write_str("t"),
            Type::Double => f.write_str("d"),
            Type::UnixFd => f.write_str("h"),
            Type::String => f.write_str("s"),
            Type::ObjectPath => f.write_str("o"),
            Type::Signature => f.write_str("g"),
            Type::Variant => f.write_str("v"),
            Type::Array(item) => write!(f, "a{}", item),
            Type::Dictionary(key, value) => write!(f, "a{{{}{}}}", key, value),
            Type::Structure(fields) => {
                f.write_str("(")?;
                for field in fields {
                    write!(f, "{}", field)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl FromStr for Type {
    type Err = NameError;

    /// Parses a signature that must contain exactly one complete type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signature::try_from(s)?.single().cloned()
    }
}

/// A parsed, validated signature holding zero or more complete types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Signature {
    types: Vec<Type>,
}

impl Signature {
    /// Builds a signature from already-constructed types.
    pub fn new(types: Vec<Type>) -> Self {
        Signature { types }
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    /// Returns the only type of this signature, failing when it holds zero
    /// or more than one complete type.
    pub fn single(&self) -> Result<&Type, NameError> {
        match self.types.as_slice() {
            [only] => Ok(only),
            _ => Err(NameError::NotSingleType(self.to_string())),
        }
    }
}

impl From<Type> for Signature {
    fn from(ty: Type) -> Self {
        Signature { types: alloc::vec![ty] }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ty in &self.types {
            write!(f, "{}", ty)?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Signature {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let invalid = || NameError::Signature(value.to_string());
        if value.len() > MAX_SIGNATURE_LENGTH {
            return Err(invalid());
        }
        let mut parser = SignatureParser {
            bytes: value.as_bytes(),
            pos: 0,
        };
        let mut types = Vec::new();
        while parser.pos < parser.bytes.len() {
            types.push(parser.parse_type(0, 0).ok_or_else(invalid)?);
        }
        Ok(Signature { types })
    }
}

impl FromStr for Signature {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<Signature> for String {
    fn from(value: Signature) -> Self {
        value.to_string()
    }
}

struct SignatureParser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl SignatureParser<'_> {
    fn next(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Parses one complete type. Dictionary entries count as structure nesting.
    fn parse_type(&mut self, arrays: u8, structs: u8) -> Option<Type> {
        let code = self.next()?;
        if let Some(basic) = Type::from_basic_code(code) {
            return Some(basic);
        }
        match code {
            b'v' => Some(Type::Variant),
            b'a' => {
                let arrays = arrays + 1;
                if arrays > MAX_NESTING_DEPTH {
                    return None;
                }
                if self.peek() == Some(b'{') {
                    self.pos += 1;
                    let structs = structs + 1;
                    if structs > MAX_NESTING_DEPTH {
                        return None;
                    }
                    let key = Type::from_basic_code(self.next()?)?;
                    let value = self.parse_type(arrays, structs)?;
                    if self.next()? != b'}' {
                        return None;
                    }
                    Some(Type::Dictionary(Box::new(key), Box::new(value)))
                } else {
                    Some(Type::Array(Box::new(self.parse_type(arrays, structs)?)))
                }
            }
            b'(' => {
                let structs = structs + 1;
                if structs > MAX_NESTING_DEPTH {
                    return None;
                }
                let mut fields = Vec::new();
                while self.peek()? != b')' {
                    fields.push(self.parse_type(arrays, structs)?);
                }
                self.pos += 1;
                if fields.is_empty() {
                    return None;
                }
                Some(Type::Structure(fields))
            }
            _ => None,
        }
    }
}
