// crates/dbus-text-xml/src/types.rs

//! Public, validated introspection tree.
//!
//! These types are what `decode` produces and `encode` consumes. Every name
//! and type in the tree has already passed validation, so encoding them
//! never needs to re-check anything.

use alloc::string::String;
use alloc::vec::Vec;
use dbus_text::{InterfaceName, MemberName, ObjectPath, Type};

/// An introspected object: its interfaces and its child objects.
///
/// Each child's `path` extends this object's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub path: ObjectPath,
    pub interfaces: Vec<Interface>,
    pub children: Vec<Object>,
}

impl Object {
    /// Creates an object with no interfaces and no children.
    pub fn new(path: ObjectPath) -> Self {
        Object {
            path,
            interfaces: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// An interface and its members. Duplicate member names are not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: InterfaceName,
    pub methods: Vec<Method>,
    pub signals: Vec<Signal>,
    pub properties: Vec<Property>,
}

impl Interface {
    pub fn new(name: InterfaceName) -> Self {
        Interface {
            name,
            methods: Vec::new(),
            signals: Vec::new(),
            properties: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: MemberName,
    pub in_params: Vec<Parameter>,
    pub out_params: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub name: MemberName,
    pub params: Vec<Parameter>,
}

/// A method or signal argument. The name is free-form and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: Type,
}

/// A property. The name is free-form and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub ty: Type,
    pub access: PropertyAccess,
}

/// The set of operations a property allows. Any combination is valid,
/// including neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PropertyAccess {
    pub read: bool,
    pub write: bool,
}

impl PropertyAccess {
    pub const NONE: PropertyAccess = PropertyAccess {
        read: false,
        write: false,
    };
    pub const READ: PropertyAccess = PropertyAccess {
        read: true,
        write: false,
    };
    pub const WRITE: PropertyAccess = PropertyAccess {
        read: false,
        write: true,
    };
    pub const READ_WRITE: PropertyAccess = PropertyAccess {
        read: true,
        write: true,
    };

    /// Maps an `access` attribute value to its access set.
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "" => Some(Self::NONE),
            "read" => Some(Self::READ),
            "write" => Some(Self::WRITE),
            "readwrite" => Some(Self::READ_WRITE),
            _ => None,
        }
    }

    /// The `access` attribute value: `read` and/or `write` concatenated.
    pub fn as_attribute(&self) -> &'static str {
        match (self.read, self.write) {
            (false, false) => "",
            (true, false) => "read",
            (false, true) => "write",
            (true, true) => "readwrite",
        }
    }
}
