//! Internal `serde` data structures that map directly to the introspection XML.
//!
//! Attributes are kept as raw strings; validation happens in the resolver.
//! These structs are shared by the parser and the builder and are not
//! intended for direct public use.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub mod interface;

pub use interface::Interface;

/// Public identifier of the introspection DTD.
pub const DTD_PUBLIC_ID: &str = "-//freedesktop//DTD D-BUS Object Introspection 1.0//EN";

/// System identifier of the introspection DTD.
pub const DTD_SYSTEM_ID: &str = "http://www.freedesktop.org/standards/dbus/1.0/introspect.dtd";

/// Represents a `<node>` element, either the document root or a child object.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename = "node")]
pub struct Node {
    /// Absolute path on the root, a relative path on children.
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "interface", default, skip_serializing_if = "Vec::is_empty")]
    pub interface: Vec<Interface>,

    #[serde(rename = "node", default, skip_serializing_if = "Vec::is_empty")]
    pub node: Vec<Node>,
}
