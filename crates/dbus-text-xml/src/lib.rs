// src/lib.rs

#![no_std]
#![doc = "Parses and generates D-Bus object introspection XML documents."]
#![doc = ""]
#![doc = "This `no_std + alloc` library converts between introspection XML and a"]
#![doc = "validated tree of objects, interfaces, methods, signals and properties."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `decode`: Parsing a document, placing an unnamed root at a default path."]
#![doc = "- `encode`: Serializing a tree back into a document with the standard DOCTYPE."]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// --- Crate Modules ---

mod builder;
mod error;
mod model;
mod parser;
mod resolver;
mod types;

// --- Public API Re-exports ---

pub use builder::encode;
pub use error::IntrospectionError;
pub use parser::decode;
pub use types::{Interface, Method, Object, Parameter, Property, PropertyAccess, Signal};
