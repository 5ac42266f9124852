//! Serializes the public `types` tree back into introspection XML.
//!
//! The tree is converted into the internal `model` structs, which `quick-xml`
//! then writes out after a hand-written `DOCTYPE` declaration.

mod interface;

use crate::error::IntrospectionError;
use crate::model::{self, DTD_PUBLIC_ID, DTD_SYSTEM_ID};
use crate::types::Object;
use alloc::string::{String, ToString};
use core::fmt::Write;
use dbus_text::ObjectPath;
use log::trace;
use serde::Serialize;

/// Serializes an `Object` tree into an introspection XML document.
///
/// The root `<node>` carries the absolute path; nested nodes carry their path
/// relative to the parent. Within a node, all interfaces are written before
/// all children, and argument directions are always explicit.
///
/// # Errors
/// Returns an `IntrospectionError` if the XML writer fails, which does not
/// happen for trees built from the public types.
pub fn encode(object: &Object) -> Result<String, IntrospectionError> {
    trace!("Encoding introspection document for {}", object.path);
    let node = build_node(object, None);

    let mut buffer = String::new();
    write!(
        &mut buffer,
        "<!DOCTYPE node PUBLIC \"{}\"\n \"{}\">\n",
        DTD_PUBLIC_ID, DTD_SYSTEM_ID
    )?;

    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut body);
    serializer.indent(' ', 2);

    node.serialize(serializer)?;
    escape_attribute_whitespace(&body, &mut buffer);
    Ok(buffer)
}

/// Copies serialized XML into `out`, replacing tab, newline and carriage
/// return inside attribute values with character references.
///
/// The writer leaves them literal, and a conforming reader would normalize
/// them to spaces. Values are always double-quoted and any `"`, `<` or `>`
/// inside them is already escaped, so quotes within a tag delimit values.
fn escape_attribute_whitespace(xml: &str, out: &mut String) {
    let mut in_tag = false;
    let mut in_value = false;
    for c in xml.chars() {
        match c {
            '\t' if in_value => out.push_str("&#9;"),
            '\n' if in_value => out.push_str("&#10;"),
            '\r' if in_value => out.push_str("&#13;"),
            '"' if in_tag => {
                in_value = !in_value;
                out.push(c);
            }
            '<' if !in_value => {
                in_tag = true;
                out.push(c);
            }
            '>' if !in_value => {
                in_tag = false;
                out.push(c);
            }
            _ => out.push(c),
        }
    }
}

fn build_node(object: &Object, parent: Option<&ObjectPath>) -> model::Node {
    let name = match parent {
        Some(parent) => relative_name(parent, &object.path),
        None => object.path.to_string(),
    };
    model::Node {
        name: Some(name),
        interface: object
            .interfaces
            .iter()
            .map(interface::build_interface)
            .collect(),
        node: object
            .children
            .iter()
            .map(|child| build_node(child, Some(&object.path)))
            .collect(),
    }
}

/// Drops the parent's path text, plus the separating `/` when the parent is
/// not the root, from the front of the child's path.
///
/// This is the inverse of `resolver::child_path`, which joins a segment onto
/// its parent the same way on decode. It is a plain character count: it does
/// not check that the child path actually starts with the parent path.
fn relative_name(parent: &ObjectPath, child: &ObjectPath) -> String {
    let prefix_len = if parent.is_root() {
        1
    } else {
        parent.as_str().chars().count() + 1
    };
    child.as_str().chars().skip(prefix_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> ObjectPath {
        ObjectPath::try_from(s).unwrap()
    }

    #[test]
    fn test_relative_name() {
        assert_eq!(relative_name(&path("/"), &path("/child")), "child");
        assert_eq!(relative_name(&path("/org/example"), &path("/org/example/a")), "a");
        assert_eq!(
            relative_name(&path("/org/example"), &path("/org/example/a/b")),
            "a/b"
        );
        // Not segment aware.
        assert_eq!(relative_name(&path("/abc"), &path("/xyz/child")), "child");
    }

    #[test]
    fn test_attribute_whitespace_is_escaped() {
        let mut out = String::new();
        escape_attribute_whitespace("<node name=\"a\tb\nc\rd\">\n  <node/>\n</node>", &mut out);
        assert_eq!(out, "<node name=\"a&#9;b&#10;c&#13;d\">\n  <node/>\n</node>");
    }

    #[test]
    fn test_encode_empty_object() {
        let xml = encode(&Object::new(path("/org/example"))).unwrap();
        assert!(xml.starts_with(
            "<!DOCTYPE node PUBLIC \"-//freedesktop//DTD D-BUS Object Introspection 1.0//EN\""
        ));
        assert!(xml.contains("http://www.freedesktop.org/standards/dbus/1.0/introspect.dtd"));
        assert!(xml.contains("<node name=\"/org/example\"/>"));
    }
}
