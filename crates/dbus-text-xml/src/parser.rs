// crates/dbus-text-xml/src/parser.rs

use crate::error::IntrospectionError;
use crate::model;
use crate::resolver;
use crate::types::Object;
use dbus_text::ObjectPath;
use log::{debug, trace};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Parses an introspection XML document into an `Object` tree.
///
/// A root `<node>` without a `name` (or with an empty one) is placed at
/// `default_path`.
///
/// # Errors
/// Returns an `IntrospectionError` if the XML is malformed, the document
/// does not have exactly one top-level `<node>`, or any name, type or
/// access value anywhere in the tree is invalid. Nothing is returned for
/// a partially valid document.
pub fn decode(default_path: &ObjectPath, xml_content: &str) -> Result<Object, IntrospectionError> {
    trace!("Decoding introspection document (default path {})", default_path);

    // 1. Check the document shape; the deserializer ignores the root name.
    check_document(xml_content)?;

    // 2. Deserialize the raw XML string into our internal model.
    let root: model::Node = quick_xml::de::from_str(xml_content)?;

    // 3. Validate and convert it into the public tree.
    resolver::resolve_object(default_path, root)
        .inspect_err(|e| debug!("Rejecting introspection document: {}", e))
}

/// Walks the raw event stream to ensure well-formedness and a single
/// top-level `<node>` element.
fn check_document(xml_content: &str) -> Result<(), IntrospectionError> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut roots = 0usize;
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 0 {
                    check_root(e.name().as_ref(), &mut roots)?;
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 {
                    check_root(e.name().as_ref(), &mut roots)?;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(_) | Event::CData(_) if depth == 0 => {
                debug!("Text outside of the root element");
                return Err(IntrospectionError::InvalidRoot);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 || roots != 1 {
        return Err(IntrospectionError::InvalidRoot);
    }
    Ok(())
}

fn check_root(name: &[u8], roots: &mut usize) -> Result<(), IntrospectionError> {
    *roots += 1;
    if name != b"node" || *roots > 1 {
        return Err(IntrospectionError::InvalidRoot);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_document_shape() {
        assert!(check_document("<node/>").is_ok());
        assert!(check_document("<?xml version=\"1.0\"?>\n<node>\n  <node name=\"a\"/>\n</node>\n").is_ok());
        assert!(matches!(
            check_document(""),
            Err(IntrospectionError::InvalidRoot)
        ));
        assert!(matches!(
            check_document("<node/><node/>"),
            Err(IntrospectionError::InvalidRoot)
        ));
        assert!(matches!(
            check_document("<interface name=\"a.b\"/>"),
            Err(IntrospectionError::InvalidRoot)
        ));
        assert!(matches!(
            check_document("<node/>trailing"),
            Err(IntrospectionError::InvalidRoot)
        ));
        assert!(check_document("<node><interface></node>").is_err());
    }
}
