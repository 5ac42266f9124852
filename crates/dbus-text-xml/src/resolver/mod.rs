// crates/dbus-text-xml/src/resolver/mod.rs

//! Resolves the deserialized `model` into the validated public `types`.
//!
//! Every attribute is checked here. The first failure aborts the whole
//! resolution; there is no partial result.

use crate::error::IntrospectionError;
use crate::model;
use crate::types::Object;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use dbus_text::ObjectPath;
use log::debug;

mod interface;

/// Resolves the root `<node>`.
///
/// A missing or empty `name` attribute selects `default_path`; otherwise the
/// attribute must be an absolute object path.
pub(crate) fn resolve_object(
    default_path: &ObjectPath,
    root: model::Node,
) -> Result<Object, IntrospectionError> {
    let path = match root.name.as_deref() {
        None | Some("") => default_path.clone(),
        Some(name) => ObjectPath::try_from(name)?,
    };
    resolve_node(path, root)
}

fn resolve_node(path: ObjectPath, node: model::Node) -> Result<Object, IntrospectionError> {
    let interfaces = node
        .interface
        .into_iter()
        .map(interface::resolve_interface)
        .collect::<Result<Vec<_>, _>>()?;

    let children = node
        .node
        .into_iter()
        .map(|child| resolve_child(&path, child))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Object {
        path,
        interfaces,
        children,
    })
}

/// Resolves a nested `<node>`, whose `name` is required and relative to `parent`.
fn resolve_child(parent: &ObjectPath, child: model::Node) -> Result<Object, IntrospectionError> {
    let segment = match child.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            debug!("Child of {} has no name", parent);
            return Err(IntrospectionError::MissingAttribute {
                element: "node",
                attribute: "name",
            });
        }
    };
    let path = ObjectPath::try_from(child_path(parent, segment))?;
    resolve_node(path, child)
}

/// Joins a relative segment onto its parent's absolute path.
pub(crate) fn child_path(parent: &ObjectPath, segment: &str) -> String {
    if parent.is_root() {
        format!("/{}", segment)
    } else {
        format!("{}/{}", parent, segment)
    }
}
