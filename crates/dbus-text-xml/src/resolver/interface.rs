// crates/dbus-text-xml/src/resolver/interface.rs

//! Resolution of `<interface>` elements and their members.

use crate::error::IntrospectionError;
use crate::model::interface as model;
use crate::types::{Interface, Method, Parameter, Property, PropertyAccess, Signal};
use alloc::vec::Vec;
use dbus_text::{InterfaceName, MemberName, Signature, Type};
use log::{debug, trace};

pub(super) fn resolve_interface(
    interface: model::Interface,
) -> Result<Interface, IntrospectionError> {
    let name = InterfaceName::try_from(interface.name.unwrap_or_default())?;
    trace!("Resolving interface {}", name);

    let methods = interface
        .method
        .into_iter()
        .map(resolve_method)
        .collect::<Result<Vec<_>, _>>()?;
    let signals = interface
        .signal
        .into_iter()
        .map(resolve_signal)
        .collect::<Result<Vec<_>, _>>()?;
    let properties = interface
        .property
        .into_iter()
        .map(resolve_property)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Interface {
        name,
        methods,
        signals,
        properties,
    })
}

/// Arguments without a direction are inputs.
fn resolve_method(method: model::Method) -> Result<Method, IntrospectionError> {
    let name = MemberName::try_from(method.name.unwrap_or_default())?;
    let mut in_params = Vec::new();
    let mut out_params = Vec::new();
    for arg in method.arg {
        match arg.direction.as_deref() {
            None | Some("") | Some("in") => in_params.push(resolve_parameter(arg)?),
            Some("out") => out_params.push(resolve_parameter(arg)?),
            Some(other) => debug!("Skipping argument of {} with direction {:?}", name, other),
        }
    }
    Ok(Method {
        name,
        in_params,
        out_params,
    })
}

/// Arguments without a direction are outputs.
fn resolve_signal(signal: model::Signal) -> Result<Signal, IntrospectionError> {
    let name = MemberName::try_from(signal.name.unwrap_or_default())?;
    let mut params = Vec::new();
    for arg in signal.arg {
        match arg.direction.as_deref() {
            None | Some("") | Some("out") => params.push(resolve_parameter(arg)?),
            Some(other) => debug!("Skipping argument of {} with direction {:?}", name, other),
        }
    }
    Ok(Signal { name, params })
}

fn resolve_parameter(arg: model::Arg) -> Result<Parameter, IntrospectionError> {
    Ok(Parameter {
        name: arg.name.unwrap_or_default(),
        ty: resolve_single_type(arg.ty.as_deref())?,
    })
}

fn resolve_property(property: model::Property) -> Result<Property, IntrospectionError> {
    let ty = resolve_single_type(property.ty.as_deref())?;
    let access_value = property.access.unwrap_or_default();
    let access = PropertyAccess::from_attribute(&access_value).ok_or_else(|| {
        debug!("Property access {:?} is not recognised", access_value);
        IntrospectionError::InvalidAccess(access_value.clone())
    })?;
    Ok(Property {
        name: property.name.unwrap_or_default(),
        ty,
        access,
    })
}

/// A `type` attribute must hold exactly one complete type. Absent counts as empty.
fn resolve_single_type(signature: Option<&str>) -> Result<Type, IntrospectionError> {
    let signature = Signature::try_from(signature.unwrap_or(""))?;
    Ok(signature.single()?.clone())
}
