// crates/dbus-text-xml/src/builder/interface.rs

//! Builds `<interface>` model structs from the public types.

use crate::model::interface as model;
use crate::types::{Interface, Method, Parameter, Property, Signal};
use alloc::string::ToString;

pub(super) fn build_interface(interface: &Interface) -> model::Interface {
    model::Interface {
        name: Some(interface.name.to_string()),
        method: interface.methods.iter().map(build_method).collect(),
        signal: interface.signals.iter().map(build_signal).collect(),
        property: interface.properties.iter().map(build_property).collect(),
    }
}

/// Inputs first, then outputs.
fn build_method(method: &Method) -> model::Method {
    let inputs = method.in_params.iter().map(|p| build_arg(p, "in"));
    let outputs = method.out_params.iter().map(|p| build_arg(p, "out"));
    model::Method {
        name: Some(method.name.to_string()),
        arg: inputs.chain(outputs).collect(),
    }
}

fn build_signal(signal: &Signal) -> model::Signal {
    model::Signal {
        name: Some(signal.name.to_string()),
        arg: signal.params.iter().map(|p| build_arg(p, "out")).collect(),
    }
}

fn build_arg(param: &Parameter, direction: &str) -> model::Arg {
    model::Arg {
        name: Some(param.name.clone()),
        ty: Some(param.ty.to_string()),
        direction: Some(direction.to_string()),
    }
}

fn build_property(property: &Property) -> model::Property {
    model::Property {
        name: Some(property.name.clone()),
        ty: Some(property.ty.to_string()),
        access: Some(property.access.as_attribute().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PropertyAccess;
    use alloc::vec;
    use dbus_text::{InterfaceName, MemberName, Type};

    #[test]
    fn test_method_args_are_ordered_and_directed() {
        let method = Method {
            name: MemberName::try_from("Echo").unwrap(),
            in_params: vec![Parameter {
                name: "text".into(),
                ty: Type::String,
            }],
            out_params: vec![Parameter {
                name: "".into(),
                ty: Type::UInt32,
            }],
        };
        let model = build_method(&method);
        let directions: vec::Vec<_> = model
            .arg
            .iter()
            .map(|a| a.direction.as_deref().unwrap())
            .collect();
        assert_eq!(directions, ["in", "out"]);
        assert_eq!(model.arg[1].ty.as_deref(), Some("u"));
        assert_eq!(model.arg[1].name.as_deref(), Some(""));
    }

    #[test]
    fn test_signal_and_property() {
        let mut interface = Interface::new(InterfaceName::try_from("org.example.I").unwrap());
        interface.signals.push(Signal {
            name: MemberName::try_from("Changed").unwrap(),
            params: vec![Parameter {
                name: "v".into(),
                ty: Type::Variant,
            }],
        });
        interface.properties.push(Property {
            name: "Count".into(),
            ty: Type::UInt32,
            access: PropertyAccess::WRITE,
        });
        let model = build_interface(&interface);
        assert_eq!(model.signal[0].arg[0].direction.as_deref(), Some("out"));
        assert_eq!(model.property[0].access.as_deref(), Some("write"));
    }
}
