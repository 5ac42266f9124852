// crates/dbus-text-xml/src/model/interface.rs

//! Contains model structs for `<interface>` and its members.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Represents `<interface name="...">`.
///
/// Unknown children such as `<annotation>` are skipped on input.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Interface {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "method", default, skip_serializing_if = "Vec::is_empty")]
    pub method: Vec<Method>,

    #[serde(rename = "signal", default, skip_serializing_if = "Vec::is_empty")]
    pub signal: Vec<Signal>,

    #[serde(rename = "property", default, skip_serializing_if = "Vec::is_empty")]
    pub property: Vec<Property>,
}

/// Represents `<method name="...">`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Method {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "arg", default, skip_serializing_if = "Vec::is_empty")]
    pub arg: Vec<Arg>,
}

/// Represents `<signal name="...">`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Signal {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "arg", default, skip_serializing_if = "Vec::is_empty")]
    pub arg: Vec<Arg>,
}

/// Represents `<arg name="..." type="..." direction="..."/>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Arg {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,

    /// `in` or `out`. The default when absent differs between methods and signals.
    #[serde(rename = "@direction", default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

/// Represents `<property name="..." type="..." access="..."/>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Property {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,

    #[serde(rename = "@access", default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
}
