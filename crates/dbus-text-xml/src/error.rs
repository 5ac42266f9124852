// crates/dbus-text-xml/src/error.rs

use alloc::fmt;
use alloc::string::String;
use dbus_text::NameError;
use quick_xml::Error as XmlError;
use quick_xml::errors::serialize::DeError;
use quick_xml::errors::serialize::SeError;

/// Errors that can occur during introspection parsing or serialization.
///
/// Decoding is all-or-nothing: the first error anywhere in the document
/// aborts it and no partial object is returned.
#[derive(Debug)]
pub enum IntrospectionError {
    /// The document is not well-formed XML.
    XmlReading(XmlError),

    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// An error occurred during string formatting.
    FmtError(fmt::Error),

    /// The document does not have exactly one top-level `<node>` element.
    InvalidRoot,

    /// A required attribute was missing or empty.
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// An object path, interface name, member name or type signature was rejected.
    InvalidName(NameError),

    /// A property's `access` attribute was not one of `""`, `read`, `write`, `readwrite`.
    InvalidAccess(String),
}

impl From<XmlError> for IntrospectionError {
    fn from(e: XmlError) -> Self {
        IntrospectionError::XmlReading(e)
    }
}

impl From<DeError> for IntrospectionError {
    fn from(e: DeError) -> Self {
        IntrospectionError::XmlParsing(e)
    }
}

impl From<SeError> for IntrospectionError {
    fn from(e: SeError) -> Self {
        IntrospectionError::XmlSerializing(e)
    }
}

impl From<fmt::Error> for IntrospectionError {
    fn from(e: fmt::Error) -> Self {
        IntrospectionError::FmtError(e)
    }
}

impl From<NameError> for IntrospectionError {
    fn from(e: NameError) -> Self {
        IntrospectionError::InvalidName(e)
    }
}

impl fmt::Display for IntrospectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntrospectionError::XmlReading(e) => write!(f, "XML reading error: {}", e),
            IntrospectionError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            IntrospectionError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            IntrospectionError::FmtError(e) => write!(f, "Formatting error: {}", e),
            IntrospectionError::InvalidRoot => {
                write!(f, "Document must contain exactly one top-level <node> element")
            }
            IntrospectionError::MissingAttribute { element, attribute } => {
                write!(f, "Missing required attribute '{}' on <{}>", attribute, element)
            }
            IntrospectionError::InvalidName(e) => write!(f, "{}", e),
            IntrospectionError::InvalidAccess(value) => {
                write!(f, "Invalid property access: {:?}", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IntrospectionError {}

#[cfg(test)]
mod tests {
    use super::IntrospectionError;
    use alloc::string::ToString;
    use dbus_text::{NameError, ObjectPath};

    #[test]
    fn test_from_de_error() {
        // A mismatched end tag cannot deserialize into the node model.
        let xml_err =
            quick_xml::de::from_str::<crate::model::Node>("<node><interface></node>").unwrap_err();
        let err: IntrospectionError = xml_err.into();
        assert!(matches!(err, IntrospectionError::XmlParsing(_)));
    }

    #[test]
    fn test_from_se_error() {
        let xml_err = quick_xml::errors::serialize::SeError::Custom("test error".to_string());
        let err: IntrospectionError = xml_err.into();
        assert!(matches!(err, IntrospectionError::XmlSerializing(_)));
    }

    #[test]
    fn test_from_name_error() {
        let name_err = ObjectPath::try_from("no/leading/slash").unwrap_err();
        let err: IntrospectionError = name_err.into();
        assert!(matches!(
            err,
            IntrospectionError::InvalidName(NameError::ObjectPath(_))
        ));
        assert_eq!(
            err.to_string(),
            "Invalid object path: \"no/leading/slash\""
        );
    }

    #[test]
    fn test_display_missing_attribute() {
        let err = IntrospectionError::MissingAttribute {
            element: "node",
            attribute: "name",
        };
        assert_eq!(err.to_string(), "Missing required attribute 'name' on <node>");
    }
}
