//! Decoder error types

use thiserror::Error;

/// Decode or encode failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Markup is not well-formed
    #[error("Malformed XML: {0}")]
    Malformed(String),

    /// Document has no root element
    #[error("Document has no root element")]
    NoRootElement,

    /// Document has more than one root element
    #[error("Document has more than one root element: found '{0}' after the root was closed")]
    MultipleRoots(String),

    /// Non-whitespace text outside the root element
    #[error("Unexpected text outside the root element")]
    TextOutsideRoot,

    /// Input ended before an element was closed
    #[error("Element '{0}' is not closed")]
    UnclosedElement(String),

    /// Element name differs from what the format requires
    #[error("Expected element '{expected}', found '{found}'")]
    UnexpectedElement { expected: String, found: String },

    /// Required attribute is absent
    #[error("Element '{element}' is missing required attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    /// A property element has child elements
    #[error("Property '{0}' contains nested elements")]
    NestedProperty(String),

    /// Property name cannot be written as an element name
    #[error("Invalid property name: '{0}'")]
    InvalidPropertyName(String),

    /// Writer failure
    #[error("Unable to write XML: {0}")]
    Write(String),
}

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, CodecError>;
