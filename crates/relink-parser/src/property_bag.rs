//! Property bag codec
//!
//! Wire shape: one wrapper element whose children are the properties, in
//! order. Each child's tag is the property name, its `vt` attribute the value
//! type and its text the value. Nothing is nested below the children.
//!
//! ```xml
//! <Properties>
//!   <AllowUnrecognizedMessage vt="11">true</AllowUnrecognizedMessage>
//!   <EnvelopeSpecNames vt="8">http://contoso#Envelope</EnvelopeSpecNames>
//! </Properties>
//! ```

use crate::error::{CodecError, Result};
use crate::xml::{self, XmlElement};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use relink_core::{Property, PropertyBag};

/// Name of the wrapper element written by [`PropertyBagCodec::encode`]
pub const WRAPPER_ELEMENT: &str = "Properties";

/// Attribute carrying the value type of a property
pub const VALUE_TYPE_ATTRIBUTE: &str = "vt";

/// Encoder and decoder for [`PropertyBag`]
pub struct PropertyBagCodec;

impl PropertyBagCodec {
    /// Decode a bag from a complete XML fragment
    ///
    /// The wrapper element may have any name. An empty wrapper yields an
    /// empty bag; unparsable markup is an error, never an empty bag.
    pub fn decode(xml: &str) -> Result<PropertyBag> {
        let wrapper = xml::parse(xml)?;
        Self::decode_element(&wrapper)
    }

    /// Decode a bag from an already parsed wrapper element
    pub fn decode_element(wrapper: &XmlElement) -> Result<PropertyBag> {
        wrapper
            .children
            .iter()
            .map(|child| {
                if !child.children.is_empty() {
                    return Err(CodecError::NestedProperty(child.name.clone()));
                }
                let value_type = child.attribute(VALUE_TYPE_ATTRIBUTE).ok_or_else(|| {
                    CodecError::MissingAttribute {
                        element: child.name.clone(),
                        attribute: VALUE_TYPE_ATTRIBUTE.to_string(),
                    }
                })?;
                Ok(Property::new(child.name.clone(), child.text.clone(), value_type))
            })
            .collect()
    }

    /// Encode a bag as a `<Properties>` wrapper
    pub fn encode(bag: &PropertyBag) -> Result<String> {
        let mut writer = Writer::new(Vec::new());

        write(&mut writer, Event::Start(BytesStart::new(WRAPPER_ELEMENT)))?;
        for property in bag {
            validate_name(&property.name)?;

            let start = BytesStart::new(property.name.as_str())
                .with_attributes([(VALUE_TYPE_ATTRIBUTE, property.value_type.as_str())]);
            write(&mut writer, Event::Start(start))?;
            if !property.value.is_empty() {
                write(&mut writer, Event::Text(BytesText::new(&property.value)))?;
            }
            write(&mut writer, Event::End(BytesEnd::new(property.name.as_str())))?;
        }
        write(&mut writer, Event::End(BytesEnd::new(WRAPPER_ELEMENT)))?;

        let bytes = writer.into_inner();
        log::debug!("encoded property bag with {} properties", bag.len());
        String::from_utf8(bytes).map_err(|e| CodecError::Write(e.to_string()))
    }
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| CodecError::Write(e.to_string()))
}

/// Property names become element names, so they must be valid XML names
fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(CodecError::InvalidPropertyName(name.to_string()))
    }
}
