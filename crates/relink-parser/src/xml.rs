//! Minimal XML element tree
//!
//! Reads a document with `quick-xml` into nested [`XmlElement`]s: name,
//! ordered attributes, text and ordered children. Comments, processing
//! instructions and the declaration are skipped. Whitespace-only text between
//! child elements is dropped; text of leaf elements is kept verbatim.

use crate::error::{CodecError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fmt::Display;

/// One element of a parsed document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Value of an attribute by qualified name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Children with the given name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Fail unless this element has the expected name
    pub fn expect_name(&self, expected: &str) -> Result<()> {
        if self.name == expected {
            Ok(())
        } else {
            Err(CodecError::UnexpectedElement {
                expected: expected.to_string(),
                found: self.name.clone(),
            })
        }
    }
}

fn malformed(err: impl Display) -> CodecError {
    CodecError::Malformed(err.to_string())
}

fn utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(malformed)
}

fn element_from(start: &BytesStart<'_>) -> Result<XmlElement> {
    let mut element = XmlElement::new(utf8(start.name().as_ref())?);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(malformed)?;
        let key = utf8(attribute.key.as_ref())?;
        let value = attribute.unescape_value().map_err(malformed)?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

/// Hand a finished element to its parent, or make it the root
fn close(
    mut element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<()> {
    if !element.children.is_empty() && element.text.trim().is_empty() {
        element.text.clear();
    }

    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_some() {
                return Err(CodecError::MultipleRoots(element.name));
            }
            *root = Some(element);
        }
    }
    Ok(())
}

/// Parse a complete document into its root element
pub fn parse(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(start) => {
                let element = element_from(&start)?;
                if stack.is_empty() && root.is_some() {
                    return Err(CodecError::MultipleRoots(element.name));
                }
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = element_from(&start)?;
                close(element, &mut stack, &mut root)?;
            }
            Event::End(end) => {
                let element = stack.pop().ok_or_else(|| {
                    CodecError::Malformed(format!(
                        "unmatched closing tag '{}'",
                        String::from_utf8_lossy(end.name().as_ref())
                    ))
                })?;
                close(element, &mut stack, &mut root)?;
            }
            Event::Text(text) => {
                let value = text.unescape().map_err(malformed)?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(&value),
                    None if value.trim().is_empty() => {}
                    None => return Err(CodecError::TextOutsideRoot),
                }
            }
            Event::CData(data) => {
                let value = utf8(&data.into_inner())?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(&value),
                    None => return Err(CodecError::TextOutsideRoot),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(CodecError::UnclosedElement(open.name));
    }

    root.ok_or(CodecError::NoRootElement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let root = parse(
            r#"<?xml version="1.0"?>
<Root xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <!-- comment -->
  <Item Name="a">one</Item>
  <Item Name="b" />
</Root>"#,
        )
        .unwrap();

        assert_eq!(root.name, "Root");
        assert_eq!(root.attribute("xmlns:xsd"), Some("http://www.w3.org/2001/XMLSchema"));
        assert_eq!(root.text, "");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].text, "one");
        assert_eq!(root.children[1].attribute("Name"), Some("b"));
        assert_eq!(root.children_named("Item").count(), 2);
    }

    #[test]
    fn test_leaf_text_is_unescaped_and_kept_verbatim() {
        let root = parse("<a><b> x &lt; y </b></a>").unwrap();
        assert_eq!(root.child("b").unwrap().text, " x < y ");
    }

    #[test]
    fn test_cdata_text() {
        let root = parse("<a><![CDATA[<raw>]]></a>").unwrap();
        assert_eq!(root.text, "<raw>");
    }

    #[test]
    fn test_mismatched_tags_fail() {
        assert!(matches!(parse("<a><b></a>"), Err(CodecError::Malformed(_))));
    }

    #[test]
    fn test_unclosed_element_fails() {
        assert!(parse("<a><b></b>").is_err());
    }

    #[test]
    fn test_plain_text_is_not_a_document() {
        assert_eq!(parse("not xml at all"), Err(CodecError::TextOutsideRoot));
        assert_eq!(parse("   "), Err(CodecError::NoRootElement));
    }

    #[test]
    fn test_two_roots_fail() {
        assert!(matches!(parse("<a/><b/>"), Err(CodecError::MultipleRoots(_))));
    }

    #[test]
    fn test_expect_name() {
        let root = parse("<Root/>").unwrap();
        assert!(root.expect_name("Root").is_ok());
        assert!(matches!(
            root.expect_name("Stages"),
            Err(CodecError::UnexpectedElement { .. })
        ));
    }
}
