//! Pipeline configuration decoder
//!
//! Decodes the per-instance pipeline payload stored in binding data:
//!
//! ```xml
//! <Root xmlns:xsd="http://www.w3.org/2001/XMLSchema">
//!   <Stages>
//!     <Stage CategoryId="9d0e4103-4cce-4536-83fa-4a5040674ad6">
//!       <Components>
//!         <Component Name="Contoso.Components.XmlDisassembler">
//!           <Properties>
//!             <AllowUnrecognizedMessage vt="11">true</AllowUnrecognizedMessage>
//!           </Properties>
//!         </Component>
//!       </Components>
//!     </Stage>
//!   </Stages>
//! </Root>
//! ```
//!
//! Missing `Stages`, `Components` or `Properties` elements mean "none".

use crate::error::{CodecError, Result};
use crate::property_bag::PropertyBagCodec;
use crate::xml::{self, XmlElement};
use relink_core::{ComponentConfiguration, PipelineConfiguration, PropertyBag, StageConfiguration};

const ROOT_ELEMENT: &str = "Root";
const STAGES_ELEMENT: &str = "Stages";
const STAGE_ELEMENT: &str = "Stage";
const COMPONENTS_ELEMENT: &str = "Components";
const COMPONENT_ELEMENT: &str = "Component";
const PROPERTIES_ELEMENT: &str = "Properties";
const CATEGORY_ID_ATTRIBUTE: &str = "CategoryId";
const NAME_ATTRIBUTE: &str = "Name";

/// Pipeline configuration decoder
pub struct PipelineConfigurationParser;

impl PipelineConfigurationParser {
    /// Decode an optional payload
    ///
    /// An absent or blank payload means there is nothing to configure and
    /// yields `Ok(None)`.
    pub fn parse(payload: Option<&str>) -> Result<Option<PipelineConfiguration>> {
        match payload {
            Some(data) if !data.trim().is_empty() => Self::parse_str(data).map(Some),
            _ => Ok(None),
        }
    }

    /// Decode a payload that is known to be present
    pub fn parse_str(data: &str) -> Result<PipelineConfiguration> {
        let root = xml::parse(data)?;
        root.expect_name(ROOT_ELEMENT)?;

        let stages = match root.child(STAGES_ELEMENT) {
            Some(stages) => stages
                .children_named(STAGE_ELEMENT)
                .map(parse_stage)
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        log::debug!("decoded pipeline configuration with {} stages", stages.len());
        Ok(PipelineConfiguration { stages })
    }
}

fn parse_stage(stage: &XmlElement) -> Result<StageConfiguration> {
    let category_id = stage
        .attribute(CATEGORY_ID_ATTRIBUTE)
        .unwrap_or_default()
        .to_string();

    let components = match stage.child(COMPONENTS_ELEMENT) {
        Some(components) => components
            .children_named(COMPONENT_ELEMENT)
            .map(parse_component)
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(StageConfiguration {
        category_id,
        components,
    })
}

fn parse_component(component: &XmlElement) -> Result<ComponentConfiguration> {
    let name = component
        .attribute(NAME_ATTRIBUTE)
        .ok_or_else(|| CodecError::MissingAttribute {
            element: COMPONENT_ELEMENT.to_string(),
            attribute: NAME_ATTRIBUTE.to_string(),
        })?
        .to_string();

    let properties = match component.child(PROPERTIES_ELEMENT) {
        Some(wrapper) => PropertyBagCodec::decode_element(wrapper)?,
        None => PropertyBag::new(),
    };

    Ok(ComponentConfiguration { name, properties })
}
