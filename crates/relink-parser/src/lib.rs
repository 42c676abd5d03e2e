//! Relink Parser - Decoders for payloads embedded in artifact data
//!
//! This crate turns the XML fragments carried inside binding data into typed
//! values:
//! - a minimal element tree over `quick-xml`
//! - the property bag codec
//! - the pipeline configuration decoder

pub mod error;
pub mod pipeline_config;
pub mod property_bag;
pub mod xml;

// Re-export main parser types
pub use error::{CodecError, Result};
pub use pipeline_config::PipelineConfigurationParser;
pub use property_bag::PropertyBagCodec;
pub use xml::XmlElement;
