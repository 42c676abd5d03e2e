//! Artifact parser implementations
//!
//! Every parser follows the same shape: resolve the backing definition or
//! parent resource by `(key, kind)`, attach the resource(s) that represent the
//! object, then store the new [`RefId`] on the object so both sides point at
//! each other. A failed lookup records one error and skips that object only.

mod bindings;
mod orchestration;
mod pipeline;
mod pipeline_data;
mod schema;
mod transform;

pub use bindings::BindingsParser;
pub use orchestration::{OrchestrationElementParser, OrchestrationModuleParser};
pub use pipeline::PipelineParser;
pub use pipeline_data::{ReceivePortPipelineDataParser, SendPortPipelineDataParser};
pub use schema::SchemaParser;
pub use transform::TransformParser;

use crate::messages;
use crate::scope::Reporter;
use relink_core::{RefId, Resource, ResourceTree};

/// Build a child key from its parent's key and a local suffix
pub(crate) fn child_key(parent_key: &str, suffix: impl std::fmt::Display) -> String {
    format!("{}:{}", parent_key, suffix)
}

/// Attach a resource, reporting a rejected attach as an error for `object`
pub(crate) fn attach_or_report(
    tree: &mut ResourceTree,
    reporter: &mut Reporter<'_>,
    parent: RefId,
    resource: Resource,
    object: &str,
) -> Option<RefId> {
    let key = resource.key.clone();
    match tree.attach(parent, resource) {
        Ok(id) => Some(id),
        Err(err) => {
            reporter.error(messages::attach_failed(&key, object, &err));
            None
        }
    }
}
