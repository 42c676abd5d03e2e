//! Error message texts
//!
//! Messages always quote the key or identifier that failed so they can be
//! searched for in logs and asserted on in tests.

use relink_core::{CoreError, DefinitionKind, ResourceKind};

/// Placeholder used when the owning application cannot be determined
pub const UNKNOWN_APPLICATION_NAME: &str = "(Unknown)";

pub fn definition_not_found(kind: DefinitionKind, key: &str, object: &str) -> String {
    format!(
        "Unable to find a resource definition of type '{}' with key '{}' for '{}'",
        kind, key, object
    )
}

pub fn resource_not_found(kind: ResourceKind, key: &str, object: &str) -> String {
    format!(
        "Unable to find a resource of type '{}' with key '{}' for '{}'",
        kind, key, object
    )
}

pub fn resource_owned_by_other(kind: ResourceKind, key: &str, object: &str) -> String {
    format!(
        "The resource of type '{}' with key '{}' belongs to another object than '{}'",
        kind, key, object
    )
}

pub fn attach_failed(key: &str, object: &str, error: &CoreError) -> String {
    format!(
        "Unable to attach resource with key '{}' for '{}': {}",
        key, object, error
    )
}

pub fn schema_reference_not_found(role: &str, schema: &str, map: &str) -> String {
    format!(
        "Unable to find the {} schema '{}' referenced by map '{}'",
        role, schema, map
    )
}

pub fn schema_reference_unresolved(role: &str, schema: &str, map: &str) -> String {
    format!(
        "The {} schema '{}' referenced by map '{}' has no resource",
        role, schema, map
    )
}

pub fn meta_model_missing(orchestration: &str) -> String {
    format!(
        "Orchestration '{}' has no meta-model to resolve elements from",
        orchestration
    )
}

pub fn element_not_found(element: &str, orchestration: &str) -> String {
    format!(
        "Unable to find a '{}' element in the meta-model of orchestration '{}'",
        element, orchestration
    )
}

pub fn element_without_name(element: &str, orchestration: &str) -> String {
    format!(
        "A '{}' element in orchestration '{}' has no Name property",
        element, orchestration
    )
}

pub fn binding_info_missing(binding_file: &str, application: &str) -> String {
    format!(
        "Unable to find the binding info in binding file '{}' of application '{}', pipeline data will not be parsed",
        binding_file, application
    )
}

pub fn pipeline_data_invalid(side: &str, owner: &str, error: &dyn std::fmt::Display) -> String {
    format!(
        "Unable to parse the {} pipeline data for {}: {}",
        side, owner, error
    )
}
