//! Common test utilities for resolver integration tests

#![allow(dead_code)]

use relink_core::model::{
    BindingFile, ElementKind, MetaModel, MetaModelElement, Orchestration, Pipeline, Schema,
    Transform,
};
use relink_core::{
    ApplicationGroup, ContainerKind, DefinitionKind, MigrationModel, ParseContext,
    RecordingDiagnostics, RefId, ResourceContainer, ResourceDefinition, ResourceTree,
};
use relink_resolver::{ArtifactParser, ParseScope, PassSummary, RunPlan};

/// Key of the single container every test model starts with
pub const CONTAINER_KEY: &str = "app.msi";

/// Definition key for an artifact file inside the test container
pub fn definition_key(file: &str) -> String {
    format!("{}:{}", CONTAINER_KEY, file)
}

/// Builder for a model with one container and an application group
pub struct TestModel {
    tree: ResourceTree,
    container: RefId,
    group: ApplicationGroup,
}

impl TestModel {
    pub fn new() -> Self {
        let mut tree = ResourceTree::new();
        let container = tree
            .add_container(
                None,
                ResourceContainer::new(CONTAINER_KEY, CONTAINER_KEY, ContainerKind::Msi, "/tmp/app.msi"),
            )
            .unwrap();
        Self {
            tree,
            container,
            group: ApplicationGroup::new(),
        }
    }

    /// Add a definition for `file` to the container
    pub fn with_definition(mut self, file: &str, kind: DefinitionKind) -> Self {
        self.tree
            .add_definition(self.container, ResourceDefinition::new(definition_key(file), file, kind))
            .unwrap();
        self
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.group.schemas.push(schema);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.group.transforms.push(transform);
        self
    }

    pub fn with_orchestration(mut self, orchestration: Orchestration) -> Self {
        self.group.orchestrations.push(orchestration);
        self
    }

    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.group.pipelines.push(pipeline);
        self
    }

    pub fn with_binding_file(mut self, binding_file: BindingFile) -> Self {
        self.group.binding_files.push(binding_file);
        self
    }

    pub fn build(self) -> MigrationModel {
        MigrationModel::with_source(self.tree, self.group)
    }
}

/// Outcome of running parsers against a model
pub struct Outcome {
    pub context: ParseContext,
    pub diagnostics: RecordingDiagnostics,
    pub summaries: Vec<PassSummary>,
}

impl Outcome {
    pub fn error_messages(&self) -> Vec<String> {
        self.context
            .errors
            .errors()
            .map(|record| record.message.clone())
            .collect()
    }
}

/// Run one parser pass
pub fn run_parser(parser: &dyn ArtifactParser, model: &mut MigrationModel) -> Outcome {
    let mut context = ParseContext::new();
    let diagnostics = RecordingDiagnostics::new();
    {
        let mut scope = ParseScope::new(model, &mut context, &diagnostics);
        parser.parse(&mut scope);
    }
    Outcome {
        context,
        diagnostics,
        summaries: Vec::new(),
    }
}

/// Run a whole plan
pub fn run_plan(plan: &RunPlan, model: &mut MigrationModel) -> Outcome {
    let mut context = ParseContext::new();
    let diagnostics = RecordingDiagnostics::new();
    let summaries = {
        let mut scope = ParseScope::new(model, &mut context, &diagnostics);
        plan.execute(&mut scope)
    };
    Outcome {
        context,
        diagnostics,
        summaries,
    }
}

/// Meta-model with a root, one named module and the given children under it
pub fn module_model(children: &[(ElementKind, Option<&str>)]) -> MetaModel {
    let mut model = MetaModel::new();
    let root = model.set_root(MetaModelElement::new(ElementKind::Other("ServiceBody".into())));
    let module = model
        .add_child(
            root,
            MetaModelElement::new(ElementKind::Module).with_property("Name", "Contoso.Orders"),
        )
        .unwrap();
    for (kind, name) in children {
        let mut element = MetaModelElement::new(kind.clone());
        if let Some(name) = name {
            element = element.with_property("Name", *name);
        }
        model.add_child(module, element).unwrap();
    }
    model
}

/// A receive pipeline payload with one stage, one component and one property
pub const SINGLE_STAGE_PAYLOAD: &str = r#"<Root xmlns:xsd="http://www.w3.org/2001/XMLSchema"><Stages><Stage CategoryId="9d0e4103-4cce-4536-83fa-4a5040674ad6"><Components><Component Name="Contoso.Components.XmlDisassembler"><Properties><AllowUnrecognizedMessage vt="11">true</AllowUnrecognizedMessage></Properties></Component></Components></Stage></Stages></Root>"#;

/// A payload that is not well-formed
pub const MALFORMED_PAYLOAD: &str = "<Root><Stages><Stage></Stages>";
