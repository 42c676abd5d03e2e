//! Integration tests for the artifact parsers
//!
//! Each test builds a small model, runs one parser (or a plan) and checks the
//! resulting resource tree, the links stored on domain objects and the error
//! channel.

mod common;

use common::*;
use relink_core::model::{
    BindingFile, BindingInfo, ElementKind, MessageDefinition, Orchestration, Pipeline,
    PipelineComponent, PipelineDirection, PipelineStage, ReceiveLocation, ReceivePort, Schema,
    SchemaId, SchemaKind, SendPort, Transform,
};
use relink_core::{DefinitionKind, MigrationModel, ResourceKind, SourceRef};
use relink_resolver::messages::UNKNOWN_APPLICATION_NAME;
use relink_resolver::*;

fn group(model: &MigrationModel) -> &relink_core::ApplicationGroup {
    model.source.as_ref().unwrap()
}

// =============================================================================
// Schema Parser Tests
// =============================================================================

#[test]
fn test_schema_with_message_types() {
    let mut model = TestModel::new()
        .with_definition("order.xsd", DefinitionKind::Schema)
        .with_schema(
            Schema::new("Order", "Contoso.Schemas.Order", definition_key("order.xsd"))
                .with_message(MessageDefinition::new("http://contoso/order", "Order"))
                .with_message(MessageDefinition::new("http://contoso/order", "OrderLine")),
        )
        .build();

    let outcome = run_parser(&SchemaParser, &mut model);

    assert!(outcome.context.errors.is_empty());
    assert_eq!(model.resources.resource_count(), 3);

    let schemas = model.resources.find_resources_by_kind(ResourceKind::DocumentSchema);
    assert_eq!(schemas.len(), 1);
    assert_eq!(schemas[0].key, "app.msi:order.xsd:schema");
    assert_eq!(schemas[0].resources().len(), 2);

    let message = model
        .resources
        .find_resource("app.msi:order.xsd:schema:OrderLine", ResourceKind::MessageType)
        .unwrap();
    assert_eq!(message.description.as_deref(), Some("http://contoso/order#OrderLine"));
    assert_eq!(message.parent_ref_id(), schemas[0].ref_id());
}

#[test]
fn test_schema_linking_invariant() {
    let mut model = TestModel::new()
        .with_definition("order.xsd", DefinitionKind::Schema)
        .with_schema(
            Schema::new("Order", "Contoso.Schemas.Order", definition_key("order.xsd"))
                .with_message(MessageDefinition::new("http://contoso/order", "Order")),
        )
        .build();

    run_parser(&SchemaParser, &mut model);

    let definition = model
        .resources
        .find_resource_definition(&definition_key("order.xsd"), DefinitionKind::Schema)
        .unwrap();
    let schema = &group(&model).schemas[0];
    let resource_id = schema.resource.expect("schema should be linked");
    let resource = model.resources.resource(resource_id).unwrap();

    assert_eq!(resource.source_object(), Some(SourceRef::Schema { schema: SchemaId(0) }));
    assert_eq!(resource.parent_ref_id(), definition.ref_id());
    assert_eq!(group(&model).resource_of(resource.source_object().unwrap()), Some(resource_id));

    let message_id = schema.message_definitions[0].resource.unwrap();
    let message = model.resources.resource(message_id).unwrap();
    assert_eq!(message.parent_ref_id(), resource_id);
    assert_eq!(group(&model).resource_of(message.source_object().unwrap()), Some(message_id));
}

#[test]
fn test_schema_without_message_types() {
    let mut model = TestModel::new()
        .with_definition("props.xsd", DefinitionKind::Schema)
        .with_schema(
            Schema::new("Props", "Contoso.Schemas.Props", definition_key("props.xsd"))
                .with_kind(SchemaKind::Property),
        )
        .build();

    let outcome = run_parser(&SchemaParser, &mut model);

    assert!(outcome.context.errors.is_empty());
    let resources = model.resources.find_resources_by_kind(ResourceKind::PropertySchema);
    assert_eq!(resources.len(), 1);
    assert!(resources[0].resources().is_empty());
}

#[test]
fn test_missing_definition_records_one_error() {
    let missing_key = definition_key("missing.xsd");
    let mut model = TestModel::new()
        .with_definition("order.xsd", DefinitionKind::Schema)
        .with_schema(Schema::new("Missing", "Contoso.Schemas.Missing", missing_key.clone()))
        .build();

    let outcome = run_parser(&SchemaParser, &mut model);

    let errors = outcome.error_messages();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains(&missing_key));
    assert!(errors[0].contains("schema"));
    assert_eq!(model.resources.resource_count(), 0);
    assert!(group(&model).schemas[0].resource.is_none());
    assert_eq!(outcome.diagnostics.errors(), errors);
}

#[test]
fn test_definition_of_wrong_kind_is_not_found() {
    let mut model = TestModel::new()
        .with_definition("order.xsd", DefinitionKind::Transform)
        .with_schema(Schema::new("Order", "Contoso.Schemas.Order", definition_key("order.xsd")))
        .build();

    let outcome = run_parser(&SchemaParser, &mut model);

    assert_eq!(outcome.context.errors.error_count(), 1);
    assert_eq!(model.resources.resource_count(), 0);
}

#[test]
fn test_best_effort_continuation() {
    for missing in 0..=4usize {
        let total = 4usize;
        let mut builder = TestModel::new();
        for i in 0..total {
            let file = format!("schema{}.xsd", i);
            if i >= missing {
                builder = builder.with_definition(&file, DefinitionKind::Schema);
            }
            builder = builder.with_schema(Schema::new(
                format!("Schema{}", i),
                format!("Contoso.Schemas.Schema{}", i),
                definition_key(&file),
            ));
        }
        let mut model = builder.build();

        let outcome = run_parser(&SchemaParser, &mut model);

        assert_eq!(outcome.context.errors.error_count(), missing, "missing = {}", missing);
        assert_eq!(model.resources.resource_count(), total - missing, "missing = {}", missing);
    }
}

// =============================================================================
// Empty Model Tests
// =============================================================================

#[test]
fn test_model_without_group_is_a_no_op() {
    let mut model = MigrationModel::new();

    let outcome = run_plan(&RunPlan::standard(), &mut model);

    assert!(outcome.context.errors.is_empty());
    assert!(outcome.diagnostics.entries().is_empty());
    assert_eq!(model.resources.resource_count(), 0);
    assert_eq!(outcome.summaries.len(), ParserKind::ALL.len());
}

#[test]
fn test_empty_group_leaves_tree_unchanged() {
    let mut model = TestModel::new()
        .with_definition("order.xsd", DefinitionKind::Schema)
        .build();

    let outcome = run_plan(&RunPlan::standard(), &mut model);

    assert!(outcome.context.errors.is_empty());
    assert_eq!(model.resources.resource_count(), 0);
    assert_eq!(model.resources.definition_count(), 1);
}

// =============================================================================
// Transform Parser Tests
// =============================================================================

#[test]
fn test_map_references_its_schemas() {
    let mut model = TestModel::new()
        .with_definition("order.xsd", DefinitionKind::Schema)
        .with_definition("invoice.xsd", DefinitionKind::Schema)
        .with_definition("order_to_invoice.btm", DefinitionKind::Transform)
        .with_schema(Schema::new("Order", "Contoso.Schemas.Order", definition_key("order.xsd")))
        .with_schema(Schema::new("Invoice", "Contoso.Schemas.Invoice", definition_key("invoice.xsd")))
        .with_transform(
            Transform::new("OrderToInvoice", "Contoso.Maps.OrderToInvoice", definition_key("order_to_invoice.btm"))
                .with_source_schema("Contoso.Schemas.Order")
                .with_target_schema("Contoso.Schemas.Invoice"),
        )
        .build();

    let outcome = run_plan(
        &RunPlan::from_kinds(&[ParserKind::Schema, ParserKind::Transform]).unwrap(),
        &mut model,
    );

    assert!(outcome.context.errors.is_empty());
    let map_id = group(&model).transforms[0].resource.unwrap();
    let map = model.resources.resource(map_id).unwrap();
    assert_eq!(map.key, "app.msi:order_to_invoice.btm:map");

    let referenced: Vec<_> = map.references().collect();
    assert_eq!(
        referenced,
        vec![
            group(&model).schemas[0].resource.unwrap(),
            group(&model).schemas[1].resource.unwrap()
        ]
    );
}

#[test]
fn test_unresolved_schema_reference_keeps_map() {
    let mut model = TestModel::new()
        .with_definition("order.xsd", DefinitionKind::Schema)
        .with_definition("map.btm", DefinitionKind::Transform)
        .with_schema(Schema::new("Order", "Contoso.Schemas.Order", definition_key("order.xsd")))
        .with_transform(
            Transform::new("OrderMap", "Contoso.Maps.OrderMap", definition_key("map.btm"))
                .with_source_schema("Contoso.Schemas.Order")
                .with_target_schema("Contoso.Schemas.Unknown"),
        )
        .build();

    let outcome = run_plan(
        &RunPlan::from_kinds(&[ParserKind::Schema, ParserKind::Transform]).unwrap(),
        &mut model,
    );

    let errors = outcome.error_messages();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Contoso.Schemas.Unknown"));
    assert!(errors[0].contains("OrderMap"));

    let map_id = group(&model).transforms[0].resource.unwrap();
    assert_eq!(model.resources.resource(map_id).unwrap().references().count(), 1);
    assert_eq!(outcome.summaries[1].errors_recorded, 1);
    assert_eq!(outcome.summaries[1].resources_created, 1);
}

// =============================================================================
// Pipeline Parser Tests
// =============================================================================

#[test]
fn test_pipeline_components() {
    let mut model = TestModel::new()
        .with_definition("send.btp", DefinitionKind::Pipeline)
        .with_pipeline(
            Pipeline::new("SendOrders", "Contoso.Pipelines.SendOrders", definition_key("send.btp"), PipelineDirection::Send)
                .with_stage(
                    PipelineStage::new("Encode", "9d0e4108-4cce-4536-83fa-4a5040674ad6")
                        .with_component(PipelineComponent::new("MimeEncoder", "Contoso.Components.Mime")),
                )
                .with_stage(
                    PipelineStage::new("Assemble", "9d0e4107-4cce-4536-83fa-4a5040674ad6")
                        .with_component(PipelineComponent::new("XmlAssembler", "Contoso.Components.Xml")),
                ),
        )
        .build();

    let outcome = run_parser(&PipelineParser, &mut model);

    assert!(outcome.context.errors.is_empty());
    let pipeline_id = group(&model).pipelines[0].resource.unwrap();
    let pipeline = model.resources.resource(pipeline_id).unwrap();
    assert_eq!(pipeline.kind, ResourceKind::SendPipeline);
    assert_eq!(pipeline.resources().len(), 2);

    let component = model
        .resources
        .find_resource("app.msi:send.btp:pipeline:Assemble:XmlAssembler", ResourceKind::PipelineComponent)
        .unwrap();
    assert_eq!(component.parent_ref_id(), pipeline_id);
    assert_eq!(
        group(&model).resource_of(component.source_object().unwrap()),
        Some(component.ref_id())
    );
}

#[test]
fn test_repeated_component_names_get_distinct_keys() {
    let mut model = TestModel::new()
        .with_definition("recv.btp", DefinitionKind::Pipeline)
        .with_pipeline(
            Pipeline::new("Recv", "Contoso.Pipelines.Recv", definition_key("recv.btp"), PipelineDirection::Receive)
                .with_stage(
                    PipelineStage::new("Decode", "9d0e4103-4cce-4536-83fa-4a5040674ad6")
                        .with_component(PipelineComponent::new("Custom", "Contoso.A"))
                        .with_component(PipelineComponent::new("Custom", "Contoso.A")),
                ),
        )
        .build();

    let outcome = run_parser(&PipelineParser, &mut model);

    assert!(outcome.context.errors.is_empty());
    let keys: Vec<_> = model
        .resources
        .find_resources_by_kind(ResourceKind::PipelineComponent)
        .iter()
        .map(|r| r.key.clone())
        .collect();
    assert_eq!(
        keys,
        vec![
            "app.msi:recv.btp:pipeline:Decode:Custom",
            "app.msi:recv.btp:pipeline:Decode:Custom:2"
        ]
    );

    let components = &group(&model).pipelines[0].document.as_ref().unwrap().stages[0].components;
    assert!(components.iter().all(|c| c.resource.is_some()));
    assert_ne!(components[0].resource, components[1].resource);
}

// =============================================================================
// Orchestration Parser Tests
// =============================================================================

#[test]
fn test_module_and_nested_elements() {
    let orchestration = Orchestration::new("ProcessOrder", "Contoso.ProcessOrder", definition_key("process.odx"))
        .with_model(module_model(&[
            (ElementKind::CorrelationType, Some("ByOrderId")),
            (ElementKind::PortType, Some("OrderPortType")),
            (ElementKind::CorrelationType, Some("ByCustomer")),
            (ElementKind::ServiceDeclaration, Some("Service")),
        ]));
    let mut model = TestModel::new()
        .with_definition("process.odx", DefinitionKind::Orchestration)
        .with_orchestration(orchestration)
        .build();

    let outcome = run_plan(&RunPlan::standard(), &mut model);

    assert!(outcome.context.errors.is_empty());
    let module_id = group(&model).orchestrations[0].resource.unwrap();
    let module = model.resources.resource(module_id).unwrap();
    assert_eq!(module.key, "app.msi:process.odx:Module");
    assert_eq!(module.resources().len(), 4);

    let correlation_keys: Vec<_> = model
        .resources
        .find_resources_by_kind(ResourceKind::CorrelationType)
        .iter()
        .map(|r| r.key.clone())
        .collect();
    assert_eq!(
        correlation_keys,
        vec![
            "app.msi:process.odx:Module:ByOrderId",
            "app.msi:process.odx:Module:ByCustomer"
        ]
    );

    let port_type = model
        .resources
        .find_resource("app.msi:process.odx:Module:OrderPortType", ResourceKind::PortType)
        .unwrap();
    assert_eq!(port_type.parent_ref_id(), module_id);
    assert_eq!(
        group(&model).resource_of(port_type.source_object().unwrap()),
        Some(port_type.ref_id())
    );
}

#[test]
fn test_correlation_type_under_missing_module() {
    let wrong_key = definition_key("wrong.odx");
    let orchestration = Orchestration::new("ProcessOrder", "Contoso.ProcessOrder", wrong_key.clone())
        .with_model(module_model(&[(ElementKind::CorrelationType, Some("ByOrderId"))]));
    let mut model = TestModel::new()
        .with_definition("process.odx", DefinitionKind::Orchestration)
        .with_orchestration(orchestration)
        .build();

    let outcome = run_parser(&OrchestrationElementParser::correlation_types(), &mut model);

    let errors = outcome.error_messages();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains(&wrong_key));
    assert!(errors[0].contains("module"));
    assert!(model
        .resources
        .find_resources_by_kind(ResourceKind::CorrelationType)
        .is_empty());
}

#[test]
fn test_wrong_definition_key_fails_every_module_link() {
    let wrong_key = definition_key("wrong.odx");
    let orchestration = Orchestration::new("ProcessOrder", "Contoso.ProcessOrder", wrong_key.clone())
        .with_model(module_model(&[(ElementKind::CorrelationType, Some("ByOrderId"))]));
    let mut model = TestModel::new()
        .with_definition("process.odx", DefinitionKind::Orchestration)
        .with_orchestration(orchestration)
        .build();

    let outcome = run_plan(&RunPlan::standard(), &mut model);

    // One for the module definition, one per element parser
    let errors = outcome.error_messages();
    assert_eq!(errors.len(), 5);
    assert!(errors.iter().all(|e| e.contains(&wrong_key)));
    assert_eq!(model.resources.resource_count(), 0);
}

#[test]
fn test_elements_never_attach_under_another_orchestrations_module() {
    let first = Orchestration::new("ProcessOrder", "Contoso.ProcessOrder", definition_key("process.odx"))
        .with_model(module_model(&[(ElementKind::CorrelationType, Some("ByOrderId"))]));
    let second = Orchestration::new("ProcessInvoice", "Contoso.ProcessInvoice", definition_key("process.odx"))
        .with_model(module_model(&[(ElementKind::CorrelationType, Some("ByInvoiceId"))]));
    let mut model = TestModel::new()
        .with_definition("process.odx", DefinitionKind::Orchestration)
        .with_orchestration(first)
        .with_orchestration(second)
        .build();

    let outcome = run_plan(&RunPlan::standard(), &mut model);

    // The second module collides, then each element parser refuses the first module
    let errors = outcome.error_messages();
    assert_eq!(errors.len(), 5);
    assert!(errors.iter().all(|e| e.contains("ProcessInvoice")));

    let correlation_types = model.resources.find_resources_by_kind(ResourceKind::CorrelationType);
    assert_eq!(correlation_types.len(), 1);
    assert_eq!(correlation_types[0].key, "app.msi:process.odx:Module:ByOrderId");
    assert!(group(&model).orchestrations[1].resource.is_none());
}

#[test]
fn test_element_without_name_only_skips_that_element() {
    let orchestration = Orchestration::new("ProcessOrder", "Contoso.ProcessOrder", definition_key("process.odx"))
        .with_model(module_model(&[
            (ElementKind::CorrelationType, None),
            (ElementKind::CorrelationType, Some("ByOrderId")),
        ]));
    let mut model = TestModel::new()
        .with_definition("process.odx", DefinitionKind::Orchestration)
        .with_orchestration(orchestration)
        .build();

    let outcome = run_plan(
        &RunPlan::from_kinds(&[ParserKind::OrchestrationModule, ParserKind::CorrelationType]).unwrap(),
        &mut model,
    );

    let errors = outcome.error_messages();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("CorrelationType"));
    assert_eq!(model.resources.find_resources_by_kind(ResourceKind::CorrelationType).len(), 1);
}

#[test]
fn test_orchestration_without_meta_model() {
    let mut model = TestModel::new()
        .with_definition("process.odx", DefinitionKind::Orchestration)
        .with_orchestration(Orchestration::new("ProcessOrder", "Contoso.ProcessOrder", definition_key("process.odx")))
        .build();

    let outcome = run_parser(&OrchestrationModuleParser, &mut model);

    let errors = outcome.error_messages();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("ProcessOrder"));
    assert_eq!(model.resources.resource_count(), 0);
}

// =============================================================================
// Bindings Parser Tests
// =============================================================================

fn binding_info() -> BindingInfo {
    BindingInfo {
        application_name: "Contoso.Orders".to_string(),
        receive_ports: vec![ReceivePort::new("OrdersIn")
            .with_location(ReceiveLocation::new("OrdersIn.File"))
            .with_location(ReceiveLocation::new("OrdersIn.Http"))],
        send_ports: vec![SendPort::new("OrdersOut")],
    }
}

#[test]
fn test_bindings_ports_and_locations() {
    let mut model = TestModel::new()
        .with_definition("bindings.xml", DefinitionKind::Bindings)
        .with_binding_file(
            BindingFile::new("bindings.xml", definition_key("bindings.xml")).with_binding_info(binding_info()),
        )
        .build();

    let outcome = run_parser(&BindingsParser, &mut model);

    assert!(outcome.context.errors.is_empty());
    assert_eq!(model.resources.resource_count(), 5);

    let port = model
        .resources
        .find_resource("app.msi:bindings.xml:bindings:receiveport:OrdersIn", ResourceKind::ReceivePort)
        .unwrap();
    assert_eq!(port.resources().len(), 2);
    assert!(model
        .resources
        .find_resource("app.msi:bindings.xml:bindings:sendport:OrdersOut", ResourceKind::SendPort)
        .is_some());

    let info = group(&model).binding_files[0].binding_info.as_ref().unwrap();
    let location_id = info.receive_ports[0].receive_locations[1].resource.unwrap();
    assert_eq!(model.resources.resource(location_id).unwrap().parent_ref_id(), port.ref_id());
}

// =============================================================================
// Pipeline Data Parser Tests
// =============================================================================

#[test]
fn test_receive_port_single_stage_payload() {
    let mut info = binding_info();
    info.receive_ports[0].receive_locations[0].receive_pipeline_data = Some(SINGLE_STAGE_PAYLOAD.to_string());
    let mut model = TestModel::new()
        .with_binding_file(BindingFile::new("bindings.xml", definition_key("bindings.xml")).with_binding_info(info))
        .build();

    let outcome = run_parser(&ReceivePortPipelineDataParser, &mut model);

    assert!(outcome.context.errors.is_empty());
    let binding_file = &group(&model).binding_files[0];
    assert_eq!(binding_file.application_name.as_deref(), Some("Contoso.Orders"));

    let location = &binding_file.binding_info.as_ref().unwrap().receive_ports[0].receive_locations[0];
    let config = location.receive_pipeline_configuration.as_ref().unwrap();
    assert_eq!(config.stages.len(), 1);
    assert_eq!(config.stages[0].components.len(), 1);

    let properties = &config.stages[0].components[0].properties;
    assert_eq!(properties.len(), 1);
    let property = &properties.as_slice()[0];
    assert!(!property.name.is_empty());
    assert!(!property.value.is_empty());
    assert!(!property.value_type.is_empty());
}

#[test]
fn test_receive_port_malformed_send_payload() {
    let mut info = binding_info();
    info.receive_ports[0] = ReceivePort::new("OrdersIn")
        .two_way()
        .with_send_pipeline_data(MALFORMED_PAYLOAD)
        .with_location(ReceiveLocation::new("OrdersIn.File").with_receive_pipeline_data(SINGLE_STAGE_PAYLOAD));
    let mut model = TestModel::new()
        .with_binding_file(BindingFile::new("bindings.xml", definition_key("bindings.xml")).with_binding_info(info))
        .build();

    let outcome = run_parser(&ReceivePortPipelineDataParser, &mut model);

    let errors = outcome.error_messages();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("send pipeline data"));
    assert!(errors[0].contains("OrdersIn"));

    let port = &group(&model).binding_files[0].binding_info.as_ref().unwrap().receive_ports[0];
    assert!(port.send_pipeline_configuration.is_none());
    // The sibling location is still decoded
    assert!(port.receive_locations[0].receive_pipeline_configuration.is_some());
}

#[test]
fn test_receive_port_without_binding_info() {
    let mut model = TestModel::new()
        .with_binding_file(BindingFile::new("bindings.xml", definition_key("bindings.xml")))
        .build();

    let outcome = run_parser(&ReceivePortPipelineDataParser, &mut model);

    assert!(outcome.context.errors.is_empty());
    let warnings = outcome.diagnostics.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("binding info"));
    assert_eq!(
        group(&model).binding_files[0].application_name.as_deref(),
        Some(UNKNOWN_APPLICATION_NAME)
    );
}

#[test]
fn test_send_port_payloads() {
    let mut info = binding_info();
    info.send_ports[0] = SendPort::new("OrdersOut")
        .two_way()
        .with_send_pipeline_data(SINGLE_STAGE_PAYLOAD)
        .with_receive_pipeline_data(MALFORMED_PAYLOAD);
    let mut model = TestModel::new()
        .with_binding_file(BindingFile::new("bindings.xml", definition_key("bindings.xml")).with_binding_info(info))
        .build();

    let outcome = run_parser(&SendPortPipelineDataParser, &mut model);

    let errors = outcome.error_messages();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("receive pipeline data"));
    assert!(errors[0].contains("OrdersOut"));

    let port = &group(&model).binding_files[0].binding_info.as_ref().unwrap().send_ports[0];
    assert!(port.send_pipeline_configuration.is_some());
    assert!(port.receive_pipeline_configuration.is_none());
}

// =============================================================================
// Full Plan Tests
// =============================================================================

#[test]
fn test_standard_plan_over_complete_model() {
    let mut info = binding_info();
    info.receive_ports[0].receive_locations[0].receive_pipeline_data = Some(SINGLE_STAGE_PAYLOAD.to_string());

    let mut model = TestModel::new()
        .with_definition("order.xsd", DefinitionKind::Schema)
        .with_definition("map.btm", DefinitionKind::Transform)
        .with_definition("receive.btp", DefinitionKind::Pipeline)
        .with_definition("process.odx", DefinitionKind::Orchestration)
        .with_definition("bindings.xml", DefinitionKind::Bindings)
        .with_schema(
            Schema::new("Order", "Contoso.Schemas.Order", definition_key("order.xsd"))
                .with_message(MessageDefinition::new("http://contoso/order", "Order")),
        )
        .with_transform(
            Transform::new("OrderMap", "Contoso.Maps.OrderMap", definition_key("map.btm"))
                .with_source_schema("Contoso.Schemas.Order"),
        )
        .with_pipeline(
            Pipeline::new("ReceiveOrders", "Contoso.Pipelines.ReceiveOrders", definition_key("receive.btp"), PipelineDirection::Receive)
                .with_stage(
                    PipelineStage::new("Disassemble", "9d0e4105-4cce-4536-83fa-4a5040674ad6")
                        .with_component(PipelineComponent::new("XmlDisassembler", "Contoso.Components.Xml")),
                ),
        )
        .with_orchestration(
            Orchestration::new("ProcessOrder", "Contoso.ProcessOrder", definition_key("process.odx"))
                .with_model(module_model(&[(ElementKind::MultipartMessageType, Some("OrderMessage"))])),
        )
        .with_binding_file(
            BindingFile::new("bindings.xml", definition_key("bindings.xml")).with_binding_info(info),
        )
        .build();

    let outcome = run_plan(&RunPlan::standard(), &mut model);

    assert!(outcome.context.errors.is_empty(), "{:?}", outcome.error_messages());
    // schema, message, map, pipeline, component, module, element, bindings, port, 2 locations, send port
    assert_eq!(model.resources.resource_count(), 12);

    let created: usize = outcome.summaries.iter().map(|s| s.resources_created).sum();
    assert_eq!(created, 12);

    for resource in model.resources.resources() {
        let source = resource.source_object().expect("every resource has a source");
        assert_eq!(group(&model).resource_of(source), Some(resource.ref_id()), "{}", resource.key);
    }
}
