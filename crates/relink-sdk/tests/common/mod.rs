//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// One installer with a schema, an orchestration and a binding file.
/// The second schema points at a definition that does not exist.
pub const SNAPSHOT_JSON: &str = r#"{
  "containers": [{
    "key": "app.msi",
    "name": "app.msi",
    "kind": "msi",
    "location": "/drop/app.msi",
    "definitions": [
      { "key": "app.msi:order.xsd", "name": "order.xsd", "kind": "schema" },
      { "key": "app.msi:process.odx", "name": "process.odx", "kind": "orchestration" },
      { "key": "app.msi:bindings.xml", "name": "bindings.xml", "kind": "bindings" }
    ]
  }],
  "source": {
    "applications": [{ "name": "Contoso.Orders" }],
    "schemas": [
      {
        "name": "Order",
        "full_name": "Contoso.Schemas.Order",
        "resource_definition_key": "app.msi:order.xsd",
        "message_definitions": [{ "root_element_name": "Order", "namespace": "http://contoso/order" }]
      },
      {
        "name": "Invoice",
        "full_name": "Contoso.Schemas.Invoice",
        "resource_definition_key": "app.msi:invoice.xsd"
      }
    ],
    "orchestrations": [{
      "name": "ProcessOrder",
      "full_name": "Contoso.ProcessOrder",
      "resource_definition_key": "app.msi:process.odx",
      "model": {
        "root": 0,
        "elements": [
          { "kind": "ServiceBody", "children": [1] },
          { "kind": "Module", "properties": [{ "name": "Name", "value": "Contoso" }], "children": [2] },
          { "kind": "CorrelationType", "properties": [{ "name": "Name", "value": "ByOrderId" }] }
        ]
      }
    }],
    "binding_files": [{
      "name": "bindings.xml",
      "resource_definition_key": "app.msi:bindings.xml"
    }]
  }
}"#;

/// Write `content` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
