//! Schema adapter over HTTP, including fallback paths.

use std::sync::Arc;
use std::time::Duration;

use folio_client::{ClientConfig, HttpTemplateSource, TemplateSchemaAdapter};
use folio_core::ComponentRef;

use crate::common::TestServer;

fn adapter(server: &TestServer) -> TemplateSchemaAdapter {
    TemplateSchemaAdapter::new(Arc::new(server.source()))
}

#[tokio::test]
async fn test_backend_template_is_converted() {
    let server = TestServer::start().await;
    let bundle = adapter(&server).get_template_with_component("serene").await;

    assert_eq!(bundle.component, ComponentRef::Serene);
    let template = &bundle.template;
    assert_eq!(template.id, "serene");
    assert_eq!(template.name, "Remote serene");
    assert_eq!(template.preview_url.as_deref(), Some("/thumbs/serene.jpg"));
    assert_eq!(template.structure["hero"].required, Some(true));
    assert_eq!(template.structure["gallery"].layout, "image_grid_swiss");
    assert_eq!(template.default_content["hero"]["title"], "Remote title");

    let images = template.default_content["gallery"]["images"].as_array().unwrap();
    assert_eq!(images.len(), 3);
    assert!(images[0].get("price").is_some());

    assert_eq!(template.styling["colors"]["primary"], "#101010");
    assert_eq!(template.styling["fonts"]["heading"], "Fraunces");
    assert_eq!(template.styling["typography"]["scale"]["h1"], "96px");
    assert_eq!(template.styling["spacing"]["section"], "160px");
    assert!(template.styling.get("grid").is_none());
}

#[tokio::test]
async fn test_echolon_gets_grid_gallery_seed() {
    let server = TestServer::start().await;
    let bundle = adapter(&server).get_template_with_component("echolon").await;
    assert_eq!(bundle.component, ComponentRef::Echelon);
    let images = bundle.template.default_content["gallery"]["images"].as_array().unwrap();
    assert_eq!(images.len(), 6);
    assert!(images[0].get("src").is_some());
}

#[tokio::test]
async fn test_server_error_falls_back_to_catalog() {
    let server = TestServer::start().await;
    let bundle = adapter(&server).get_template_with_component("broken").await;
    assert_eq!(bundle.template.id, "echolon");
    assert_eq!(bundle.component, ComponentRef::Echelon);
}

#[tokio::test]
async fn test_not_found_falls_back_to_catalog_entry() {
    let server = TestServer::start().await;
    let bundle = adapter(&server).get_template_with_component("boldfolio").await;
    let catalog = folio_core::get_template(Some("boldfolio")).unwrap();
    assert_eq!(bundle.template.id, "boldfolio");
    assert_eq!(bundle.template.default_content, catalog.default_content);
    assert_eq!(bundle.component, ComponentRef::BoldFolio);
}

#[tokio::test]
async fn test_malformed_and_rejected_fall_back() {
    let server = TestServer::start().await;
    let adapter = adapter(&server);
    for id in ["garbled", "rejected"] {
        let bundle = adapter.get_template_with_component(id).await;
        assert_eq!(bundle.template.id, "echolon", "{id}");
    }
}

#[tokio::test]
async fn test_unreachable_backend_falls_back() {
    let source = HttpTemplateSource::new(
        ClientConfig::new("http://127.0.0.1:1").with_timeout(Duration::from_millis(500)),
    )
    .unwrap();
    let adapter = TemplateSchemaAdapter::new(Arc::new(source));

    let bundle = adapter.get_template_with_component("serene").await;
    assert_eq!(bundle.template.id, "serene");
    assert_eq!(bundle.component, ComponentRef::Serene);

    let all = adapter.get_all_templates().await;
    assert_eq!(all.len(), folio_core::get_all_templates().len());
}

#[tokio::test]
async fn test_all_templates_from_backend() {
    let server = TestServer::start().await;
    let all = adapter(&server).get_all_templates().await;
    let ids: Vec<&str> = all.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["serene", "remote-only"]);
    assert_eq!(all[1].default_content["gallery"]["images"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_all_templates_list_failure_falls_back() {
    let server = TestServer::start_with_failing_list().await;
    let all = adapter(&server).get_all_templates().await;
    let ids: Vec<&str> = all.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["echolon", "serene", "chic", "boldfolio"]);
}
