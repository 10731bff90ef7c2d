//! HTTP template source against the in-process API.

use folio_client::{ClientConfig, Error, FieldType, TemplateSource};

use crate::common::TestServer;

#[tokio::test]
async fn test_fetch_enveloped_template() {
    let server = TestServer::start().await;
    let schema = server.source().fetch_template("serene").await.unwrap();

    assert_eq!(schema.template_id.as_deref(), Some("serene"));
    assert_eq!(schema.name, "Remote serene");
    assert_eq!(schema.sections().len(), 2);
    assert_eq!(schema.sections()[0].order, Some(0));
    assert_eq!(schema.sections()[1].fields[0].kind, FieldType::Array);
}

#[tokio::test]
async fn test_fetch_bare_template() {
    let server = TestServer::start().await;
    let schema = server.source().fetch_template("chic").await.unwrap();
    assert_eq!(schema.id(), Some("chic"));
    assert_eq!(schema.thumbnail.as_deref(), Some("/thumbs/chic.jpg"));
}

#[tokio::test]
async fn test_fetch_template_list() {
    let server = TestServer::start().await;
    let schemas = server.source().fetch_templates().await.unwrap();
    let ids: Vec<&str> = schemas.iter().filter_map(|s| s.id()).collect();
    assert_eq!(ids, ["serene", "remote-only"]);
}

#[tokio::test]
async fn test_server_error_is_status() {
    let server = TestServer::start().await;
    let err = server.source().fetch_template("broken").await.unwrap_err();
    match err {
        Error::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/api/templates/broken"));
        }
        other => unreachable!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn test_not_found_is_status() {
    let server = TestServer::start().await;
    let err = server.source().fetch_template("missing").await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_success_false_is_envelope_error() {
    let server = TestServer::start().await;
    let err = server.source().fetch_template("rejected").await.unwrap_err();
    assert!(matches!(err, Error::Envelope { .. }));
    assert!(err.to_string().contains("Template disabled"));
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let server = TestServer::start().await;
    let err = server.source().fetch_template("garbled").await.unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
    assert!(err.is_backend_unavailable());
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let server = TestServer::start().await;
    let source = server.source_with(ClientConfig::default().with_token("s3cret"));
    source.fetch_template("serene").await.unwrap();
    source.fetch_templates().await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    for request in requests {
        assert_eq!(request.authorization.as_deref(), Some("Bearer s3cret"));
    }
}

#[tokio::test]
async fn test_no_token_no_authorization_header() {
    let server = TestServer::start().await;
    server.source().fetch_template("serene").await.unwrap();
    assert!(server.requests()[0].authorization.is_none());
}

#[tokio::test]
async fn test_push_template_sends_body() {
    let server = TestServer::start().await;
    let schema = folio_client::template_to_backend_schema(
        folio_core::get_template(Some("serene")).unwrap(),
    );
    server.source().push_template(&schema).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].template_id.as_deref(), Some("serene"));
    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(body["templateId"], "serene");
    assert_eq!(body["schema"]["sections"][0]["id"], "navigation");
}
