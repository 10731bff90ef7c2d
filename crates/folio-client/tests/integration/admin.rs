//! Admin operations over HTTP.

use std::sync::Arc;

use folio_client::{AdminOperations, ClientConfig, Error};

use crate::common::TestServer;

#[tokio::test]
async fn test_migrate_single_template() {
    let server = TestServer::start().await;
    let admin = AdminOperations::new(Arc::new(server.source()));

    let schema = admin.migrate_template("bold").await.unwrap();
    assert_eq!(schema.template_id.as_deref(), Some("boldfolio"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].template_id.as_deref(), Some("boldfolio"));
}

#[tokio::test]
async fn test_migrate_unknown_template_sends_nothing() {
    let server = TestServer::start().await;
    let admin = AdminOperations::new(Arc::new(server.source()));
    let err = admin.migrate_template("retro").await.unwrap_err();
    assert!(matches!(err, Error::Core(ref core) if core.is_not_found()));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_migrate_all_continues_past_failure() {
    let server = TestServer::start().await;
    let admin = AdminOperations::new(Arc::new(
        server.source_with(ClientConfig::default().with_token("admin-token")),
    ));

    let report = admin.migrate_all().await;
    assert_eq!(report.migrated, ["echolon", "serene", "boldfolio"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].id, "chic");
    assert!(report.failed[0].error.contains("503"));

    let requests = server.requests();
    assert_eq!(requests.len(), 4);
    assert!(requests.iter().all(|r| r.method == "PUT"));
    assert!(
        requests
            .iter()
            .all(|r| r.authorization.as_deref() == Some("Bearer admin-token"))
    );
}

#[tokio::test]
async fn test_resync_against_backend() {
    let server = TestServer::start().await;
    let report = AdminOperations::new(Arc::new(server.source()))
        .resync_templates()
        .await
        .unwrap();
    assert_eq!(report.remote, ["serene", "remote-only"]);
    assert_eq!(report.missing_remote, ["echolon", "chic", "boldfolio"]);
    assert_eq!(report.unknown_local, ["remote-only"]);
}

#[tokio::test]
async fn test_resync_propagates_list_failure() {
    let server = TestServer::start_with_failing_list().await;
    let err = AdminOperations::new(Arc::new(server.source()))
        .resync_templates()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Status { status: 500, .. }));
}
