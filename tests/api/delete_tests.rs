//! Integration tests for DELETE /data and DELETE /data/{organization_id}.

use crate::common::*;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn delete_organization_removes_only_its_records() {
    let server = TestServer::start().await;
    let client = server.client();
    let requests = [
        perishable("org-1", 12.0),
        perishable("org-2", 12.0),
        nonperishable("org-1", 2.0),
    ];
    seed(&client, &requests).await;

    let result = client.delete_organization("org-1").await;

    assert_success(&result);
    assert_eq!(result.unwrap().message, "Data Deleted Successfully");
    let remaining = client.list_data().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].organization_id, "org-2");
}

#[rstest]
#[tokio::test]
async fn delete_organization_without_records_succeeds() {
    let server = TestServer::start().await;

    let result = server.client().delete_organization("nobody").await;

    assert_success(&result);
    assert_eq!(result.unwrap().message, "Data Deleted Successfully");
}

#[rstest]
#[tokio::test]
async fn delete_all_removes_everything() {
    let server = TestServer::start().await;
    let client = server.client();
    let requests = [
        perishable("org-1", 12.0),
        perishable("org-2", 12.0),
    ];
    seed(&client, &requests).await;

    let result = client.delete_all().await;

    assert_success(&result);
    assert_eq!(result.unwrap().message, "All Data Deleted Successfully");
    assert!(client.list_data().await.unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn delete_all_on_empty_store_succeeds() {
    let server = TestServer::start().await;

    let result = server.client().delete_all().await;

    assert_success(&result);
    assert_eq!(result.unwrap().message, "All Data Deleted Successfully");
}

#[rstest]
#[tokio::test]
async fn ids_keep_increasing_after_delete_all() {
    let server = TestServer::start().await;
    let client = server.client();
    seed(&client, &[perishable("org-1", 12.0)]).await;
    client.delete_all().await.unwrap();

    seed(&client, &[perishable("org-1", 12.0)]).await;

    let records = client.list_data().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 2);
}
