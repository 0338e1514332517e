//! Integration tests for GET /data.

use crate::common::*;
use chrono::DateTime;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn list_data_on_empty_store_returns_empty_array() {
    let server = TestServer::start().await;

    let result = server.client().list_data().await;

    assert_success(&result);
    assert!(result.unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn list_data_returns_every_recorded_delivery() {
    let server = TestServer::start().await;
    let client = server.client();
    let requests = [
        perishable("org-1", 12.0),
        nonperishable("org-2", 3.0),
        perishable("org-1", 1.0),
    ];
    seed(&client, &requests).await;

    let records = client.list_data().await.unwrap();

    assert_eq!(records.len(), 3);
    let ids: Vec<i64> = records.iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    let organizations: Vec<&str> = records
        .iter()
        .map(|record| record.organization_id.as_str())
        .collect();
    assert_eq!(organizations, vec!["org-1", "org-2", "org-1"]);
}

#[rstest]
#[tokio::test]
async fn list_data_timestamps_are_iso_8601() {
    let server = TestServer::start().await;
    let client = server.client();
    seed(&client, &[perishable("org-1", 12.0)]).await;

    let records = client.list_data().await.unwrap();

    let timestamp = &records[0].timestamp;
    assert!(
        DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "not an ISO-8601 timestamp: {timestamp}"
    );
}

#[rstest]
#[tokio::test]
async fn rejected_requests_are_not_recorded() {
    let server = TestServer::start().await;
    let client = server.client();
    let _ = client
        .calculate_cost(&cost_request("org-1", 12, "frozen"))
        .await;
    let _ = client.calculate_cost(&perishable("org-1", -1.0)).await;

    let records = client.list_data().await.unwrap();

    assert!(records.is_empty());
}
