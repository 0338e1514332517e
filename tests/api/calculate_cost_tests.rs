//! Integration tests for POST /calculate-cost.

use crate::common::*;
use reqwest::StatusCode;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(perishable("org-1", 12.0), "20.5 euros")]
#[case(nonperishable("org-1", 3.0), "10 euros")]
#[case(perishable("org-1", 5.0), "10 euros")]
#[case(nonperishable("org-1", 7.0), "12 euros")]
#[case(perishable("org-1", 6.5), "12.25 euros")]
#[case(cost_request("org-1", "12", "perishable"), "20.5 euros")]
#[case(cost_request("org-1", "12km", "perishable"), "20.5 euros")]
#[case(cost_request("org-1", "12abc", "perishable"), "20.5 euros")]
#[case(perishable("org-1", 1e22), "1.5e+22 euros")]
#[case(cost_request("org-1", 12, "Perishable"), "20.5 euros")]
#[case(cost_request("org-1", 12, "NONPERISHABLE"), "17 euros")]
#[tokio::test]
async fn calculate_cost_returns_total_price(
    #[case] request: serde_json::Value,
    #[case] expected: &str,
) {
    let server = TestServer::start().await;

    let result = server.client().calculate_cost(&request).await;

    assert_success(&result);
    assert_eq!(result.unwrap().total_price, expected);
}

#[rstest]
#[tokio::test]
async fn calculate_cost_records_the_delivery() {
    let server = TestServer::start().await;
    let client = server.client();

    client
        .calculate_cost(&cost_request("005", 12, "Perishable"))
        .await
        .unwrap();

    let records = client.list_data().await.unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.organization_id, "005");
    assert_eq!(record.zone, "central");
    assert!((record.total_distance - 12.0).abs() < f64::EPSILON);
    assert_eq!(record.item_type, "Perishable");
    assert!((record.total_price - 20.5).abs() < f64::EPSILON);
    assert_eq!(record.currency, "euros");
}

#[rstest]
#[tokio::test]
async fn calculate_cost_stores_numeric_organization_and_zone_as_text() {
    let server = TestServer::start().await;
    let client = server.client();
    let request = json!({
        "organization_id": 5,
        "zone": 3,
        "total_distance": 12,
        "item_type": "perishable"
    });

    let result = client.calculate_cost(&request).await;

    assert_success(&result);
    let records = client.list_data().await.unwrap();
    assert_eq!(records[0].organization_id, "5");
    assert_eq!(records[0].zone, "3");
}

#[rstest]
#[case("organization_id")]
#[case("zone")]
#[case("total_distance")]
#[case("item_type")]
#[tokio::test]
async fn calculate_cost_without_field_is_rejected(#[case] field: &str) {
    let server = TestServer::start().await;

    let result = server
        .client()
        .calculate_cost(&without(perishable("org-1", 12.0), field))
        .await;

    assert_bad_request(&result, "Missing required fields");
    assert!(server.store.is_empty().await);
}

#[rstest]
#[tokio::test]
async fn calculate_cost_with_empty_body_is_rejected() {
    let server = TestServer::start().await;

    let result = server.client().calculate_cost(&json!({})).await;

    assert_bad_request(&result, "Missing required fields");
}

#[rstest]
#[tokio::test]
async fn calculate_cost_with_empty_organization_is_rejected() {
    let server = TestServer::start().await;

    let result = server
        .client()
        .calculate_cost(&cost_request("", 12, "perishable"))
        .await;

    assert_bad_request(&result, "Missing required fields");
}

#[rstest]
#[case("frozen")]
#[case("perish able")]
#[case("fragile")]
#[tokio::test]
async fn calculate_cost_with_unknown_item_type_is_rejected(#[case] item_type: &str) {
    let server = TestServer::start().await;

    let result = server
        .client()
        .calculate_cost(&cost_request("org-1", 12, item_type))
        .await;

    assert_bad_request(&result, "Invalid item type");
    assert!(server.store.is_empty().await);
}

#[rstest]
#[case(json!(0))]
#[case(json!(-5))]
#[case(json!("abc"))]
#[case(json!("-1"))]
#[case(json!(true))]
#[tokio::test]
async fn calculate_cost_with_invalid_distance_is_rejected(#[case] distance: serde_json::Value) {
    let server = TestServer::start().await;

    let result = server
        .client()
        .calculate_cost(&cost_request("org-1", distance, "perishable"))
        .await;

    assert_bad_request(&result, "Invalid distance");
    assert!(server.store.is_empty().await);
}

#[rstest]
#[tokio::test]
async fn calculate_cost_reports_item_type_before_distance() {
    let server = TestServer::start().await;

    let result = server
        .client()
        .calculate_cost(&cost_request("org-1", "abc", "frozen"))
        .await;

    assert_bad_request(&result, "Invalid item type");
}

#[rstest]
#[tokio::test]
async fn calculate_cost_without_json_content_type_is_missing_fields() {
    let server = TestServer::start().await;

    let result = server
        .client()
        .post_raw("/calculate-cost", "text/plain", "organization_id=1")
        .await;

    assert_bad_request(&result, "Missing required fields");
}

#[rstest]
#[tokio::test]
async fn calculate_cost_with_malformed_json_is_bad_request() {
    let server = TestServer::start().await;

    let result = server
        .client()
        .post_raw("/calculate-cost", "application/json", "{\"zone\": ")
        .await;

    match result {
        Err(ApiError::Api { status, .. }) => assert_eq!(status, StatusCode::BAD_REQUEST),
        other => panic!("Expected 400, got {other:?}"),
    }
    assert!(server.store.is_empty().await);
}
