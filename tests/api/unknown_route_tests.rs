//! Integration tests for the 404 fallback.

use crate::common::*;
use reqwest::Method;
use rstest::rstest;

#[rstest]
#[case(Method::GET, "/")]
#[case(Method::GET, "/health")]
#[case(Method::POST, "/data")]
#[case(Method::PUT, "/data")]
#[case(Method::GET, "/calculate-cost")]
#[case(Method::PATCH, "/data/org-1")]
#[case(Method::DELETE, "/data/org-1/records")]
#[case(Method::GET, "/calculate-cost/extra")]
#[tokio::test]
async fn unmatched_requests_return_unknown_request(#[case] method: Method, #[case] path: &str) {
    let server = TestServer::start().await;

    let result = server.client().raw(method, path).await;

    assert_unknown_request(&result);
}
