//! Custom assertion helpers for integration tests.

use super::client::{ApiError, ApiResult};
use reqwest::StatusCode;

pub fn assert_api_error<T: std::fmt::Debug>(
    result: &ApiResult<T>,
    expected_error: &str,
    expected_status: StatusCode,
) {
    match result {
        Err(ApiError::Api { status, error }) => {
            assert_eq!(
                *status, expected_status,
                "Expected status {expected_status}, got {status}"
            );
            assert_eq!(
                error, expected_error,
                "Expected error '{expected_error}', got '{error}'"
            );
        }
        Err(ApiError::Http(e)) => {
            panic!("Expected API error '{expected_error}', got HTTP error: {e:?}");
        }
        Ok(v) => {
            panic!("Expected API error '{expected_error}', got success: {v:?}");
        }
    }
}

pub fn assert_bad_request<T: std::fmt::Debug>(result: &ApiResult<T>, expected_error: &str) {
    assert_api_error(result, expected_error, StatusCode::BAD_REQUEST);
}

pub fn assert_unknown_request<T: std::fmt::Debug>(result: &ApiResult<T>) {
    assert_api_error(result, "Unknown request", StatusCode::NOT_FOUND);
}

pub fn assert_success<T: std::fmt::Debug>(result: &ApiResult<T>) {
    assert!(result.is_ok(), "Expected success, got error: {result:?}");
}
