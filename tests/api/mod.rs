//! API integration tests for the delivery pricing service.

pub mod calculate_cost_tests;
pub mod data_tests;
pub mod delete_tests;
pub mod unknown_route_tests;
