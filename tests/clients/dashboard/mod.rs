pub mod contract;
pub mod fake_service;
