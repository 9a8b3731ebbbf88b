//! Shared test utilities

pub mod mock_platform;
