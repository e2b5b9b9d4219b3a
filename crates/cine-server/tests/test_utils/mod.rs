//! Shared test utilities for cine-server

pub mod mock_services;
