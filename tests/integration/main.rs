//! Integration tests across storage, provider and HTTP layers.

mod provider_tests;
mod server_tests;
mod storage_tests;
