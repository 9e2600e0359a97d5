//! Test doubles for the trait abstractions.

pub mod gateway;
pub mod http;

pub use gateway::{GatewayCall, MockGateway};
pub use http::{MockHttpClient, MockResponse};
