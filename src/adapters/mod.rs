//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - configurable HTTP responses by URL
//! - [`mock::MockGateway`] - scripted dataset results with a call log

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockGateway, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
