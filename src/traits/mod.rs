//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET against an arbitrary URL
//! - [`DataGateway`] - the three read operations of the remote dataset

pub mod gateway;
pub mod http;

pub use gateway::DataGateway;
pub use http::{HttpClient, HttpError, Response};
