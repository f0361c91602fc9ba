//! Backend access: typed contracts, the tagged error, the HTTP client, and
//! one function per REST endpoint.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
