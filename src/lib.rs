//! # lumi-dashboard
//!
//! Leptos + WASM frontend for the Lumi Energia billing dashboard.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST client. Authenticated users see consumption and financial
//! summaries and browse, filter, upload, and download invoice PDFs served by
//! the billing backend.
//!
//! Browser-only code lives behind the `csr` feature; without it every browser
//! call compiles to a no-op so the state machines are unit tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;
