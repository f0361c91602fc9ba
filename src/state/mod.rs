//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `dashboard`, `faturas`, etc.) as plain
//! structs with pure transitions. Pages wrap them in `RwSignal`s; the
//! transitions themselves are unit tested without a reactive runtime.

pub mod auth;
pub mod clientes;
pub mod dashboard;
pub mod faturas;
pub mod fetch;
pub mod filters;
pub mod session;
