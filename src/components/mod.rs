//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the protected shell (guard, navbar) and the building
//! blocks the dashboard and invoice views share: filter controls, cards,
//! charts, table rows, and the transient notice.

pub mod cliente_select;
pub mod fatura_row;
pub mod filter_actions;
pub mod navbar;
pub mod notification;
pub mod require_auth;
pub mod series_chart;
pub mod summary_card;
