//! Top-level dashboard views.

pub mod data_table;
pub mod flow;
pub mod log_detail;
pub mod search;
pub mod welcome;
