//! Nutrimix Tools module
//!
//! MCP tool implementations for the recipe calculator.

pub mod calculator;
pub mod status;
