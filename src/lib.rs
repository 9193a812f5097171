//! Nutrimix Library
//!
//! Nutritional recipe quantity calculator: sizes a recipe's ingredients for
//! each fitness goal and scores the result against the goal's targets.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
