//! # Zmanim MCP Server Core
//!
//! This module provides the request/response plumbing around the
//! `zmanim-core` calculator.
//!
//! ## Modules
//! - `error`: Custom error types and error handling
//! - `models`: Data structures for requests and per-tool reports
//! - `validation`: Field-level request validation
//! - `provider`: Calendar construction and query dispatch
//! - `render`: Markdown and JSON renderers for the reports
//! - `utils`: Helper functions for time formatting

pub mod error;
pub mod models;
pub mod provider;
pub mod render;
pub mod utils;
pub mod validation;
