//! Lead qualification and ten-question ESG assessment scoring for ESG Navigator.
//!
//! The scoring procedures are pure functions; the workflow modules wrap them in
//! services, repositories, and axum routers so the API binary can compose them.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
