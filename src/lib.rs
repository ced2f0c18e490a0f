//! greeter-service: a minimal HTTP service with a greeting endpoint, a health
//! check, and Prometheus metrics.

pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod services;
pub mod startup;
