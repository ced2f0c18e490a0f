//! HTTP handlers for greeter-service, one module per route.

pub mod health;
pub mod home;
pub mod metrics;

pub use health::healthz;
pub use home::home;
pub use metrics::metrics;
