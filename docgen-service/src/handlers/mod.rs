pub mod generate;
pub mod health;

pub use generate::generate_document;
pub use health::{health_check, liveness, metrics_endpoint, readiness_check};
