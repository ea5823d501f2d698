pub mod document;
pub mod metrics;
pub mod providers;
pub mod spool;

pub use metrics::{get_metrics, init_metrics};
pub use spool::DocumentSpool;
