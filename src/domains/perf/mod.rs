// Perf domain module (sequential vs parallel timing harness)
pub mod models;
pub mod services;

pub use models::*;
pub use services::*;
