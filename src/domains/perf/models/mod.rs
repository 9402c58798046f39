// Perf domain models
pub mod report;

pub use report::*;
