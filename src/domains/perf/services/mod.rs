// Perf domain services
pub mod harness;

pub use harness::*;
