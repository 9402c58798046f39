// Demo domain models
pub mod demo;

pub use demo::*;
