// Demo domain handlers
pub mod demo_handler;

pub use demo_handler::*;
