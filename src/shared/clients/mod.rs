// External HTTP clients
pub mod bff_client;

pub use bff_client::*;
