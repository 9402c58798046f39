// Shared errors
pub mod auth_error;
pub mod client_error;

pub use auth_error::*;
pub use client_error::*;
