// Auth domain models
pub mod auth;
pub mod jwt;
pub mod token_record;

pub use auth::*;
pub use jwt::*;
pub use token_record::*;
