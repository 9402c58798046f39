// Shared request middleware / extractors
pub mod auth;
pub mod validated_json;

pub use validated_json::ValidatedJson;
