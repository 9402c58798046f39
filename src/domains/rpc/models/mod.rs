// RPC domain models
pub mod error;
pub mod jsonrpc;
pub mod procedure;

pub use error::*;
pub use jsonrpc::*;
pub use procedure::*;
