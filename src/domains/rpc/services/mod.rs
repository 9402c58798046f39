// RPC domain services
pub mod context;
pub mod rpc_service;
pub mod state;

pub use context::*;
pub use rpc_service::*;
pub use state::*;
