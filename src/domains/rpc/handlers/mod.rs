// RPC domain handlers
pub mod rpc_handler;

pub use rpc_handler::*;
