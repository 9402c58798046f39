// Domain modules
pub mod auth;
pub mod demo;
pub mod perf;
pub mod rpc;
