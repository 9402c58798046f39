// BFF server library: auth service, in-memory token store, demo endpoints,
// JSON-RPC facade and the sequential/parallel timing harness
pub mod app;
pub mod cli;
pub mod domains;
pub mod routes;
pub mod shared;
