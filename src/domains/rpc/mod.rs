// RPC domain module
// 타입이 있는 프로시저 -> HTTP 엔드포인트 포워딩
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::*;
pub use routes::*;
pub use services::*;
