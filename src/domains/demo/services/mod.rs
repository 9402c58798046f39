// Demo domain services
pub mod shared_counter;
pub mod state;

pub use shared_counter::*;
pub use state::*;
