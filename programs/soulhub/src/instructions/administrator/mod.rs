pub mod initialize_administrator_registry;
pub mod set_administrator_status;

pub use initialize_administrator_registry::*;
pub use set_administrator_status::*;
