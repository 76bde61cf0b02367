pub mod binding;

pub mod initialize_soul_registry;
pub mod set_authority;
pub mod set_soul;
pub mod set_soul_with_signature;
pub mod same_soul;

pub use initialize_soul_registry::*;
pub use set_authority::*;
pub use set_soul::*;
pub use set_soul_with_signature::*;
pub use same_soul::*;
