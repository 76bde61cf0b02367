pub mod administrator;
pub mod soul_registry;
pub mod collection;
pub mod transfer_ownership;

pub use administrator::*;
pub use soul_registry::*;
pub use collection::*;
pub use transfer_ownership::*;
