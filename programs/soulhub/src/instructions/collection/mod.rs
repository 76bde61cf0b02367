pub mod initialize_collection;
pub mod subscribe_soul_registry;
pub mod mint;
pub mod burn;
pub mod transfer;
pub mod set_token_lock_status;
pub mod balance_of_soul;

pub use initialize_collection::*;
pub use subscribe_soul_registry::*;
pub use mint::*;
pub use burn::*;
pub use transfer::*;
pub use set_token_lock_status::*;
pub use balance_of_soul::*;
