// =============================================================================
// SOULHUB STATE MODULE
// =============================================================================
//
// - AdministratorRegistry: owner + explicit administrator set
// - SoulRegistry / SoulBinding / SoulRoster: account <-> soul assignment
// - SoulboundCollection / SoulboundToken / HolderBalance: the token ledger
//   whose transfers are gated by soul equality and lock status
// =============================================================================

pub mod administrator_registry;
pub mod soul_registry;
pub mod collection;

pub use administrator_registry::*;
pub use soul_registry::*;
pub use collection::*;

use anchor_lang::prelude::*;

/// Deserialize an account this program created, or `None` when the address
/// was never initialized (or has since been closed).
pub fn load_if_initialized<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    if *info.owner != crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}
