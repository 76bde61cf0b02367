use anchor_lang::prelude::*;

use crate::authority::AdministratorAuthority;
use crate::constants::MAX_ADMINISTRATORS;
use crate::errors::SoulhubError;

/// Owner plus an explicit set of administrator keys.
#[account]
pub struct AdministratorRegistry {
    /// Always treated as an administrator, whatever the set contains
    pub owner: Pubkey,
    /// Keys explicitly granted administrator status
    pub administrators: Vec<Pubkey>,
}

impl AdministratorRegistry {
    pub const SIZE: usize = 8 +            // discriminator
        32 +                                // owner
        4 + 32 * MAX_ADMINISTRATORS;        // administrators

    /// Grant or revoke explicit administrator status.
    ///
    /// Returns whether the set changed. Setting a status the account already
    /// has succeeds without changing anything.
    pub fn set_administrator_status(&mut self, account: Pubkey, is_administrator: bool) -> Result<bool> {
        let position = self.administrators.iter().position(|a| *a == account);

        match (position, is_administrator) {
            (Some(_), true) | (None, false) => Ok(false),
            (None, true) => {
                require!(
                    self.administrators.len() < MAX_ADMINISTRATORS,
                    SoulhubError::AdministratorLimitReached
                );
                self.administrators.push(account);
                Ok(true)
            }
            (Some(index), false) => {
                self.administrators.swap_remove(index);
                Ok(true)
            }
        }
    }
}

impl AdministratorAuthority for AdministratorRegistry {
    fn is_administrator(&self, account: &Pubkey) -> bool {
        *account == self.owner || self.administrators.contains(account)
    }
}
