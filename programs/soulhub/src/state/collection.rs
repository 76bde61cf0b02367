use anchor_lang::prelude::*;

use crate::authority::{AdministratorAuthority, OwnerOverride};
use crate::constants::{BALANCE_SEED, MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::errors::SoulhubError;
use crate::state::load_if_initialized;

/// A soulbound token collection subscribed to one soul registry.
#[account]
pub struct SoulboundCollection {
    /// Always authorized to mint, burn and lock
    pub owner: Pubkey,
    /// Soul registry deciding soul equality and delegated administration
    pub soul_registry: Pubkey,
    /// Collection name (max 32 bytes)
    pub name: String,
    /// Collection symbol (max 10 bytes)
    pub symbol: String,
}

impl SoulboundCollection {
    pub const SIZE: usize = 8 +     // discriminator
        32 +                         // owner
        32 +                         // soul_registry
        4 + MAX_NAME_LEN +           // name
        4 + MAX_SYMBOL_LEN;          // symbol

    /// Authorization for this collection: its owner, or whoever the soul
    /// registry's authorization accepts.
    pub fn authorization<'a, A>(&self, soul_registry: &'a A) -> OwnerOverride<'a, A>
    where
        A: AdministratorAuthority + ?Sized,
    {
        OwnerOverride::new(self.owner, soul_registry)
    }
}

#[account]
pub struct SoulboundToken {
    /// Collection that minted this token
    pub collection: Pubkey,
    pub token_id: u64,
    /// Current holder
    pub holder: Pubkey,
    /// Locked tokens cannot be transferred (mint and burn are unaffected)
    pub locked: bool,
    /// PDA bump seed
    pub bump: u8,
}

impl SoulboundToken {
    pub const SIZE: usize = 8 + 32 + 8 + 32 + 1 + 1;

    /// Lock or unlock the token. Same authorization as mint and burn.
    pub fn set_lock_status<A>(&mut self, caller: &Pubkey, authorization: &A, locked: bool) -> Result<()>
    where
        A: AdministratorAuthority + ?Sized,
    {
        require!(
            authorization.is_administrator(caller),
            SoulhubError::NotOwnerOrSoulhubAdministrator
        );
        self.locked = locked;
        Ok(())
    }
}

/// Number of tokens of one collection held by one account.
#[account]
pub struct HolderBalance {
    pub collection: Pubkey,
    pub holder: Pubkey,
    pub balance: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl HolderBalance {
    pub const SIZE: usize = 8 + 32 + 32 + 8 + 1;

    pub fn credit(&mut self) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(1)
            .ok_or(SoulhubError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self) -> Result<()> {
        self.balance = self
            .balance
            .checked_sub(1)
            .ok_or(SoulhubError::BalanceUnderflow)?;
        Ok(())
    }

    /// Balance held at `info`, which must be the balance address of `holder`
    /// in `collection`. An address that was never created holds 0.
    pub fn balance_at(info: &AccountInfo, collection: &Pubkey, holder: &Pubkey) -> Result<u64> {
        match load_if_initialized::<HolderBalance>(info)? {
            Some(stored) => {
                // Existing accounts carry their bump, so no search is needed.
                let expected = Pubkey::create_program_address(
                    &[BALANCE_SEED, collection.as_ref(), holder.as_ref(), &[stored.bump]],
                    &crate::ID,
                )
                .map_err(|_| error!(SoulhubError::BalanceAccountMismatch))?;
                require_keys_eq!(info.key(), expected, SoulhubError::BalanceAccountMismatch);
                Ok(stored.balance)
            }
            None => {
                let (expected, _) = Pubkey::find_program_address(
                    &[BALANCE_SEED, collection.as_ref(), holder.as_ref()],
                    &crate::ID,
                );
                require_keys_eq!(info.key(), expected, SoulhubError::BalanceAccountMismatch);
                Ok(0)
            }
        }
    }
}

/// Sum the balances of every member of a soul.
///
/// Computed from the current roster on every call; there is no stored
/// per-soul total to keep in sync.
pub fn balance_of_soul<F>(members: &[Pubkey], mut balance_of: F) -> Result<u64>
where
    F: FnMut(usize, &Pubkey) -> Result<u64>,
{
    members
        .iter()
        .enumerate()
        .try_fold(0u64, |total, (index, member)| {
            let balance = balance_of(index, member)?;
            total
                .checked_add(balance)
                .ok_or_else(|| error!(SoulhubError::ArithmeticOverflow))
        })
}
