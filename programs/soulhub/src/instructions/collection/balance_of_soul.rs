use anchor_lang::prelude::*;
use crate::constants::SOUL_ROSTER_SEED;
use crate::errors::SoulhubError;
use crate::state::{self, HolderBalance, SoulRoster, SoulboundCollection};

/// Member balance accounts are passed as remaining accounts, one per roster
/// member and in roster order. A member that never held a token may pass its
/// uninitialized balance address.
#[derive(Accounts)]
#[instruction(soul: u64)]
pub struct BalanceOfSoul<'info> {
    #[account(
        has_one = soul_registry @ SoulhubError::SoulRegistryMismatch,
    )]
    pub collection: Account<'info, SoulboundCollection>,

    /// CHECK: Only used as a seed; pinned by the collection's has_one
    pub soul_registry: UncheckedAccount<'info>,

    /// CHECK: Roster address of `soul`, pinned by seeds; uninitialized when no
    /// account was ever bound to `soul`
    #[account(
        seeds = [SOUL_ROSTER_SEED, soul_registry.key().as_ref(), &soul.to_le_bytes()],
        bump,
    )]
    pub roster: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<BalanceOfSoul>, _soul: u64) -> Result<u64> {
    let members = SoulRoster::members_at(&ctx.accounts.roster)?;
    let balances = ctx.remaining_accounts;
    require!(balances.len() == members.len(), SoulhubError::BalanceAccountMismatch);

    let collection = ctx.accounts.collection.key();
    state::balance_of_soul(&members, |index, member| {
        HolderBalance::balance_at(&balances[index], &collection, member)
    })
}
