use anchor_lang::prelude::*;
use crate::constants::TOKEN_SEED;
use crate::errors::SoulhubError;
use crate::events::TokenLockStatusChanged;
use crate::state::{AdministratorRegistry, SoulRegistry, SoulboundCollection, SoulboundToken};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct SetTokenLockStatus<'info> {
    pub administrator: Signer<'info>,

    #[account(
        has_one = soul_registry @ SoulhubError::SoulRegistryMismatch,
    )]
    pub collection: Account<'info, SoulboundCollection>,

    #[account(
        has_one = authority @ SoulhubError::AuthorityMismatch,
    )]
    pub soul_registry: Account<'info, SoulRegistry>,

    pub authority: Account<'info, AdministratorRegistry>,

    #[account(
        mut,
        seeds = [TOKEN_SEED, collection.key().as_ref(), &token_id.to_le_bytes()],
        bump = token.bump,
    )]
    pub token: Account<'info, SoulboundToken>,
}

pub fn handler(ctx: Context<SetTokenLockStatus>, token_id: u64, locked: bool) -> Result<()> {
    let accounts = &mut *ctx.accounts;

    let registry_authorization = accounts.soul_registry.authorization(&*accounts.authority);
    let authorization = accounts.collection.authorization(&registry_authorization);
    accounts
        .token
        .set_lock_status(&accounts.administrator.key(), &authorization, locked)?;

    emit!(TokenLockStatusChanged {
        collection: accounts.collection.key(),
        token_id,
        locked,
    });

    msg!("Token {} lock status set to {}", token_id, locked);
    Ok(())
}
