use anchor_lang::prelude::*;
use crate::constants::{BALANCE_SEED, NULL_SOUL, TOKEN_SEED};
use crate::errors::SoulhubError;
use crate::gate::{check_token_transfer_eligibility, TransferRequest};
use crate::state::{
    AdministratorRegistry, HolderBalance, SoulRegistry, SoulboundCollection, SoulboundToken,
};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct BurnToken<'info> {
    /// Receives the token account's rent
    #[account(mut)]
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
        close = administrator,
        seeds = [TOKEN_SEED, collection.key().as_ref(), &token_id.to_le_bytes()],
        bump = token.bump,
    )]
    pub token: Account<'info, SoulboundToken>,

    #[account(
        mut,
        seeds = [BALANCE_SEED, collection.key().as_ref(), token.holder.as_ref()],
        bump = balance.bump,
    )]
    pub balance: Account<'info, HolderBalance>,
}

pub fn handler(ctx: Context<BurnToken>, token_id: u64) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    let holder = accounts.token.holder;

    let registry_authorization = accounts.soul_registry.authorization(&*accounts.authority);
    let authorization = accounts.collection.authorization(&registry_authorization);
    check_token_transfer_eligibility(
        &TransferRequest {
            caller: &accounts.administrator.key(),
            from: &holder,
            to: &Pubkey::default(),
            token_id,
            locked: accounts.token.locked,
            from_soul: NULL_SOUL,
            to_soul: NULL_SOUL,
        },
        &authorization,
    )?;

    accounts.balance.debit()?;

    msg!("Burned token {} of {} held by {}", token_id, accounts.collection.key(), holder);
    Ok(())
}
