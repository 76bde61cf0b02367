use anchor_lang::prelude::*;
use crate::constants::{BALANCE_SEED, NULL_SOUL, TOKEN_SEED};
use crate::errors::SoulhubError;
use crate::gate::{check_token_transfer_eligibility, TransferRequest};
use crate::state::{
    AdministratorRegistry, HolderBalance, SoulRegistry, SoulboundCollection, SoulboundToken,
};

#[derive(Accounts)]
#[instruction(token_id: u64, to: Pubkey)]
pub struct MintToken<'info> {
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
        init,
        payer = administrator,
        space = SoulboundToken::SIZE,
        seeds = [TOKEN_SEED, collection.key().as_ref(), &token_id.to_le_bytes()],
        bump,
    )]
    pub token: Account<'info, SoulboundToken>,

    #[account(
        init_if_needed,
        payer = administrator,
        space = HolderBalance::SIZE,
        seeds = [BALANCE_SEED, collection.key().as_ref(), to.as_ref()],
        bump,
    )]
    pub balance: Account<'info, HolderBalance>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintToken>, token_id: u64, to: Pubkey) -> Result<()> {
    require!(to != Pubkey::default(), SoulhubError::InvalidRecipient);

    let accounts = &mut *ctx.accounts;
    let collection = accounts.collection.key();

    let registry_authorization = accounts.soul_registry.authorization(&*accounts.authority);
    let authorization = accounts.collection.authorization(&registry_authorization);
    check_token_transfer_eligibility(
        &TransferRequest {
            caller: &accounts.administrator.key(),
            from: &Pubkey::default(),
            to: &to,
            token_id,
            locked: false,
            from_soul: NULL_SOUL,
            to_soul: NULL_SOUL,
        },
        &authorization,
    )?;

    let token = &mut accounts.token;
    token.collection = collection;
    token.token_id = token_id;
    token.holder = to;
    token.locked = false;
    token.bump = ctx.bumps.token;

    let balance = &mut accounts.balance;
    if balance.collection == Pubkey::default() {
        balance.collection = collection;
        balance.holder = to;
        balance.bump = ctx.bumps.balance;
    }
    balance.credit()?;

    msg!("Minted token {} of {} to {}", token_id, collection, to);
    Ok(())
}
