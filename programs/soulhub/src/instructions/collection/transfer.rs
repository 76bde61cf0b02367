use anchor_lang::prelude::*;
use crate::constants::{BALANCE_SEED, SOUL_BINDING_SEED, TOKEN_SEED};
use crate::errors::SoulhubError;
use crate::gate::{check_token_transfer_eligibility, TransferRequest};
use crate::state::{
    AdministratorRegistry, HolderBalance, SoulBinding, SoulRegistry, SoulboundCollection,
    SoulboundToken,
};

#[derive(Accounts)]
#[instruction(token_id: u64, to: Pubkey)]
pub struct TransferToken<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,

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
        constraint = token.holder == holder.key() @ SoulhubError::NotTokenHolder,
    )]
    pub token: Account<'info, SoulboundToken>,

    /// Soul binding of the holder; omitted when the holder was never bound
    #[account(
        seeds = [SOUL_BINDING_SEED, soul_registry.key().as_ref(), holder.key().as_ref()],
        bump = from_binding.bump,
    )]
    pub from_binding: Option<Account<'info, SoulBinding>>,

    /// Soul binding of the recipient; omitted when the recipient was never bound
    #[account(
        seeds = [SOUL_BINDING_SEED, soul_registry.key().as_ref(), to.as_ref()],
        bump = to_binding.bump,
    )]
    pub to_binding: Option<Account<'info, SoulBinding>>,

    #[account(
        mut,
        seeds = [BALANCE_SEED, collection.key().as_ref(), holder.key().as_ref()],
        bump = from_balance.bump,
    )]
    pub from_balance: Account<'info, HolderBalance>,

    #[account(
        init_if_needed,
        payer = holder,
        space = HolderBalance::SIZE,
        seeds = [BALANCE_SEED, collection.key().as_ref(), to.as_ref()],
        bump,
    )]
    pub to_balance: Account<'info, HolderBalance>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<TransferToken>, token_id: u64, to: Pubkey) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    let from = accounts.holder.key();
    let collection = accounts.collection.key();

    // A self-transfer would alias the two balance accounts.
    require!(to != Pubkey::default() && to != from, SoulhubError::InvalidRecipient);

    let registry_authorization = accounts.soul_registry.authorization(&*accounts.authority);
    let authorization = accounts.collection.authorization(&registry_authorization);
    check_token_transfer_eligibility(
        &TransferRequest {
            caller: &from,
            from: &from,
            to: &to,
            token_id,
            locked: accounts.token.locked,
            from_soul: SoulBinding::soul_of(accounts.from_binding.as_deref()),
            to_soul: SoulBinding::soul_of(accounts.to_binding.as_deref()),
        },
        &authorization,
    )?;

    accounts.from_balance.debit()?;

    let to_balance = &mut accounts.to_balance;
    if to_balance.collection == Pubkey::default() {
        to_balance.collection = collection;
        to_balance.holder = to;
        to_balance.bump = ctx.bumps.to_balance;
    }
    to_balance.credit()?;

    accounts.token.holder = to;

    msg!("Transferred token {} of {} from {} to {}", token_id, collection, from, to);
    Ok(())
}
