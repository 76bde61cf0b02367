use anchor_lang::prelude::*;
use crate::capability::{require_capability, Capability};
use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::errors::SoulhubError;
use crate::state::SoulboundCollection;

#[derive(Accounts)]
pub struct InitializeCollection<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = SoulboundCollection::SIZE,
    )]
    pub collection: Account<'info, SoulboundCollection>,

    /// CHECK: Probed for the soul-registry capability in handler
    pub soul_registry: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeCollection>, name: String, symbol: String) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, SoulhubError::NameTooLong);
    require!(symbol.len() <= MAX_SYMBOL_LEN, SoulhubError::SymbolTooLong);
    require_capability(&ctx.accounts.soul_registry, Capability::SoulRegistry)?;

    let collection = &mut ctx.accounts.collection;
    collection.owner = ctx.accounts.owner.key();
    collection.soul_registry = ctx.accounts.soul_registry.key();
    collection.name = name;
    collection.symbol = symbol;

    msg!(
        "Created collection '{}' ({}) on soul registry {}",
        collection.symbol,
        collection.key(),
        collection.soul_registry
    );

    Ok(())
}
