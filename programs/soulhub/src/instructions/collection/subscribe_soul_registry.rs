use anchor_lang::prelude::*;
use crate::capability::{require_capability, Capability};
use crate::errors::SoulhubError;
use crate::events::SoulRegistrySubscribed;
use crate::state::SoulboundCollection;

#[derive(Accounts)]
pub struct SubscribeSoulRegistry<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ SoulhubError::Unauthorized,
    )]
    pub collection: Account<'info, SoulboundCollection>,

    /// CHECK: Probed for the soul-registry capability in handler
    pub soul_registry: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<SubscribeSoulRegistry>) -> Result<()> {
    require_capability(&ctx.accounts.soul_registry, Capability::SoulRegistry)?;

    let collection = &mut ctx.accounts.collection;
    collection.soul_registry = ctx.accounts.soul_registry.key();

    emit!(SoulRegistrySubscribed {
        collection: collection.key(),
        soul_registry: collection.soul_registry,
    });

    msg!("Collection {} subscribed to soul registry {}", collection.key(), collection.soul_registry);
    Ok(())
}
