use anchor_lang::prelude::*;
use crate::capability::{require_capability, Capability};
use crate::constants::MAX_NAME_LEN;
use crate::errors::SoulhubError;
use crate::state::SoulRegistry;

#[derive(Accounts)]
pub struct InitializeSoulRegistry<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = SoulRegistry::SIZE,
    )]
    pub registry: Account<'info, SoulRegistry>,

    /// Initial administrator authority
    /// CHECK: Probed for the administrator-authority capability in handler
    pub authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeSoulRegistry>, name: String) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, SoulhubError::NameTooLong);
    require_capability(&ctx.accounts.authority, Capability::AdministratorAuthority)?;

    let registry = &mut ctx.accounts.registry;
    registry.owner = ctx.accounts.owner.key();
    registry.authority = ctx.accounts.authority.key();
    registry.name = name;

    msg!(
        "Created soul registry '{}' ({}) with authority {}",
        registry.name,
        registry.key(),
        registry.authority
    );

    Ok(())
}
