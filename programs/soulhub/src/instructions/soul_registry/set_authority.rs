use anchor_lang::prelude::*;
use crate::capability::{require_capability, Capability};
use crate::errors::SoulhubError;
use crate::events::AuthorityChanged;
use crate::state::SoulRegistry;

#[derive(Accounts)]
pub struct SetAuthority<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ SoulhubError::Unauthorized,
    )]
    pub registry: Account<'info, SoulRegistry>,

    /// CHECK: Probed for the administrator-authority capability in handler
    pub new_authority: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<SetAuthority>) -> Result<()> {
    require_capability(&ctx.accounts.new_authority, Capability::AdministratorAuthority)?;

    let registry = &mut ctx.accounts.registry;
    registry.authority = ctx.accounts.new_authority.key();

    emit!(AuthorityChanged {
        registry: registry.key(),
        authority: registry.authority,
    });

    msg!("Set soul registry authority to {}", registry.authority);
    Ok(())
}
