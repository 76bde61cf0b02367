use anchor_lang::prelude::*;
use crate::errors::SoulhubError;
use crate::events::AdministratorStatusChanged;
use crate::state::AdministratorRegistry;

#[derive(Accounts)]
pub struct SetAdministratorStatus<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ SoulhubError::Unauthorized,
    )]
    pub registry: Account<'info, AdministratorRegistry>,
}

pub fn handler(ctx: Context<SetAdministratorStatus>, account: Pubkey, is_administrator: bool) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let changed = registry.set_administrator_status(account, is_administrator)?;

    emit!(AdministratorStatusChanged {
        registry: registry.key(),
        account,
        is_administrator,
    });

    msg!(
        "Administrator status of {} set to {} (changed: {})",
        account,
        is_administrator,
        changed
    );

    Ok(())
}
