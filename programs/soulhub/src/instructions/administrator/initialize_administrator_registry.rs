use anchor_lang::prelude::*;
use crate::state::AdministratorRegistry;

#[derive(Accounts)]
pub struct InitializeAdministratorRegistry<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = AdministratorRegistry::SIZE,
    )]
    pub registry: Account<'info, AdministratorRegistry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeAdministratorRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.owner = ctx.accounts.owner.key();
    registry.administrators = Vec::new();

    msg!(
        "Created administrator registry {} owned by {}",
        registry.key(),
        registry.owner
    );

    Ok(())
}
