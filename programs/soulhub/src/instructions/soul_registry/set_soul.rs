use anchor_lang::prelude::*;
use crate::constants::{SOUL_BINDING_SEED, SOUL_ROSTER_SEED};
use crate::errors::SoulhubError;
use crate::events::SoulBound;
use crate::instructions::soul_registry::binding::{init_binding, set_soul_as_administrator, SoulChange};
use crate::state::{AdministratorRegistry, SoulBinding, SoulRegistry, SoulRoster};

#[derive(Accounts)]
#[instruction(account: Pubkey, target_soul: u64)]
pub struct SetSoul<'info> {
    /// Must be an administrator of the registry
    #[account(mut)]
    pub administrator: Signer<'info>,

    #[account(
        has_one = authority @ SoulhubError::AuthorityMismatch,
    )]
    pub registry: Account<'info, SoulRegistry>,

    pub authority: Account<'info, AdministratorRegistry>,

    #[account(
        init_if_needed,
        payer = administrator,
        space = SoulBinding::SIZE,
        seeds = [SOUL_BINDING_SEED, registry.key().as_ref(), account.as_ref()],
        bump,
    )]
    pub binding: Account<'info, SoulBinding>,

    /// Roster of the soul the account currently has (omit when unbound)
    #[account(
        mut,
        seeds = [SOUL_ROSTER_SEED, registry.key().as_ref(), &binding.soul.to_le_bytes()],
        bump = current_roster.bump,
    )]
    pub current_roster: Option<Account<'info, SoulRoster>>,

    /// Roster of the target soul (omit when unbinding)
    #[account(
        init_if_needed,
        payer = administrator,
        space = SoulRoster::SIZE,
        seeds = [SOUL_ROSTER_SEED, registry.key().as_ref(), &target_soul.to_le_bytes()],
        bump,
    )]
    pub target_roster: Option<Account<'info, SoulRoster>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SetSoul>, account: Pubkey, target_soul: u64) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    let registry = accounts.registry.key();

    let binding = &mut accounts.binding;
    init_binding(binding, registry, account, ctx.bumps.binding)?;

    let authorization = accounts.registry.authorization(&*accounts.authority);
    set_soul_as_administrator(
        SoulChange {
            registry,
            target_soul,
            current_roster: accounts.current_roster.as_deref_mut(),
            target_roster: accounts.target_roster.as_deref_mut().zip(ctx.bumps.target_roster),
        },
        binding,
        &accounts.administrator.key(),
        &authorization,
    )?;

    emit!(SoulBound {
        registry,
        account,
        soul: target_soul,
        nonce: None,
        signer: None,
    });

    msg!("Bound {} to soul {}", account, target_soul);
    Ok(())
}
