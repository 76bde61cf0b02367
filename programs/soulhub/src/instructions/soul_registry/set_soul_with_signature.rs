use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as sysvar_instructions;
use crate::constants::{SOUL_BINDING_SEED, SOUL_ROSTER_SEED};
use crate::errors::SoulhubError;
use crate::events::SoulBound;
use crate::instructions::soul_registry::binding::{
    init_binding, set_soul_with_signed_message, SoulChange,
};
use crate::signature::load_signed_message;
use crate::state::{AdministratorRegistry, SoulBinding, SoulRegistry, SoulRoster};

// =============================================================================
// SET SOUL WITH SIGNATURE
// =============================================================================
//
// The account being bound submits the transaction itself, carrying an
// administrator's Ed25519 signature over
//   keccak(tag | registry | account | soul | nonce)
// in the preceding Ed25519 precompile instruction. The per-account nonce is
// consumed here, so each signature binds at most once.
// =============================================================================

#[derive(Accounts)]
#[instruction(target_soul: u64)]
pub struct SetSoulWithSignature<'info> {
    /// The account being bound
    #[account(mut)]
    pub account: Signer<'info>,

    #[account(
        has_one = authority @ SoulhubError::AuthorityMismatch,
    )]
    pub registry: Account<'info, SoulRegistry>,

    pub authority: Account<'info, AdministratorRegistry>,

    #[account(
        init_if_needed,
        payer = account,
        space = SoulBinding::SIZE,
        seeds = [SOUL_BINDING_SEED, registry.key().as_ref(), account.key().as_ref()],
        bump,
    )]
    pub binding: Account<'info, SoulBinding>,

    #[account(
        mut,
        seeds = [SOUL_ROSTER_SEED, registry.key().as_ref(), &binding.soul.to_le_bytes()],
        bump = current_roster.bump,
    )]
    pub current_roster: Option<Account<'info, SoulRoster>>,

    #[account(
        init_if_needed,
        payer = account,
        space = SoulRoster::SIZE,
        seeds = [SOUL_ROSTER_SEED, registry.key().as_ref(), &target_soul.to_le_bytes()],
        bump,
    )]
    pub target_roster: Option<Account<'info, SoulRoster>>,

    /// CHECK: Address constrained to the instructions sysvar
    #[account(address = sysvar_instructions::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<SetSoulWithSignature>,
    target_soul: u64,
    nonce: u64,
    signer: Pubkey,
) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    let registry = accounts.registry.key();
    let account = accounts.account.key();

    let binding = &mut accounts.binding;
    init_binding(binding, registry, account, ctx.bumps.binding)?;

    let signed = load_signed_message(&accounts.instructions_sysvar.to_account_info())?;
    let authorization = accounts.registry.authorization(&*accounts.authority);
    let signer = set_soul_with_signed_message(
        SoulChange {
            registry,
            target_soul,
            current_roster: accounts.current_roster.as_deref_mut(),
            target_roster: accounts.target_roster.as_deref_mut().zip(ctx.bumps.target_roster),
        },
        binding,
        nonce,
        &signer,
        &signed,
        &authorization,
    )?;

    emit!(SoulBound {
        registry,
        account,
        soul: target_soul,
        nonce: Some(nonce),
        signer: Some(signer),
    });

    msg!(
        "Bound {} to soul {} (nonce {}, signed by {})",
        account,
        target_soul,
        nonce,
        signer
    );
    Ok(())
}
