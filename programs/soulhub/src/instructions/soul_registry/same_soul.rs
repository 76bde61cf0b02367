use anchor_lang::prelude::*;
use crate::constants::SOUL_BINDING_SEED;
use crate::state::{same_soul, SoulBinding, SoulRegistry};

// Both binding addresses are required and pinned by their seeds. An address
// that was never initialized reads as unbound.

#[derive(Accounts)]
#[instruction(a: Pubkey, b: Pubkey)]
pub struct SameSoul<'info> {
    pub registry: Account<'info, SoulRegistry>,

    /// CHECK: Binding address of `a`, pinned by seeds; may be uninitialized
    #[account(
        seeds = [SOUL_BINDING_SEED, registry.key().as_ref(), a.as_ref()],
        bump,
    )]
    pub binding_a: UncheckedAccount<'info>,

    /// CHECK: Binding address of `b`, pinned by seeds; may be uninitialized
    #[account(
        seeds = [SOUL_BINDING_SEED, registry.key().as_ref(), b.as_ref()],
        bump,
    )]
    pub binding_b: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<SameSoul>, _a: Pubkey, _b: Pubkey) -> Result<bool> {
    let soul_a = SoulBinding::soul_at(&ctx.accounts.binding_a)?;
    let soul_b = SoulBinding::soul_at(&ctx.accounts.binding_b)?;
    Ok(same_soul(soul_a, soul_b))
}
