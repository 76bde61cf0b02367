#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

pub mod authority;
pub mod capability;
pub mod constants;
pub mod errors;
pub mod events;
pub mod gate;
pub mod instructions;
pub mod signature;
pub mod state;

use instructions::*;

declare_id!("5ou1hubY1VgJ3p7N2Zs2c9xR8m4KqQ4aD6tLw3eHfBmC");

#[program]
pub mod soulhub {
    use super::*;

    // === Administrator Registry ===

    /// Create an administrator registry owned by the signer
    pub fn initialize_administrator_registry(
        ctx: Context<InitializeAdministratorRegistry>,
    ) -> Result<()> {
        instructions::administrator::initialize_administrator_registry::handler(ctx)
    }

    /// Grant or revoke administrator status
    pub fn set_administrator_status(
        ctx: Context<SetAdministratorStatus>,
        account: Pubkey,
        is_administrator: bool,
    ) -> Result<()> {
        instructions::administrator::set_administrator_status::handler(ctx, account, is_administrator)
    }

    pub fn transfer_administrator_registry_ownership(
        ctx: Context<TransferAdministratorRegistryOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_ownership::transfer_administrator_registry_ownership(ctx, new_owner)
    }

    // === Soul Registry ===

    /// Create a soul registry delegating administration to `authority`
    pub fn initialize_soul_registry(
        ctx: Context<InitializeSoulRegistry>,
        name: String,
    ) -> Result<()> {
        instructions::soul_registry::initialize_soul_registry::handler(ctx, name)
    }

    /// Swap the administrator authority consulted by the soul registry
    pub fn set_authority(ctx: Context<SetAuthority>) -> Result<()> {
        instructions::soul_registry::set_authority::handler(ctx)
    }

    pub fn transfer_soul_registry_ownership(
        ctx: Context<TransferSoulRegistryOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_ownership::transfer_soul_registry_ownership(ctx, new_owner)
    }

    // === Soul Binding ===

    /// Bind, rebind or unbind (`target_soul == 0`) an account as an administrator
    pub fn set_soul(
        ctx: Context<SetSoul>,
        account: Pubkey,
        target_soul: u64,
    ) -> Result<()> {
        instructions::soul_registry::set_soul::handler(ctx, account, target_soul)
    }

    /// Bind the signing account using an administrator's Ed25519 signature
    pub fn set_soul_with_signature(
        ctx: Context<SetSoulWithSignature>,
        target_soul: u64,
        nonce: u64,
        signer: Pubkey,
    ) -> Result<()> {
        instructions::soul_registry::set_soul_with_signature::handler(ctx, target_soul, nonce, signer)
    }

    /// Whether `a` and `b` are bound to the same soul
    pub fn same_soul(ctx: Context<SameSoul>, a: Pubkey, b: Pubkey) -> Result<bool> {
        instructions::soul_registry::same_soul::handler(ctx, a, b)
    }

    // === Soulbound Collection ===

    pub fn initialize_collection(
        ctx: Context<InitializeCollection>,
        name: String,
        symbol: String,
    ) -> Result<()> {
        instructions::collection::initialize_collection::handler(ctx, name, symbol)
    }

    /// Point the collection at a different soul registry
    pub fn subscribe_soul_registry(ctx: Context<SubscribeSoulRegistry>) -> Result<()> {
        instructions::collection::subscribe_soul_registry::handler(ctx)
    }

    pub fn transfer_collection_ownership(
        ctx: Context<TransferCollectionOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_ownership::transfer_collection_ownership(ctx, new_owner)
    }

    pub fn mint(ctx: Context<MintToken>, token_id: u64, to: Pubkey) -> Result<()> {
        instructions::collection::mint::handler(ctx, token_id, to)
    }

    pub fn burn(ctx: Context<BurnToken>, token_id: u64) -> Result<()> {
        instructions::collection::burn::handler(ctx, token_id)
    }

    /// Move a token between two accounts of the same soul
    pub fn transfer(ctx: Context<TransferToken>, token_id: u64, to: Pubkey) -> Result<()> {
        instructions::collection::transfer::handler(ctx, token_id, to)
    }

    pub fn set_token_lock_status(
        ctx: Context<SetTokenLockStatus>,
        token_id: u64,
        locked: bool,
    ) -> Result<()> {
        instructions::collection::set_token_lock_status::handler(ctx, token_id, locked)
    }

    /// Total balance held by every account currently bound to `soul`
    pub fn balance_of_soul(ctx: Context<BalanceOfSoul>, soul: u64) -> Result<u64> {
        instructions::collection::balance_of_soul::handler(ctx, soul)
    }
}
