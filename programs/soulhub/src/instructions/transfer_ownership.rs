use anchor_lang::prelude::*;
use crate::errors::SoulhubError;
use crate::events::OwnershipTransferred;
use crate::state::{AdministratorRegistry, SoulRegistry, SoulboundCollection};

// Every registry and collection has a single owner who is always authorized
// on it. Ownership moves only by the current owner's signature.

#[derive(Accounts)]
pub struct TransferAdministratorRegistryOwnership<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ SoulhubError::Unauthorized,
    )]
    pub registry: Account<'info, AdministratorRegistry>,
}

#[derive(Accounts)]
pub struct TransferSoulRegistryOwnership<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ SoulhubError::Unauthorized,
    )]
    pub registry: Account<'info, SoulRegistry>,
}

#[derive(Accounts)]
pub struct TransferCollectionOwnership<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ SoulhubError::Unauthorized,
    )]
    pub collection: Account<'info, SoulboundCollection>,
}

fn transfer_owner(target: Pubkey, owner: &mut Pubkey, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), SoulhubError::InvalidOwner);

    let previous_owner = std::mem::replace(owner, new_owner);

    emit!(OwnershipTransferred {
        target,
        previous_owner,
        new_owner,
    });

    msg!("Ownership of {} transferred from {} to {}", target, previous_owner, new_owner);
    Ok(())
}

pub fn transfer_administrator_registry_ownership(
    ctx: Context<TransferAdministratorRegistryOwnership>,
    new_owner: Pubkey,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    transfer_owner(registry.key(), &mut registry.owner, new_owner)
}

pub fn transfer_soul_registry_ownership(
    ctx: Context<TransferSoulRegistryOwnership>,
    new_owner: Pubkey,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    transfer_owner(registry.key(), &mut registry.owner, new_owner)
}

pub fn transfer_collection_ownership(
    ctx: Context<TransferCollectionOwnership>,
    new_owner: Pubkey,
) -> Result<()> {
    let collection = &mut ctx.accounts.collection;
    transfer_owner(collection.key(), &mut collection.owner, new_owner)
}
