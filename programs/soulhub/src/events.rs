use anchor_lang::prelude::*;

#[event]
pub struct AdministratorStatusChanged {
    pub registry: Pubkey,
    pub account: Pubkey,
    pub is_administrator: bool,
}

#[event]
pub struct AuthorityChanged {
    pub registry: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct SoulBound {
    pub registry: Pubkey,
    pub account: Pubkey,
    pub soul: u64,

    // Populated only for signature-authorized bindings:
    // the nonce consumed and the administrator who signed.
    pub nonce: Option<u64>,
    pub signer: Option<Pubkey>,
}

#[event]
pub struct SoulRegistrySubscribed {
    pub collection: Pubkey,
    pub soul_registry: Pubkey,
}

#[event]
pub struct TokenLockStatusChanged {
    pub collection: Pubkey,
    pub token_id: u64,
    pub locked: bool,
}

#[event]
pub struct OwnershipTransferred {
    pub target: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
