use anchor_lang::prelude::*;

use crate::authority::AdministratorAuthority;
use crate::errors::SoulhubError;
use crate::state::same_soul;

// =============================================================================
// TRANSFER ELIGIBILITY GATE
// =============================================================================
//
// Consulted by every balance-changing instruction before it touches the
// ledger. Mint and burn need an administrator; plain transfers need an
// unlocked token moving between two accounts of the same soul.
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferKind {
    Mint,
    Burn,
    Transfer,
}

impl TransferKind {
    /// The zero key on either side marks a mint (`from`) or a burn (`to`).
    pub fn classify(from: &Pubkey, to: &Pubkey) -> Self {
        if *from == Pubkey::default() {
            TransferKind::Mint
        } else if *to == Pubkey::default() {
            TransferKind::Burn
        } else {
            TransferKind::Transfer
        }
    }

    pub fn is_mint_or_burn(&self) -> bool {
        matches!(self, TransferKind::Mint | TransferKind::Burn)
    }
}

/// Why a transfer was refused. Both surface as `Unauthorized`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferDenial {
    TokenLocked,
    SoulMismatch,
}

/// Everything the gate looks at for one token movement.
pub struct TransferRequest<'a> {
    pub caller: &'a Pubkey,
    pub from: &'a Pubkey,
    pub to: &'a Pubkey,
    pub token_id: u64,
    pub locked: bool,
    pub from_soul: u64,
    pub to_soul: u64,
}

impl TransferRequest<'_> {
    pub fn kind(&self) -> TransferKind {
        TransferKind::classify(self.from, self.to)
    }

    fn denial(&self) -> Option<TransferDenial> {
        if self.locked {
            Some(TransferDenial::TokenLocked)
        } else if !same_soul(self.from_soul, self.to_soul) {
            Some(TransferDenial::SoulMismatch)
        } else {
            None
        }
    }
}

/// Check a token movement against the mint/burn and transfer rules.
pub fn check_token_transfer_eligibility<A>(request: &TransferRequest, authorization: &A) -> Result<()>
where
    A: AdministratorAuthority + ?Sized,
{
    if request.kind().is_mint_or_burn() {
        require!(
            authorization.is_administrator(request.caller),
            SoulhubError::NotOwnerOrSoulhubAdministrator
        );
        return Ok(());
    }

    if let Some(denial) = request.denial() {
        msg!(
            "Transfer of token {} from {} to {} denied: {:?}",
            request.token_id,
            request.from,
            request.to,
            denial
        );
        return err!(SoulhubError::Unauthorized);
    }

    Ok(())
}
