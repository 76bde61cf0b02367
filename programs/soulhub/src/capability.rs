use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::errors::SoulhubError;
use crate::state::{AdministratorRegistry, SoulRegistry};

/// What a referenced account must be able to do for us.
///
/// Checked once, when a reference is acquired (initialization or swap).
/// An account qualifies when this program owns it and it carries the
/// discriminator of the matching account type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// Answers `is_administrator` for a soul registry
    AdministratorAuthority,
    /// Answers soul lookups and delegated administration for a collection
    SoulRegistry,
}

impl Capability {
    fn discriminator(self) -> [u8; 8] {
        match self {
            Capability::AdministratorAuthority => AdministratorRegistry::DISCRIMINATOR,
            Capability::SoulRegistry => SoulRegistry::DISCRIMINATOR,
        }
    }

    pub fn supported_by(self, owner: &Pubkey, data: &[u8]) -> bool {
        *owner == crate::ID && data.len() >= 8 && data[..8] == self.discriminator()
    }
}

pub fn require_capability(candidate: &AccountInfo, capability: Capability) -> Result<()> {
    let data = candidate.try_borrow_data()?;
    if !capability.supported_by(candidate.owner, &data) {
        msg!("{} does not support {:?}", candidate.key, capability);
        return err!(SoulhubError::InvalidInterface);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(capability: Capability) -> Vec<u8> {
        let mut data = capability.discriminator().to_vec();
        data.extend_from_slice(&[0u8; 64]);
        data
    }

    #[test]
    fn matching_account_is_accepted() {
        let data = tagged(Capability::AdministratorAuthority);
        assert!(Capability::AdministratorAuthority.supported_by(&crate::ID, &data));
    }

    #[test]
    fn wrong_account_type_is_rejected() {
        let data = tagged(Capability::SoulRegistry);
        assert!(!Capability::AdministratorAuthority.supported_by(&crate::ID, &data));
        assert!(Capability::SoulRegistry.supported_by(&crate::ID, &data));
    }

    #[test]
    fn foreign_or_empty_accounts_are_rejected() {
        let data = tagged(Capability::SoulRegistry);
        let system = anchor_lang::solana_program::system_program::ID;
        assert!(!Capability::SoulRegistry.supported_by(&system, &data));
        assert!(!Capability::SoulRegistry.supported_by(&crate::ID, &[]));
    }
}
