use anchor_lang::prelude::*;
use crate::authority::AdministratorAuthority;
use crate::errors::SoulhubError;
use crate::signature::{set_soul_message, SignedMessage};
use crate::state::{SoulBinding, SoulRoster};

// Shared by the direct and the signature-authorized set_soul paths. The
// handlers only load accounts; everything after that happens here.

/// Fill in a binding account that `init_if_needed` just created.
pub fn init_binding(binding: &mut SoulBinding, registry: Pubkey, account: Pubkey, bump: u8) -> Result<()> {
    // The zero key would make every binding look freshly created.
    require_keys_neq!(account, Pubkey::default(), SoulhubError::InvalidRecipient);

    if binding.account == Pubkey::default() {
        binding.registry = registry;
        binding.account = account;
        binding.bump = bump;
    }
    Ok(())
}

/// Fill in a roster account that `init_if_needed` just created.
pub fn init_roster(roster: &mut SoulRoster, registry: Pubkey, soul: u64, bump: u8) {
    if roster.registry == Pubkey::default() {
        roster.registry = registry;
        roster.soul = soul;
        roster.bump = bump;
    }
}

/// A requested move of one binding to `target_soul`, with the rosters it may
/// touch. The target roster comes with its PDA bump.
pub struct SoulChange<'a> {
    pub registry: Pubkey,
    pub target_soul: u64,
    pub current_roster: Option<&'a mut SoulRoster>,
    pub target_roster: Option<(&'a mut SoulRoster, u8)>,
}

impl SoulChange<'_> {
    /// Run the bind/unbind algorithm for `binding`.
    pub fn apply(self, binding: &mut SoulBinding) -> Result<()> {
        let transition = binding.plan_transition(self.target_soul)?;

        let registry = self.registry;
        let target_soul = self.target_soul;
        let target_roster = self.target_roster.map(|(roster, bump)| {
            init_roster(roster, registry, target_soul, bump);
            roster
        });

        transition.apply(binding, self.current_roster, target_roster)?;

        msg!("Soul of {} changed: {:?}", binding.account, transition);
        Ok(())
    }
}

/// Direct path: `caller` must be an administrator.
pub fn set_soul_as_administrator<A>(
    change: SoulChange,
    binding: &mut SoulBinding,
    caller: &Pubkey,
    authorization: &A,
) -> Result<()>
where
    A: AdministratorAuthority + ?Sized,
{
    require!(authorization.is_administrator(caller), SoulhubError::Unauthorized);
    change.apply(binding)
}

/// Signature path. Checks run in a fixed order: nonce, then signature, then
/// the signer's administrator status. Returns the verified signer.
pub fn set_soul_with_signed_message<A>(
    change: SoulChange,
    binding: &mut SoulBinding,
    nonce: u64,
    signer: &Pubkey,
    signed: &SignedMessage,
    authorization: &A,
) -> Result<Pubkey>
where
    A: AdministratorAuthority + ?Sized,
{
    binding.consume_nonce(nonce)?;

    let expected = set_soul_message(&change.registry, &binding.account, change.target_soul, nonce);
    let signer = signed.recover_signer(&expected, signer)?;

    require!(authorization.is_administrator(&signer), SoulhubError::Unauthorized);

    change.apply(binding)?;
    Ok(signer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NULL_SOUL;
    use anchor_lang::error::Error;

    struct Admins(Vec<Pubkey>);

    impl AdministratorAuthority for Admins {
        fn is_administrator(&self, account: &Pubkey) -> bool {
            self.0.contains(account)
        }
    }

    fn fresh_binding() -> SoulBinding {
        SoulBinding {
            registry: Pubkey::default(),
            account: Pubkey::default(),
            soul: NULL_SOUL,
            nonce: 0,
            bump: 0,
        }
    }

    fn fresh_roster() -> SoulRoster {
        SoulRoster {
            registry: Pubkey::default(),
            soul: NULL_SOUL,
            members: Vec::new(),
            bump: 0,
        }
    }

    fn bind_to<'a>(registry: Pubkey, soul: u64, roster: &'a mut SoulRoster) -> SoulChange<'a> {
        SoulChange {
            registry,
            target_soul: soul,
            current_roster: None,
            target_roster: Some((roster, 254)),
        }
    }

    fn signed_by(signer: Pubkey, registry: &Pubkey, account: &Pubkey, soul: u64, nonce: u64) -> SignedMessage {
        SignedMessage {
            signer,
            message: set_soul_message(registry, account, soul, nonce).to_vec(),
        }
    }

    #[test]
    fn fresh_binding_and_roster_are_stamped_once() {
        let registry = Pubkey::new_unique();
        let account = Pubkey::new_unique();
        let mut binding = fresh_binding();

        init_binding(&mut binding, registry, account, 7).unwrap();
        init_binding(&mut binding, Pubkey::new_unique(), Pubkey::new_unique(), 9).unwrap();
        assert_eq!((binding.registry, binding.account, binding.bump), (registry, account, 7));

        let mut roster = fresh_roster();
        init_roster(&mut roster, registry, 3, 250);
        init_roster(&mut roster, Pubkey::new_unique(), 4, 1);
        assert_eq!((roster.registry, roster.soul, roster.bump), (registry, 3, 250));
    }

    #[test]
    fn zero_account_cannot_be_bound() {
        let mut binding = fresh_binding();
        assert_eq!(
            init_binding(&mut binding, Pubkey::new_unique(), Pubkey::default(), 0).unwrap_err(),
            Error::from(SoulhubError::InvalidRecipient)
        );
    }

    #[test]
    fn administrator_binds_into_new_roster() {
        let admin = Pubkey::new_unique();
        let registry = Pubkey::new_unique();
        let account = Pubkey::new_unique();
        let mut binding = fresh_binding();
        let mut roster = fresh_roster();
        init_binding(&mut binding, registry, account, 0).unwrap();

        set_soul_as_administrator(
            bind_to(registry, 5, &mut roster),
            &mut binding,
            &admin,
            &Admins(vec![admin]),
        )
        .unwrap();

        assert_eq!(binding.soul, 5);
        assert_eq!(roster.soul, 5);
        assert_eq!(roster.bump, 254);
        assert_eq!(roster.members, vec![account]);
    }

    #[test]
    fn non_administrator_cannot_bind_directly() {
        let registry = Pubkey::new_unique();
        let mut binding = fresh_binding();
        let mut roster = fresh_roster();
        init_binding(&mut binding, registry, Pubkey::new_unique(), 0).unwrap();

        assert_eq!(
            set_soul_as_administrator(
                bind_to(registry, 5, &mut roster),
                &mut binding,
                &Pubkey::new_unique(),
                &Admins(vec![]),
            )
            .unwrap_err(),
            Error::from(SoulhubError::Unauthorized)
        );
        assert_eq!(binding.soul, NULL_SOUL);
        assert!(roster.members.is_empty());
    }

    #[test]
    fn signed_binding_consumes_the_nonce() {
        let admin = Pubkey::new_unique();
        let registry = Pubkey::new_unique();
        let account = Pubkey::new_unique();
        let mut binding = fresh_binding();
        let mut roster = fresh_roster();
        init_binding(&mut binding, registry, account, 0).unwrap();

        let signed = signed_by(admin, &registry, &account, 2, 0);
        let signer = set_soul_with_signed_message(
            bind_to(registry, 2, &mut roster),
            &mut binding,
            0,
            &admin,
            &signed,
            &Admins(vec![admin]),
        )
        .unwrap();

        assert_eq!(signer, admin);
        assert_eq!(binding.soul, 2);
        assert_eq!(binding.nonce, 1);
        assert_eq!(roster.members, vec![account]);
    }

    #[test]
    fn resubmitted_signature_is_rejected() {
        let admin = Pubkey::new_unique();
        let admins = Admins(vec![admin]);
        let registry = Pubkey::new_unique();
        let account = Pubkey::new_unique();
        let mut binding = fresh_binding();
        let mut roster = fresh_roster();
        init_binding(&mut binding, registry, account, 0).unwrap();

        let signed = signed_by(admin, &registry, &account, 2, 0);
        set_soul_with_signed_message(bind_to(registry, 2, &mut roster), &mut binding, 0, &admin, &signed, &admins)
            .unwrap();

        // Unbind, then replay the original binding signature verbatim.
        set_soul_as_administrator(
            SoulChange {
                registry,
                target_soul: NULL_SOUL,
                current_roster: Some(&mut roster),
                target_roster: None,
            },
            &mut binding,
            &admin,
            &admins,
        )
        .unwrap();

        assert_eq!(
            set_soul_with_signed_message(bind_to(registry, 2, &mut roster), &mut binding, 0, &admin, &signed, &admins)
                .unwrap_err(),
            Error::from(SoulhubError::InvalidNonce)
        );
        assert_eq!(binding.soul, NULL_SOUL);
    }

    #[test]
    fn nonce_is_checked_before_the_signature() {
        let admin = Pubkey::new_unique();
        let registry = Pubkey::new_unique();
        let account = Pubkey::new_unique();
        let mut binding = fresh_binding();
        let mut roster = fresh_roster();
        init_binding(&mut binding, registry, account, 0).unwrap();

        // Wrong nonce and a signature from someone other than the claimed signer.
        let signed = signed_by(Pubkey::new_unique(), &registry, &account, 2, 3);
        assert_eq!(
            set_soul_with_signed_message(
                bind_to(registry, 2, &mut roster),
                &mut binding,
                3,
                &admin,
                &signed,
                &Admins(vec![admin]),
            )
            .unwrap_err(),
            Error::from(SoulhubError::InvalidNonce)
        );
    }

    #[test]
    fn signature_over_another_soul_is_rejected() {
        let admin = Pubkey::new_unique();
        let registry = Pubkey::new_unique();
        let account = Pubkey::new_unique();
        let mut binding = fresh_binding();
        let mut roster = fresh_roster();
        init_binding(&mut binding, registry, account, 0).unwrap();

        let signed = signed_by(admin, &registry, &account, 9, 0);
        assert_eq!(
            set_soul_with_signed_message(
                bind_to(registry, 2, &mut roster),
                &mut binding,
                0,
                &admin,
                &signed,
                &Admins(vec![admin]),
            )
            .unwrap_err(),
            Error::from(SoulhubError::InvalidSigner)
        );
    }

    #[test]
    fn valid_signature_from_non_administrator_is_unauthorized() {
        let stranger = Pubkey::new_unique();
        let registry = Pubkey::new_unique();
        let account = Pubkey::new_unique();
        let mut binding = fresh_binding();
        let mut roster = fresh_roster();
        init_binding(&mut binding, registry, account, 0).unwrap();

        let signed = signed_by(stranger, &registry, &account, 2, 0);
        assert_eq!(
            set_soul_with_signed_message(
                bind_to(registry, 2, &mut roster),
                &mut binding,
                0,
                &stranger,
                &signed,
                &Admins(vec![Pubkey::new_unique()]),
            )
            .unwrap_err(),
            Error::from(SoulhubError::Unauthorized)
        );
        assert!(roster.members.is_empty());
    }
}
