use anchor_lang::prelude::*;

use crate::authority::{AdministratorAuthority, OwnerOverride};
use crate::constants::{MAX_NAME_LEN, MAX_SOUL_MEMBERS, NULL_SOUL};
use crate::errors::SoulhubError;
use crate::state::load_if_initialized;

// =============================================================================
// SOUL REGISTRY
// =============================================================================
//
// Assigns accounts to souls. Each account has at most one soul at a time
// (`SoulBinding`), and each soul keeps the list of accounts bound to it
// (`SoulRoster`). The two are kept in lockstep:
//
//   binding.soul == S && S != NULL_SOUL  <=>  binding.account in roster(S)
//
// Roster removal is swap-and-pop, so member order is not stable.
// =============================================================================

#[account]
pub struct SoulRegistry {
    /// Always authorized to administer this registry
    pub owner: Pubkey,
    /// Administrator registry consulted for everyone other than the owner
    pub authority: Pubkey,
    /// Human-readable registry name (max 32 bytes)
    pub name: String,
}

impl SoulRegistry {
    pub const SIZE: usize = 8 +     // discriminator
        32 +                         // owner
        32 +                         // authority
        4 + MAX_NAME_LEN;            // name

    /// Authorization for this registry: its owner, or whoever `authority`
    /// accepts.
    pub fn authorization<'a, A>(&self, authority: &'a A) -> OwnerOverride<'a, A>
    where
        A: AdministratorAuthority + ?Sized,
    {
        OwnerOverride::new(self.owner, authority)
    }
}

/// The soul an account is bound to, plus its signature nonce.
#[account]
pub struct SoulBinding {
    /// Soul registry this binding belongs to
    pub registry: Pubkey,
    /// The bound account
    pub account: Pubkey,
    /// Current soul, NULL_SOUL when unbound
    pub soul: u64,
    /// Next nonce accepted for a signature-authorized binding
    pub nonce: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl SoulBinding {
    pub const SIZE: usize = 8 + 32 + 32 + 8 + 8 + 1;

    /// Soul of a possibly-absent binding. No binding means unbound.
    pub fn soul_of(binding: Option<&SoulBinding>) -> u64 {
        binding.map_or(NULL_SOUL, |b| b.soul)
    }

    /// Soul recorded at a binding address; NULL_SOUL when nothing was ever
    /// bound there.
    pub fn soul_at(info: &AccountInfo) -> Result<u64> {
        let binding = load_if_initialized::<SoulBinding>(info)?;
        Ok(Self::soul_of(binding.as_ref()))
    }

    /// Consume the current nonce if it matches `nonce`.
    pub fn consume_nonce(&mut self, nonce: u64) -> Result<()> {
        require!(nonce == self.nonce, SoulhubError::InvalidNonce);
        self.nonce = self
            .nonce
            .checked_add(1)
            .ok_or(SoulhubError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Work out which transition moving to `target` requires, rejecting the
    /// ones that are not allowed.
    pub fn plan_transition(&self, target: u64) -> Result<SoulTransition> {
        let transition = match (self.soul, target) {
            // Unbinding an account that was never bound is reported as an
            // authorization failure, ahead of the same-soul check.
            (NULL_SOUL, NULL_SOUL) => return err!(SoulhubError::Unauthorized),
            (from, to) if from == to => return err!(SoulhubError::InvalidSoul),
            (NULL_SOUL, to) => SoulTransition::Bind { to },
            (from, NULL_SOUL) => SoulTransition::Unbind { from },
            (from, to) => SoulTransition::Rebind { from, to },
        };
        Ok(transition)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoulTransition {
    Bind { to: u64 },
    Unbind { from: u64 },
    Rebind { from: u64, to: u64 },
}

impl SoulTransition {
    /// Soul the account leaves, if any.
    pub fn leaving(&self) -> Option<u64> {
        match *self {
            SoulTransition::Bind { .. } => None,
            SoulTransition::Unbind { from } | SoulTransition::Rebind { from, .. } => Some(from),
        }
    }

    /// Soul the account joins, if any.
    pub fn joining(&self) -> Option<u64> {
        match *self {
            SoulTransition::Unbind { .. } => None,
            SoulTransition::Bind { to } | SoulTransition::Rebind { to, .. } => Some(to),
        }
    }

    /// Soul the account ends up with.
    pub fn target(&self) -> u64 {
        self.joining().unwrap_or(NULL_SOUL)
    }

    /// Apply this transition to a binding and the rosters it touches.
    ///
    /// `current` must be the roster of the soul being left and `target` the
    /// roster of the soul being joined; each is only required when the
    /// transition actually leaves or joins a soul.
    pub fn apply(
        &self,
        binding: &mut SoulBinding,
        current: Option<&mut SoulRoster>,
        target: Option<&mut SoulRoster>,
    ) -> Result<()> {
        // Validate both rosters before touching either.
        let current = match self.leaving() {
            Some(from) => {
                let roster = current.ok_or(SoulhubError::SoulRosterMissing)?;
                require!(roster.soul == from, SoulhubError::SoulRosterMissing);
                require!(roster.contains(&binding.account), SoulhubError::NotSoulMember);
                Some(roster)
            }
            None => None,
        };
        let target = match self.joining() {
            Some(to) => {
                let roster = target.ok_or(SoulhubError::SoulRosterMissing)?;
                require!(roster.soul == to, SoulhubError::SoulRosterMissing);
                require!(roster.members.len() < MAX_SOUL_MEMBERS, SoulhubError::SoulRosterFull);
                Some(roster)
            }
            None => None,
        };

        if let Some(roster) = current {
            roster.remove(&binding.account)?;
        }
        if let Some(roster) = target {
            roster.add(binding.account)?;
        }

        binding.soul = self.target();
        Ok(())
    }
}

/// Accounts currently bound to one soul.
#[account]
pub struct SoulRoster {
    /// Soul registry this roster belongs to
    pub registry: Pubkey,
    /// The soul whose members are listed
    pub soul: u64,
    /// Current members; order changes on removal
    pub members: Vec<Pubkey>,
    /// PDA bump seed
    pub bump: u8,
}

impl SoulRoster {
    pub const SIZE: usize = 8 +     // discriminator
        32 +                         // registry
        8 +                          // soul
        4 + 32 * MAX_SOUL_MEMBERS +  // members
        1;                           // bump

    pub fn add(&mut self, account: Pubkey) -> Result<()> {
        require!(self.members.len() < MAX_SOUL_MEMBERS, SoulhubError::SoulRosterFull);
        self.members.push(account);
        Ok(())
    }

    /// Swap-and-pop removal: the last member takes the removed slot.
    pub fn remove(&mut self, account: &Pubkey) -> Result<()> {
        let index = self
            .members
            .iter()
            .position(|m| m == account)
            .ok_or(SoulhubError::NotSoulMember)?;
        self.members.swap_remove(index);
        Ok(())
    }

    pub fn contains(&self, account: &Pubkey) -> bool {
        self.members.contains(account)
    }

    /// Members listed at a roster address; empty when the soul never had any.
    pub fn members_at(info: &AccountInfo) -> Result<Vec<Pubkey>> {
        let roster = load_if_initialized::<SoulRoster>(info)?;
        Ok(roster.map(|r| r.members).unwrap_or_default())
    }
}

/// Two souls are the same only when they are equal and bound.
pub fn same_soul(a: u64, b: u64) -> bool {
    a != NULL_SOUL && a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn binding(account: Pubkey, soul: u64) -> SoulBinding {
        SoulBinding {
            registry: Pubkey::default(),
            account,
            soul,
            nonce: 0,
            bump: 0,
        }
    }

    fn roster(soul: u64, members: Vec<Pubkey>) -> SoulRoster {
        SoulRoster {
            registry: Pubkey::default(),
            soul,
            members,
            bump: 0,
        }
    }

    #[test]
    fn rebinding_to_current_soul_is_rejected() {
        let b = binding(Pubkey::new_unique(), 1);
        assert_eq!(b.plan_transition(1).unwrap_err(), Error::from(SoulhubError::InvalidSoul));
    }

    #[test]
    fn unbinding_unbound_account_is_unauthorized() {
        let b = binding(Pubkey::new_unique(), NULL_SOUL);
        assert_eq!(
            b.plan_transition(NULL_SOUL).unwrap_err(),
            Error::from(SoulhubError::Unauthorized)
        );
    }

    #[test]
    fn transitions_are_classified() {
        let account = Pubkey::new_unique();
        assert_eq!(
            binding(account, NULL_SOUL).plan_transition(3).unwrap(),
            SoulTransition::Bind { to: 3 }
        );
        assert_eq!(
            binding(account, 3).plan_transition(NULL_SOUL).unwrap(),
            SoulTransition::Unbind { from: 3 }
        );
        assert_eq!(
            binding(account, 3).plan_transition(4).unwrap(),
            SoulTransition::Rebind { from: 3, to: 4 }
        );
    }

    #[test]
    fn bind_appends_to_target_roster() {
        let account = Pubkey::new_unique();
        let mut b = binding(account, NULL_SOUL);
        let mut target = roster(1, vec![]);

        let t = b.plan_transition(1).unwrap();
        t.apply(&mut b, None, Some(&mut target)).unwrap();

        assert_eq!(b.soul, 1);
        assert_eq!(target.members, vec![account]);
    }

    #[test]
    fn rebind_moves_between_rosters() {
        let account = Pubkey::new_unique();
        let mut b = binding(account, 1);
        let mut current = roster(1, vec![account]);
        let mut target = roster(2, vec![]);

        let t = b.plan_transition(2).unwrap();
        t.apply(&mut b, Some(&mut current), Some(&mut target)).unwrap();

        assert_eq!(b.soul, 2);
        assert!(current.members.is_empty());
        assert_eq!(target.members, vec![account]);
    }

    #[test]
    fn unbind_swaps_last_member_into_removed_slot() {
        let target = Pubkey::new_unique();
        let a0 = Pubkey::new_unique();
        let a1 = Pubkey::new_unique();
        let mut b = binding(target, 1);
        let mut current = roster(1, vec![target, a0, a1]);

        let t = b.plan_transition(NULL_SOUL).unwrap();
        t.apply(&mut b, Some(&mut current), None).unwrap();

        assert_eq!(b.soul, NULL_SOUL);
        assert_eq!(current.members, vec![a1, a0]);
    }

    #[test]
    fn missing_or_wrong_roster_is_rejected() {
        let account = Pubkey::new_unique();
        let mut b = binding(account, 1);
        let t = b.plan_transition(2).unwrap();

        let mut wrong = roster(5, vec![account]);
        let mut target = roster(2, vec![]);
        assert_eq!(
            t.apply(&mut b, Some(&mut wrong), Some(&mut target)).unwrap_err(),
            Error::from(SoulhubError::SoulRosterMissing)
        );
        assert_eq!(
            t.apply(&mut b, None, Some(&mut target)).unwrap_err(),
            Error::from(SoulhubError::SoulRosterMissing)
        );
        assert_eq!(b.soul, 1);
    }

    #[test]
    fn full_roster_rejects_new_member() {
        let members = (0..MAX_SOUL_MEMBERS).map(|_| Pubkey::new_unique()).collect();
        let mut full = roster(1, members);
        assert_eq!(
            full.add(Pubkey::new_unique()).unwrap_err(),
            Error::from(SoulhubError::SoulRosterFull)
        );
    }

    #[test]
    fn nonce_advances_once_per_match() {
        let mut b = binding(Pubkey::new_unique(), NULL_SOUL);
        assert_eq!(b.consume_nonce(1).unwrap_err(), Error::from(SoulhubError::InvalidNonce));
        b.consume_nonce(0).unwrap();
        assert_eq!(b.nonce, 1);
        assert_eq!(b.consume_nonce(0).unwrap_err(), Error::from(SoulhubError::InvalidNonce));
    }

    #[test]
    fn same_soul_requires_a_bound_soul() {
        assert!(same_soul(1, 1));
        assert!(!same_soul(1, 2));
        assert!(!same_soul(NULL_SOUL, NULL_SOUL));
        assert!(!same_soul(NULL_SOUL, 1));
        assert!(!same_soul(1, NULL_SOUL));
    }

    fn read_at<R>(owner: Pubkey, mut data: Vec<u8>, read: impl FnOnce(&AccountInfo) -> R) -> R {
        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000u64;
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);
        read(&info)
    }

    fn serialized<T: AccountSerialize>(account: &T) -> Vec<u8> {
        let mut data = Vec::new();
        account.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn stored_binding_is_read_back() {
        let data = serialized(&binding(Pubkey::new_unique(), 4));
        assert_eq!(read_at(crate::ID, data, SoulBinding::soul_at).unwrap(), 4);
    }

    #[test]
    fn uncreated_binding_reads_as_null_soul() {
        let system = anchor_lang::solana_program::system_program::ID;
        assert_eq!(read_at(system, vec![], SoulBinding::soul_at).unwrap(), NULL_SOUL);
        assert_eq!(read_at(crate::ID, vec![], SoulBinding::soul_at).unwrap(), NULL_SOUL);
    }

    #[test]
    fn foreign_account_data_is_ignored() {
        let data = serialized(&binding(Pubkey::new_unique(), 4));
        let other = Pubkey::new_unique();
        assert_eq!(read_at(other, data, SoulBinding::soul_at).unwrap(), NULL_SOUL);
    }

    #[test]
    fn wrong_account_type_at_binding_address_is_an_error() {
        let data = serialized(&roster(4, vec![]));
        assert!(read_at(crate::ID, data, SoulBinding::soul_at).is_err());
    }

    #[test]
    fn stored_roster_members_are_read_back() {
        let members = vec![Pubkey::new_unique(), Pubkey::new_unique()];
        let data = serialized(&roster(1, members.clone()));
        assert_eq!(read_at(crate::ID, data, SoulRoster::members_at).unwrap(), members);

        let system = anchor_lang::solana_program::system_program::ID;
        assert!(read_at(system, vec![], SoulRoster::members_at).unwrap().is_empty());
    }

    #[test]
    fn absent_binding_reads_as_null_soul() {
        let b = binding(Pubkey::new_unique(), 7);
        assert_eq!(SoulBinding::soul_of(None), NULL_SOUL);
        assert_eq!(SoulBinding::soul_of(Some(&b)), 7);
    }
}
