use anchor_lang::prelude::*;

// =============================================================================
// DELEGATED ADMINISTRATION
// =============================================================================
//
// Every mutating instruction asks one question: "may this key act as an
// administrator here?". The answer is composed in layers. An administrator
// registry answers from its own owner and administrator set; a soul registry
// answers "my owner, or whatever my configured authority says"; a collection
// answers "my owner, or whatever my soul registry says".
// =============================================================================

/// Answers whether a key may act as an administrator.
pub trait AdministratorAuthority {
    fn is_administrator(&self, account: &Pubkey) -> bool;
}

/// Layers a local owner on top of a delegate authority.
///
/// The owner is always authorized, even when the delegate would refuse.
pub struct OwnerOverride<'a, A: AdministratorAuthority + ?Sized> {
    owner: Pubkey,
    delegate: &'a A,
}

impl<'a, A: AdministratorAuthority + ?Sized> OwnerOverride<'a, A> {
    pub fn new(owner: Pubkey, delegate: &'a A) -> Self {
        Self { owner, delegate }
    }
}

impl<A: AdministratorAuthority + ?Sized> AdministratorAuthority for OwnerOverride<'_, A> {
    fn is_administrator(&self, account: &Pubkey) -> bool {
        *account == self.owner || self.delegate.is_administrator(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<Pubkey>);

    impl AdministratorAuthority for Fixed {
        fn is_administrator(&self, account: &Pubkey) -> bool {
            self.0.contains(account)
        }
    }

    #[test]
    fn owner_is_authorized_even_when_delegate_refuses() {
        let owner = Pubkey::new_unique();
        let delegate = Fixed(vec![]);
        let auth = OwnerOverride::new(owner, &delegate);

        assert!(!delegate.is_administrator(&owner));
        assert!(auth.is_administrator(&owner));
    }

    #[test]
    fn delegate_answer_passes_through_for_other_keys() {
        let admin = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let delegate = Fixed(vec![admin]);
        let auth = OwnerOverride::new(Pubkey::new_unique(), &delegate);

        assert!(auth.is_administrator(&admin));
        assert!(!auth.is_administrator(&stranger));
    }

    #[test]
    fn overrides_stack() {
        let inner_owner = Pubkey::new_unique();
        let outer_owner = Pubkey::new_unique();
        let delegate = Fixed(vec![]);
        let inner = OwnerOverride::new(inner_owner, &delegate);
        let outer = OwnerOverride::new(outer_owner, &inner);

        assert!(outer.is_administrator(&inner_owner));
        assert!(outer.is_administrator(&outer_owner));
        assert!(!inner.is_administrator(&outer_owner));
    }
}
