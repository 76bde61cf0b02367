/// Soul value meaning "not bound to any soul".
pub const NULL_SOUL: u64 = 0;

pub const SOUL_BINDING_SEED: &[u8] = b"soul_binding";
pub const SOUL_ROSTER_SEED: &[u8] = b"soul_roster";
pub const TOKEN_SEED: &[u8] = b"token";
pub const BALANCE_SEED: &[u8] = b"balance";

/// Explicit administrators one registry can hold (the owner is not counted).
pub const MAX_ADMINISTRATORS: usize = 32;

/// Members one soul can hold. Bounds the cost of member enumeration and of
/// `balance_of_soul`.
pub const MAX_SOUL_MEMBERS: usize = 64;

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;

/// Domain tag prefixed to every signature-authorized `set_soul` message.
pub const SET_SOUL_TAG: &[u8] = b"soulhub:set_soul";
