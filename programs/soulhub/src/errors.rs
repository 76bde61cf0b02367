use anchor_lang::prelude::*;

#[error_code]
pub enum SoulhubError {
    #[msg("Unauthorized: caller is not allowed to perform this action")]
    Unauthorized,

    #[msg("Invalid soul: target soul equals the current soul")]
    InvalidSoul,

    #[msg("Invalid nonce: does not match the account's current nonce")]
    InvalidNonce,

    #[msg("Invalid signer: signature was not produced by the claimed signer")]
    InvalidSigner,

    #[msg("Invalid interface: account does not expose the expected capability")]
    InvalidInterface,

    #[msg("Caller is neither the owner nor a soulhub administrator")]
    NotOwnerOrSoulhubAdministrator,

    #[msg("Authority account does not match the registry's configured authority")]
    AuthorityMismatch,

    #[msg("Soul registry account does not match the collection's subscription")]
    SoulRegistryMismatch,

    #[msg("Administrator limit reached")]
    AdministratorLimitReached,

    #[msg("Soul roster is full")]
    SoulRosterFull,

    #[msg("Soul roster account required for this transition was not provided")]
    SoulRosterMissing,

    #[msg("Account is not a member of the soul roster")]
    NotSoulMember,

    #[msg("Ed25519 signature instruction must immediately precede this instruction")]
    MissingSignatureInstruction,

    #[msg("Ed25519 signature instruction is malformed")]
    MalformedSignature,

    #[msg("Name exceeds the maximum length")]
    NameTooLong,

    #[msg("Symbol exceeds the maximum length")]
    SymbolTooLong,

    #[msg("Recipient cannot be the zero account or the sender")]
    InvalidRecipient,

    #[msg("New owner cannot be the zero account")]
    InvalidOwner,

    #[msg("Signer does not hold this token")]
    NotTokenHolder,

    #[msg("Balance account does not belong to the expected holder")]
    BalanceAccountMismatch,

    #[msg("Balance underflow")]
    BalanceUnderflow,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
