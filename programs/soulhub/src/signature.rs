use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as sysvar_instructions;
use anchor_lang::solana_program::{ed25519_program, keccak};

use crate::constants::SET_SOUL_TAG;
use crate::errors::SoulhubError;

// =============================================================================
// SIGNATURE-AUTHORIZED BINDING
// =============================================================================
//
// An administrator signs a set_soul message off-chain; the target account
// submits it. The runtime's Ed25519 precompile verifies the signature in the
// instruction immediately before ours, and we read back which key signed which
// message through the instructions sysvar.
//
// Ed25519 instruction data layout (single signature):
//   num_signatures: u8
//   padding: u8
//   signature_offset: u16
//   signature_instruction_index: u16
//   public_key_offset: u16
//   public_key_instruction_index: u16
//   message_data_offset: u16
//   message_data_size: u16
//   message_instruction_index: u16
//   ... public key, signature, message ...
// =============================================================================

const HEADER_LEN: usize = 2;
const OFFSETS_LEN: usize = 14;
const PUBKEY_LEN: usize = 32;
const SIGNATURE_LEN: usize = 64;

/// Instruction index meaning "data lives in the Ed25519 instruction itself".
const SELF_INSTRUCTION: u16 = u16::MAX;

/// Digest an administrator signs to authorize binding `account` to `soul`.
pub fn set_soul_message(registry: &Pubkey, account: &Pubkey, soul: u64, nonce: u64) -> [u8; 32] {
    keccak::hashv(&[
        SET_SOUL_TAG,
        registry.as_ref(),
        account.as_ref(),
        &soul.to_le_bytes(),
        &nonce.to_le_bytes(),
    ])
    .0
}

/// Signer and message attested by a verified Ed25519 instruction.
#[derive(Debug, PartialEq, Eq)]
pub struct SignedMessage {
    pub signer: Pubkey,
    pub message: Vec<u8>,
}

impl SignedMessage {
    /// The attested signer, provided it signed `expected_message` and is the
    /// key the caller claimed.
    pub fn recover_signer(&self, expected_message: &[u8], claimed: &Pubkey) -> Result<Pubkey> {
        require!(
            self.message == expected_message && self.signer == *claimed,
            SoulhubError::InvalidSigner
        );
        Ok(self.signer)
    }
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn slice(data: &[u8], offset: u16, len: usize) -> Result<&[u8]> {
    let start = offset as usize;
    let end = start
        .checked_add(len)
        .ok_or(SoulhubError::MalformedSignature)?;
    data.get(start..end)
        .ok_or_else(|| error!(SoulhubError::MalformedSignature))
}

/// Read the signer and message out of Ed25519 precompile instruction data.
pub fn parse_ed25519_instruction(data: &[u8]) -> Result<SignedMessage> {
    require!(data.len() >= HEADER_LEN + OFFSETS_LEN, SoulhubError::MalformedSignature);
    require!(data[0] == 1, SoulhubError::MalformedSignature);

    let signature_offset = read_u16(data, 2);
    let signature_ix = read_u16(data, 4);
    let pubkey_offset = read_u16(data, 6);
    let pubkey_ix = read_u16(data, 8);
    let message_offset = read_u16(data, 10);
    let message_size = read_u16(data, 12) as usize;
    let message_ix = read_u16(data, 14);

    // Signature, key and message must all live in the Ed25519 instruction.
    require!(
        signature_ix == SELF_INSTRUCTION
            && pubkey_ix == SELF_INSTRUCTION
            && message_ix == SELF_INSTRUCTION,
        SoulhubError::MalformedSignature
    );

    slice(data, signature_offset, SIGNATURE_LEN)?;
    let pubkey = slice(data, pubkey_offset, PUBKEY_LEN)?;
    let message = slice(data, message_offset, message_size)?;

    let mut signer = [0u8; PUBKEY_LEN];
    signer.copy_from_slice(pubkey);

    Ok(SignedMessage {
        signer: Pubkey::new_from_array(signer),
        message: message.to_vec(),
    })
}

/// Load the Ed25519 instruction that must immediately precede the current one.
pub fn load_signed_message(instructions: &AccountInfo) -> Result<SignedMessage> {
    let current = sysvar_instructions::load_current_index_checked(instructions)?;
    require!(current > 0, SoulhubError::MissingSignatureInstruction);

    let previous = sysvar_instructions::load_instruction_at_checked(current as usize - 1, instructions)?;
    require_keys_eq!(
        previous.program_id,
        ed25519_program::ID,
        SoulhubError::MissingSignatureInstruction
    );

    parse_ed25519_instruction(&previous.data)
}
