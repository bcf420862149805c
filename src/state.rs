use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::error::Error;

/// Stored escrow record.
///
/// Layout: 1-byte initialization tag, then `owner` (32), `recipient` (32),
/// `salt` (8, little-endian). 73 bytes total; the account is sized exactly.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Escrow {
    pub is_initialized: bool,
    pub owner: Pubkey,
    pub recipient: Pubkey,
    pub salt: u64,
}

impl Escrow {
    pub const LEN: usize = 1 + 32 + 32 + 8;

    /// Decodes a raw account read, rejecting anything that is not an
    /// initialized escrow record of exactly the expected shape.
    pub fn unpack(data: &[u8]) -> Result<Self, Error> {
        let escrow = Self::try_from_slice(data).map_err(|_| Error::InvalidEscrowAccount)?;
        if !escrow.is_initialized {
            return Err(Error::InvalidEscrowAccount);
        }
        Ok(escrow)
    }
}
