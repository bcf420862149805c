use borsh::{BorshDeserialize, BorshSerialize};

#[derive(BorshSerialize, BorshDeserialize)]
pub enum Instruction {
    /// Creates the escrow record at the address derived from
    /// (tag, owner, recipient, salt), funded to rent exemption by the sponsor.
    ///
    /// The owner authorizes the tuple; the sponsor pays. The recipient is a
    /// passive beneficiary and does not sign. Owner and sponsor may be the
    /// same key.
    ///
    /// Accounts expected:
    ///
    /// 0. `[signer]` The owner the escrow is derived from
    /// 1. `[]` The recipient the escrow is created for
    /// 2. `[writable]` The escrow account, at the derived address
    /// 3. `[signer, writable]` The sponsor funding the escrow account
    /// 4. `[]` The system program
    Create {
        /// Distinguishes escrows between the same (owner, recipient) pair
        salt: u64,
    },
}
