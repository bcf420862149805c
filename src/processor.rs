use crate::instruction::Instruction;
use crate::{error::Error, state::Escrow};

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke_signed,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction,
    sysvar::Sysvar,
};

/// Version tag prefixing every derivation seed list. Bumping it moves every
/// derived address, so addresses from different tags never collide.
pub const ADDRESS_TAG: &[u8] = b"v1.0.1";

/// Derives the escrow address for an (owner, recipient, salt) tuple.
///
/// Off-chain callers and the processor must agree on this bit-for-bit; the
/// derivation is the only index mapping tuples to records.
pub fn escrow_address(
    program_id: &Pubkey,
    owner: &Pubkey,
    recipient: &Pubkey,
    salt: u64,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            ADDRESS_TAG,
            owner.as_ref(),
            recipient.as_ref(),
            &salt.to_le_bytes(),
        ],
        program_id,
    )
}

pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction =
        Instruction::try_from_slice(instruction_data).map_err(|_| Error::InvalidInstruction)?;

    match instruction {
        Instruction::Create { salt } => process_create(program_id, accounts, salt),
    }
}

fn process_create(program_id: &Pubkey, accounts: &[AccountInfo], salt: u64) -> ProgramResult {
    msg!("Instruction: Create");

    //
    // deserialize accounts info
    //
    let mut accounts_iter = accounts.iter();

    let owner = next_account_info(&mut accounts_iter)?;
    let recipient = next_account_info(&mut accounts_iter)?;
    let escrow_account = next_account_info(&mut accounts_iter)?;
    let sponsor = next_account_info(&mut accounts_iter)?;
    let system_program = next_account_info(&mut accounts_iter)?;

    //
    // validate, all before any state change
    //
    if !owner.is_signer || !sponsor.is_signer {
        return Err(Error::Unauthorized.into());
    }

    let (derived, bump) = escrow_address(program_id, owner.key, recipient.key, salt);
    if derived != *escrow_account.key {
        return Err(Error::AddressMismatch.into());
    }

    // Existing record data is the initialization marker; the runtime makes
    // account creation at an address atomic, so at most one create commits.
    if !escrow_account.data_is_empty() {
        return Err(Error::AlreadyInitialized.into());
    }

    let funding = Rent::get()?.minimum_balance(Escrow::LEN);
    if sponsor.lamports() < funding {
        return Err(Error::InsufficientFunding.into());
    }

    //
    // create the record account at the derived address, funded by sponsor
    //
    invoke_signed(
        &system_instruction::create_account(
            sponsor.key,
            escrow_account.key,
            funding,
            Escrow::LEN as u64,
            program_id,
        ),
        &[sponsor.clone(), escrow_account.clone(), system_program.clone()],
        &[&[
            ADDRESS_TAG,
            owner.key.as_ref(),
            recipient.key.as_ref(),
            &salt.to_le_bytes(),
            &[bump],
        ]],
    )?;

    //
    // write the record
    //
    let escrow_info = Escrow {
        is_initialized: true,
        owner: *owner.key,
        recipient: *recipient.key,
        salt,
    };
    escrow_info.serialize(&mut *escrow_account.try_borrow_mut_data()?)?;

    msg!("Created escrow {} for salt {}", escrow_account.key, salt);
    Ok(())
}
