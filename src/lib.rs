#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;
mod error;
mod instruction;
mod processor;
mod state;

pub use error::Error;
pub use instruction::Instruction;
pub use processor::escrow_address;
pub use processor::process;
pub use processor::ADDRESS_TAG;
pub use state::Escrow;
