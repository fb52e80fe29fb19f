//! Client-side construction of token program instructions.
//!
//! Each instruction kind declares its base account slots as a
//! `generic_array_struct` record with const signer/writable flag tables;
//! the authority slot(s) are appended by the resolver immediately after the
//! base accounts, and the payload is encoded through the central layout
//! table. Builders hand back the assembled instruction together with the
//! signers its transaction must carry.

use solana_instruction::Instruction;
use thiserror::Error;

// Re-exports
pub mod authority {
    pub use geppetto_authority::*;
}
use authority::*;
pub mod layout {
    pub use geppetto_layout::*;
}
use layout::*;

mod instructions;

pub use instructions::*;

/// An assembled instruction plus the signer set the enclosing transaction
/// must carry. The external transaction layer attaches the payer and these
/// signers; nothing here signs or submits.
pub struct TokenInstruction<'a> {
    pub instruction: Instruction,
    pub signers: SignerSet<'a>,
}

impl core::fmt::Debug for TokenInstruction<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TokenInstruction")
            .field("instruction", &self.instruction)
            .field(
                "signers",
                &self.signers.iter().map(|s| s.pubkey()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenClientError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Authority(#[from] AuthorityError),
}
