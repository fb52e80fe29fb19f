use generic_array_struct::generic_array_struct;
use solana_pubkey::Pubkey;
use solana_signer::Signer;

use super::internal_utils::{assemble, base_metas};
use crate::{
    authority::Authority,
    layout::{FieldValue, TokenInstructionKind},
    TokenClientError, TokenInstruction,
};

#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TransferIxAccs<T> {
    pub source: T,
    pub destination: T,
}

impl<T: Copy> TransferIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; TRANSFER_IX_ACCS_LEN])
    }
}

pub type TransferIxAccounts = TransferIxAccs<Pubkey>;
pub type TransferIxAccsFlag = TransferIxAccs<bool>;

// base accounts never sign; the owner slot is appended by the resolver
pub const TRANSFER_IX_IS_SIGNER: TransferIxAccsFlag = TransferIxAccs::memset(false);

pub const TRANSFER_IX_IS_WRITABLE: TransferIxAccsFlag = TransferIxAccs::memset(true);

/// Move `amount` tokens from `source` to `destination`, authorized by the
/// source account's owner.
pub fn transfer_ix<'a>(
    token_prog: &Pubkey,
    accounts: TransferIxAccounts,
    owner: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
    amount: impl Into<u128>,
) -> Result<TokenInstruction<'a>, TokenClientError> {
    assemble(
        token_prog,
        TokenInstructionKind::Transfer,
        base_metas(
            accounts.0,
            TRANSFER_IX_IS_SIGNER.0,
            TRANSFER_IX_IS_WRITABLE.0,
        ),
        owner,
        multi_signers,
        &[FieldValue::U64(amount.into())],
    )
}
