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
pub struct TransferCheckedIxAccs<T> {
    pub source: T,
    pub mint: T,
    pub destination: T,
}

impl<T: Copy> TransferCheckedIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; TRANSFER_CHECKED_IX_ACCS_LEN])
    }
}

pub type TransferCheckedIxAccounts = TransferCheckedIxAccs<Pubkey>;
pub type TransferCheckedIxAccsFlag = TransferCheckedIxAccs<bool>;

pub const TRANSFER_CHECKED_IX_IS_SIGNER: TransferCheckedIxAccsFlag =
    TransferCheckedIxAccs::memset(false);

pub const TRANSFER_CHECKED_IX_IS_WRITABLE: TransferCheckedIxAccsFlag =
    TransferCheckedIxAccs::memset(true).const_with_mint(false);

/// [`transfer_ix`](crate::transfer_ix) with the mint in the account list so
/// the program can check `decimals` against it.
pub fn transfer_checked_ix<'a>(
    token_prog: &Pubkey,
    accounts: TransferCheckedIxAccounts,
    owner: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
    amount: impl Into<u128>,
    decimals: u8,
) -> Result<TokenInstruction<'a>, TokenClientError> {
    assemble(
        token_prog,
        TokenInstructionKind::TransferChecked,
        base_metas(
            accounts.0,
            TRANSFER_CHECKED_IX_IS_SIGNER.0,
            TRANSFER_CHECKED_IX_IS_WRITABLE.0,
        ),
        owner,
        multi_signers,
        &[FieldValue::U64(amount.into()), FieldValue::U8(decimals)],
    )
}
