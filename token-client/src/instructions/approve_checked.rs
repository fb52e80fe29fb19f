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
pub struct ApproveCheckedIxAccs<T> {
    pub source: T,
    pub mint: T,
    pub delegate: T,
}

impl<T: Copy> ApproveCheckedIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; APPROVE_CHECKED_IX_ACCS_LEN])
    }
}

pub type ApproveCheckedIxAccounts = ApproveCheckedIxAccs<Pubkey>;
pub type ApproveCheckedIxAccsFlag = ApproveCheckedIxAccs<bool>;

pub const APPROVE_CHECKED_IX_IS_SIGNER: ApproveCheckedIxAccsFlag =
    ApproveCheckedIxAccs::memset(false);

pub const APPROVE_CHECKED_IX_IS_WRITABLE: ApproveCheckedIxAccsFlag =
    ApproveCheckedIxAccs::memset(false).const_with_source(true);

/// [`approve_ix`](crate::approve_ix) with the mint in the account list so
/// the program can check `decimals` against it.
pub fn approve_checked_ix<'a>(
    token_prog: &Pubkey,
    accounts: ApproveCheckedIxAccounts,
    owner: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
    amount: impl Into<u128>,
    decimals: u8,
) -> Result<TokenInstruction<'a>, TokenClientError> {
    assemble(
        token_prog,
        TokenInstructionKind::ApproveChecked,
        base_metas(
            accounts.0,
            APPROVE_CHECKED_IX_IS_SIGNER.0,
            APPROVE_CHECKED_IX_IS_WRITABLE.0,
        ),
        owner,
        multi_signers,
        &[FieldValue::U64(amount.into()), FieldValue::U8(decimals)],
    )
}
