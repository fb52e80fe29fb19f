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
pub struct ApproveIxAccs<T> {
    pub source: T,
    pub delegate: T,
}

impl<T: Copy> ApproveIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; APPROVE_IX_ACCS_LEN])
    }
}

pub type ApproveIxAccounts = ApproveIxAccs<Pubkey>;
pub type ApproveIxAccsFlag = ApproveIxAccs<bool>;

pub const APPROVE_IX_IS_SIGNER: ApproveIxAccsFlag = ApproveIxAccs::memset(false);

pub const APPROVE_IX_IS_WRITABLE: ApproveIxAccsFlag =
    ApproveIxAccs::memset(false).const_with_source(true);

/// Let `delegate` transfer up to `amount` tokens out of `source`.
pub fn approve_ix<'a>(
    token_prog: &Pubkey,
    accounts: ApproveIxAccounts,
    owner: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
    amount: impl Into<u128>,
) -> Result<TokenInstruction<'a>, TokenClientError> {
    assemble(
        token_prog,
        TokenInstructionKind::Approve,
        base_metas(accounts.0, APPROVE_IX_IS_SIGNER.0, APPROVE_IX_IS_WRITABLE.0),
        owner,
        multi_signers,
        &[FieldValue::U64(amount.into())],
    )
}
