use generic_array_struct::generic_array_struct;
use solana_pubkey::Pubkey;
use solana_signer::Signer;

use super::internal_utils::{assemble, base_metas};
use crate::{
    authority::Authority, layout::TokenInstructionKind, TokenClientError, TokenInstruction,
};

#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct RevokeIxAccs<T> {
    pub source: T,
}

impl<T: Copy> RevokeIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; REVOKE_IX_ACCS_LEN])
    }
}

pub type RevokeIxAccounts = RevokeIxAccs<Pubkey>;
pub type RevokeIxAccsFlag = RevokeIxAccs<bool>;

pub const REVOKE_IX_IS_SIGNER: RevokeIxAccsFlag = RevokeIxAccs::memset(false);

pub const REVOKE_IX_IS_WRITABLE: RevokeIxAccsFlag = RevokeIxAccs::memset(true);

/// Revoke the current delegate of `source`.
pub fn revoke_ix<'a>(
    token_prog: &Pubkey,
    accounts: RevokeIxAccounts,
    owner: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
) -> Result<TokenInstruction<'a>, TokenClientError> {
    assemble(
        token_prog,
        TokenInstructionKind::Revoke,
        base_metas(accounts.0, REVOKE_IX_IS_SIGNER.0, REVOKE_IX_IS_WRITABLE.0),
        owner,
        multi_signers,
        &[],
    )
}
