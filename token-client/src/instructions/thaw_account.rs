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
pub struct ThawAccountIxAccs<T> {
    pub account: T,
    pub mint: T,
}

impl<T: Copy> ThawAccountIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; THAW_ACCOUNT_IX_ACCS_LEN])
    }
}

pub type ThawAccountIxAccounts = ThawAccountIxAccs<Pubkey>;
pub type ThawAccountIxAccsFlag = ThawAccountIxAccs<bool>;

pub const THAW_ACCOUNT_IX_IS_SIGNER: ThawAccountIxAccsFlag = ThawAccountIxAccs::memset(false);

pub const THAW_ACCOUNT_IX_IS_WRITABLE: ThawAccountIxAccsFlag =
    ThawAccountIxAccs::memset(false).const_with_account(true);

/// Thaw a frozen `account`, authorized by the mint's freeze authority.
pub fn thaw_account_ix<'a>(
    token_prog: &Pubkey,
    accounts: ThawAccountIxAccounts,
    freeze_authority: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
) -> Result<TokenInstruction<'a>, TokenClientError> {
    assemble(
        token_prog,
        TokenInstructionKind::ThawAccount,
        base_metas(
            accounts.0,
            THAW_ACCOUNT_IX_IS_SIGNER.0,
            THAW_ACCOUNT_IX_IS_WRITABLE.0,
        ),
        freeze_authority,
        multi_signers,
        &[],
    )
}
