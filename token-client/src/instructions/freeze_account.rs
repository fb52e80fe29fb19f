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
pub struct FreezeAccountIxAccs<T> {
    pub account: T,
    pub mint: T,
}

impl<T: Copy> FreezeAccountIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; FREEZE_ACCOUNT_IX_ACCS_LEN])
    }
}

pub type FreezeAccountIxAccounts = FreezeAccountIxAccs<Pubkey>;
pub type FreezeAccountIxAccsFlag = FreezeAccountIxAccs<bool>;

pub const FREEZE_ACCOUNT_IX_IS_SIGNER: FreezeAccountIxAccsFlag =
    FreezeAccountIxAccs::memset(false);

pub const FREEZE_ACCOUNT_IX_IS_WRITABLE: FreezeAccountIxAccsFlag =
    FreezeAccountIxAccs::memset(false).const_with_account(true);

/// Freeze `account`, authorized by the mint's freeze authority.
pub fn freeze_account_ix<'a>(
    token_prog: &Pubkey,
    accounts: FreezeAccountIxAccounts,
    freeze_authority: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
) -> Result<TokenInstruction<'a>, TokenClientError> {
    assemble(
        token_prog,
        TokenInstructionKind::FreezeAccount,
        base_metas(
            accounts.0,
            FREEZE_ACCOUNT_IX_IS_SIGNER.0,
            FREEZE_ACCOUNT_IX_IS_WRITABLE.0,
        ),
        freeze_authority,
        multi_signers,
        &[],
    )
}
