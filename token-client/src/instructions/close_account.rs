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
pub struct CloseAccountIxAccs<T> {
    pub account: T,
    pub destination: T,
}

impl<T: Copy> CloseAccountIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; CLOSE_ACCOUNT_IX_ACCS_LEN])
    }
}

pub type CloseAccountIxAccounts = CloseAccountIxAccs<Pubkey>;
pub type CloseAccountIxAccsFlag = CloseAccountIxAccs<bool>;

pub const CLOSE_ACCOUNT_IX_IS_SIGNER: CloseAccountIxAccsFlag = CloseAccountIxAccs::memset(false);

pub const CLOSE_ACCOUNT_IX_IS_WRITABLE: CloseAccountIxAccsFlag = CloseAccountIxAccs::memset(true);

pub fn close_account_ix<'a>(
    token_prog: &Pubkey,
    accounts: CloseAccountIxAccounts,
    owner: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
) -> Result<TokenInstruction<'a>, TokenClientError> {
    assemble(
        token_prog,
        TokenInstructionKind::CloseAccount,
        base_metas(
            accounts.0,
            CLOSE_ACCOUNT_IX_IS_SIGNER.0,
            CLOSE_ACCOUNT_IX_IS_WRITABLE.0,
        ),
        owner,
        multi_signers,
        &[],
    )
}
