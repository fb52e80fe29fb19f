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
pub struct BurnIxAccs<T> {
    pub source: T,
    pub mint: T,
}

impl<T: Copy> BurnIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; BURN_IX_ACCS_LEN])
    }
}

pub type BurnIxAccounts = BurnIxAccs<Pubkey>;
pub type BurnIxAccsFlag = BurnIxAccs<bool>;

pub const BURN_IX_IS_SIGNER: BurnIxAccsFlag = BurnIxAccs::memset(false);

pub const BURN_IX_IS_WRITABLE: BurnIxAccsFlag = BurnIxAccs::memset(true);

/// Burn `amount` tokens from `source`.
pub fn burn_ix<'a>(
    token_prog: &Pubkey,
    accounts: BurnIxAccounts,
    owner: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
    amount: impl Into<u128>,
) -> Result<TokenInstruction<'a>, TokenClientError> {
    assemble(
        token_prog,
        TokenInstructionKind::Burn,
        base_metas(accounts.0, BURN_IX_IS_SIGNER.0, BURN_IX_IS_WRITABLE.0),
        owner,
        multi_signers,
        &[FieldValue::U64(amount.into())],
    )
}
