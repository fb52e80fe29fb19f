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
pub struct BurnCheckedIxAccs<T> {
    pub source: T,
    pub mint: T,
}

impl<T: Copy> BurnCheckedIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; BURN_CHECKED_IX_ACCS_LEN])
    }
}

pub type BurnCheckedIxAccounts = BurnCheckedIxAccs<Pubkey>;
pub type BurnCheckedIxAccsFlag = BurnCheckedIxAccs<bool>;

pub const BURN_CHECKED_IX_IS_SIGNER: BurnCheckedIxAccsFlag = BurnCheckedIxAccs::memset(false);

pub const BURN_CHECKED_IX_IS_WRITABLE: BurnCheckedIxAccsFlag = BurnCheckedIxAccs::memset(true);

pub fn burn_checked_ix<'a>(
    token_prog: &Pubkey,
    accounts: BurnCheckedIxAccounts,
    owner: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
    amount: impl Into<u128>,
    decimals: u8,
) -> Result<TokenInstruction<'a>, TokenClientError> {
    assemble(
        token_prog,
        TokenInstructionKind::BurnChecked,
        base_metas(
            accounts.0,
            BURN_CHECKED_IX_IS_SIGNER.0,
            BURN_CHECKED_IX_IS_WRITABLE.0,
        ),
        owner,
        multi_signers,
        &[FieldValue::U64(amount.into()), FieldValue::U8(decimals)],
    )
}
