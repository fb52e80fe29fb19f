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
pub struct MintToCheckedIxAccs<T> {
    pub mint: T,
    pub destination: T,
}

impl<T: Copy> MintToCheckedIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; MINT_TO_CHECKED_IX_ACCS_LEN])
    }
}

pub type MintToCheckedIxAccounts = MintToCheckedIxAccs<Pubkey>;
pub type MintToCheckedIxAccsFlag = MintToCheckedIxAccs<bool>;

pub const MINT_TO_CHECKED_IX_IS_SIGNER: MintToCheckedIxAccsFlag =
    MintToCheckedIxAccs::memset(false);

pub const MINT_TO_CHECKED_IX_IS_WRITABLE: MintToCheckedIxAccsFlag =
    MintToCheckedIxAccs::memset(true);

pub fn mint_to_checked_ix<'a>(
    token_prog: &Pubkey,
    accounts: MintToCheckedIxAccounts,
    mint_authority: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
    amount: impl Into<u128>,
    decimals: u8,
) -> Result<TokenInstruction<'a>, TokenClientError> {
    assemble(
        token_prog,
        TokenInstructionKind::MintToChecked,
        base_metas(
            accounts.0,
            MINT_TO_CHECKED_IX_IS_SIGNER.0,
            MINT_TO_CHECKED_IX_IS_WRITABLE.0,
        ),
        mint_authority,
        multi_signers,
        &[FieldValue::U64(amount.into()), FieldValue::U8(decimals)],
    )
}
