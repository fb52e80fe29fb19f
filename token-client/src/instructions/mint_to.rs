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
pub struct MintToIxAccs<T> {
    pub mint: T,
    pub destination: T,
}

impl<T: Copy> MintToIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; MINT_TO_IX_ACCS_LEN])
    }
}

pub type MintToIxAccounts = MintToIxAccs<Pubkey>;
pub type MintToIxAccsFlag = MintToIxAccs<bool>;

pub const MINT_TO_IX_IS_SIGNER: MintToIxAccsFlag = MintToIxAccs::memset(false);

pub const MINT_TO_IX_IS_WRITABLE: MintToIxAccsFlag = MintToIxAccs::memset(true);

/// Mint `amount` new tokens to `destination`, authorized by the mint
/// authority.
pub fn mint_to_ix<'a>(
    token_prog: &Pubkey,
    accounts: MintToIxAccounts,
    mint_authority: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
    amount: impl Into<u128>,
) -> Result<TokenInstruction<'a>, TokenClientError> {
    assemble(
        token_prog,
        TokenInstructionKind::MintTo,
        base_metas(accounts.0, MINT_TO_IX_IS_SIGNER.0, MINT_TO_IX_IS_WRITABLE.0),
        mint_authority,
        multi_signers,
        &[FieldValue::U64(amount.into())],
    )
}
