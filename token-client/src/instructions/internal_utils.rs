use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;
use solana_signer::Signer;

use crate::{
    authority::{resolve, Authority, ResolvedAuthority},
    layout::{layout, FieldValue, TokenInstructionKind},
    TokenClientError, TokenInstruction,
};

pub(crate) fn base_metas<const N: usize>(
    keys: [Pubkey; N],
    is_signer: [bool; N],
    is_writable: [bool; N],
) -> Vec<AccountMeta> {
    keys.into_iter()
        .zip(is_signer)
        .zip(is_writable)
        .map(|((pubkey, is_signer), is_writable)| AccountMeta {
            pubkey,
            is_signer,
            is_writable,
        })
        .collect()
}

pub(crate) fn assemble<'a>(
    token_prog: &Pubkey,
    kind: TokenInstructionKind,
    base: Vec<AccountMeta>,
    authority: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
    values: &[FieldValue],
) -> Result<TokenInstruction<'a>, TokenClientError> {
    let ResolvedAuthority { metas, signers } = resolve(base, authority, multi_signers)?;
    let data = layout(kind).encode(values)?;
    Ok(TokenInstruction {
        instruction: Instruction {
            program_id: *token_prog,
            accounts: metas,
            data,
        },
        signers,
    })
}
