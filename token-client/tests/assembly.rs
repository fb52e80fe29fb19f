use geppetto_test_utils::distinct_pubkeys;
use geppetto_token_client::{
    approve_checked_ix,
    authority::{Authority, AuthorityError},
    burn_ix,
    layout::LayoutError,
    transfer_ix, ApproveCheckedIxAccs, BurnIxAccs, TokenClientError, TokenInstruction,
    TransferIxAccs,
};
use proptest::prelude::*;
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signer::Signer;

const TOKEN_PROG: Pubkey = solana_pubkey::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

#[test]
fn approve_checked_single_owner_exact_wire_form() {
    let [source, mint, delegate] = [
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
    ];
    let owner = Keypair::new();

    let TokenInstruction {
        instruction,
        signers,
    } = approve_checked_ix(
        &TOKEN_PROG,
        ApproveCheckedIxAccs([source, mint, delegate]),
        Authority::Single(&owner),
        &[],
        1_000_000u64,
        9,
    )
    .unwrap();

    assert_eq!(instruction.program_id, TOKEN_PROG);

    let flags: Vec<_> = instruction
        .accounts
        .iter()
        .map(|m| (m.pubkey, m.is_signer, m.is_writable))
        .collect();
    assert_eq!(
        flags,
        [
            (source, false, true),
            (mint, false, false),
            (delegate, false, false),
            (owner.pubkey(), true, false),
        ]
    );

    // discm 13, amount LE, decimals
    assert_eq!(
        instruction.data,
        [13, 64, 66, 15, 0, 0, 0, 0, 0, 9]
    );

    assert_eq!(signers.len(), 1);
    assert_eq!(signers[0].pubkey(), owner.pubkey());
}

#[test]
fn transfer_multisig_owner_appends_signers_in_order() {
    let [source, destination, multisig] = [
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
    ];
    let (s1, s2) = (Keypair::new(), Keypair::new());
    let multi_signers: [&dyn Signer; 2] = [&s1, &s2];

    let TokenInstruction {
        instruction,
        signers,
    } = transfer_ix(
        &TOKEN_PROG,
        TransferIxAccs([source, destination]),
        Authority::Multisig(multisig),
        &multi_signers,
        42u64,
    )
    .unwrap();

    let tail: Vec<_> = instruction.accounts[2..]
        .iter()
        .map(|m| (m.pubkey, m.is_signer))
        .collect();
    assert_eq!(
        tail,
        [
            (multisig, false),
            (s1.pubkey(), true),
            (s2.pubkey(), true),
        ]
    );
    assert_eq!(signers.len(), 2);
    assert_eq!(signers[0].pubkey(), s1.pubkey());
    assert_eq!(signers[1].pubkey(), s2.pubkey());
}

#[test]
fn single_owner_with_multisig_signers_is_an_error() {
    let owner = Keypair::new();
    let extra = Keypair::new();

    let err = transfer_ix(
        &TOKEN_PROG,
        TransferIxAccs([Pubkey::new_unique(), Pubkey::new_unique()]),
        Authority::Single(&owner),
        &[&extra],
        1u64,
    )
    .unwrap_err();
    assert_eq!(
        err,
        TokenClientError::Authority(AuthorityError::UnexpectedMultisigSigners)
    );
}

#[test]
fn multisig_owner_without_signers_is_an_error() {
    let err = burn_ix(
        &TOKEN_PROG,
        BurnIxAccs([Pubkey::new_unique(), Pubkey::new_unique()]),
        Authority::Multisig(Pubkey::new_unique()),
        &[],
        1u64,
    )
    .unwrap_err();
    assert_eq!(
        err,
        TokenClientError::Authority(AuthorityError::MissingMultisigSigners)
    );
}

#[test]
fn overwide_amount_is_an_encoding_error_not_a_truncation() {
    let owner = Keypair::new();

    let err = transfer_ix(
        &TOKEN_PROG,
        TransferIxAccs([Pubkey::new_unique(), Pubkey::new_unique()]),
        Authority::Single(&owner),
        &[],
        u64::MAX as u128 + 1,
    )
    .unwrap_err();
    assert_eq!(
        err,
        TokenClientError::Layout(LayoutError::AmountOutOfRange {
            field: "amount",
            value: u64::MAX as u128 + 1,
        })
    );
}

proptest! {
    #[test]
    fn signer_flags_always_match_returned_signer_set(
        [source, destination] in distinct_pubkeys::<2>(),
        amount in 0..=u64::MAX,
        multisig in any::<bool>(),
    ) {
        let owner = Keypair::new();
        let multisig_key = Pubkey::new_unique();
        let signer_refs: [&dyn Signer; 1] = [&owner];
        let (authority, multi_signers): (Authority, &[&dyn Signer]) = if multisig {
            (Authority::Multisig(multisig_key), &signer_refs[..])
        } else {
            (Authority::Single(&owner), &[])
        };

        let TokenInstruction { instruction, signers } = transfer_ix(
            &TOKEN_PROG,
            TransferIxAccs([source, destination]),
            authority,
            multi_signers,
            amount,
        )
        .unwrap();

        let flagged: Vec<_> = instruction
            .accounts
            .iter()
            .filter(|m| m.is_signer)
            .map(|m| m.pubkey)
            .collect();
        let set: Vec<_> = signers.iter().map(|s| s.pubkey()).collect();
        prop_assert_eq!(flagged, set);
    }
}
