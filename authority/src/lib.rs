//! Resolves a token account's owner into the account-list entries and
//! transaction signers the receiving program expects.
//!
//! The program re-derives "who signed" from transaction metadata, so the
//! signer flags appended here and the returned signer set must agree by
//! position and count. Pure list assembly; nothing here signs or touches the
//! network.

use solana_instruction::AccountMeta;
use solana_pubkey::Pubkey;
use solana_signer::Signer;
use thiserror::Error;

/// The party empowered to authorize an operation on an account or mint.
#[derive(Clone, Copy)]
pub enum Authority<'a> {
    /// An authority that signs for itself.
    Single(&'a dyn Signer),
    /// A multisig account. Not itself a held credential; the actual signers
    /// are supplied separately and must be at least one.
    Multisig(Pubkey),
}

/// Ordered signers the enclosing transaction must carry.
pub type SignerSet<'a> = Vec<&'a dyn Signer>;

pub struct ResolvedAuthority<'a> {
    pub metas: Vec<AccountMeta>,
    pub signers: SignerSet<'a>,
}

impl core::fmt::Debug for ResolvedAuthority<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResolvedAuthority")
            .field("metas", &self.metas)
            .field(
                "signers",
                &self.signers.iter().map(|s| s.pubkey()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthorityError {
    #[error("multisig signers supplied for a single-signer authority")]
    UnexpectedMultisigSigners,

    #[error("multisig authority requires at least one signer")]
    MissingMultisigSigners,
}

/// Appends the authority slot(s) after `base` and derives the signer set.
///
/// Single authority: one `(pubkey, signer=true, writable=false)` entry,
/// signer set is that authority alone; `multi_signers` must be empty.
///
/// Multisig authority: the multisig key as a non-signer followed by every
/// entry of `multi_signers` as `(pubkey, signer=true, writable=false)` in
/// caller order; signer set is `multi_signers` in that same order.
pub fn resolve<'a>(
    mut base: Vec<AccountMeta>,
    authority: Authority<'a>,
    multi_signers: &[&'a dyn Signer],
) -> Result<ResolvedAuthority<'a>, AuthorityError> {
    let signers = match authority {
        Authority::Single(owner) => {
            if !multi_signers.is_empty() {
                return Err(AuthorityError::UnexpectedMultisigSigners);
            }
            base.push(AccountMeta::new_readonly(owner.pubkey(), true));
            vec![owner]
        }
        Authority::Multisig(key) => {
            if multi_signers.is_empty() {
                return Err(AuthorityError::MissingMultisigSigners);
            }
            base.push(AccountMeta::new_readonly(key, false));
            for signer in multi_signers {
                base.push(AccountMeta::new_readonly(signer.pubkey(), true));
            }
            multi_signers.to_vec()
        }
    };
    Ok(ResolvedAuthority {
        metas: base,
        signers,
    })
}

#[cfg(test)]
mod tests {
    use geppetto_test_utils::any_pubkey;
    use proptest::{collection::vec, prelude::*};
    use solana_keypair::Keypair;

    use super::*;

    fn base_metas(keys: &[Pubkey]) -> Vec<AccountMeta> {
        keys.iter().map(|pk| AccountMeta::new(*pk, false)).collect()
    }

    #[test]
    fn single_authority_appends_signer_slot() {
        let owner = Keypair::new();
        let base_key = Pubkey::new_unique();

        let ResolvedAuthority { metas, signers } =
            resolve(base_metas(&[base_key]), Authority::Single(&owner), &[]).unwrap();

        assert_eq!(metas.len(), 2);
        assert_eq!(metas[1].pubkey, owner.pubkey());
        assert!(metas[1].is_signer);
        assert!(!metas[1].is_writable);
        assert_eq!(signers.len(), 1);
        assert_eq!(signers[0].pubkey(), owner.pubkey());
    }

    #[test]
    fn multisig_authority_appends_bare_key_then_signers() {
        let multisig = Pubkey::new_unique();
        let (s1, s2) = (Keypair::new(), Keypair::new());
        let signers: [&dyn Signer; 2] = [&s1, &s2];

        let ResolvedAuthority { metas, signers } =
            resolve(vec![], Authority::Multisig(multisig), &signers).unwrap();

        assert_eq!(metas.len(), 3);
        assert_eq!(metas[0].pubkey, multisig);
        assert!(!metas[0].is_signer);
        assert!(!metas[0].is_writable);
        assert_eq!(metas[1].pubkey, s1.pubkey());
        assert!(metas[1].is_signer);
        assert_eq!(metas[2].pubkey, s2.pubkey());
        assert!(metas[2].is_signer);
        // caller order preserved
        assert_eq!(signers[0].pubkey(), s1.pubkey());
        assert_eq!(signers[1].pubkey(), s2.pubkey());
    }

    #[test]
    fn single_authority_rejects_multisig_signers() {
        let owner = Keypair::new();
        let extra = Keypair::new();
        let err = resolve(vec![], Authority::Single(&owner), &[&extra]).unwrap_err();
        assert_eq!(err, AuthorityError::UnexpectedMultisigSigners);
    }

    #[test]
    fn multisig_authority_rejects_empty_signer_list() {
        let err = resolve(vec![], Authority::Multisig(Pubkey::new_unique()), &[]).unwrap_err();
        assert_eq!(err, AuthorityError::MissingMultisigSigners);
    }

    proptest! {
        #[test]
        fn signer_flags_match_signer_set(
            base_keys in vec(any_pubkey(), 0..4),
            n_signers in 1usize..=5,
        ) {
            let keypairs: Vec<_> = (0..n_signers).map(|_| Keypair::new()).collect();
            let signer_refs: Vec<&dyn Signer> =
                keypairs.iter().map(|k| k as &dyn Signer).collect();

            let ResolvedAuthority { metas, signers } = resolve(
                base_metas(&base_keys),
                Authority::Multisig(Pubkey::new_unique()),
                &signer_refs,
            )
            .unwrap();

            let flagged: Vec<_> = metas
                .iter()
                .filter(|m| m.is_signer)
                .map(|m| m.pubkey)
                .collect();
            let set: Vec<_> = signers.iter().map(|s| s.pubkey()).collect();
            prop_assert_eq!(flagged, set);
        }
    }
}
