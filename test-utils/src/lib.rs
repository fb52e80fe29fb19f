use proptest::prelude::*;
use solana_pubkey::Pubkey;

pub fn any_pubkey() -> impl Strategy<Value = Pubkey> {
    any::<[u8; 32]>().prop_map(Pubkey::new_from_array)
}

/// `N` pairwise-distinct pubkeys, for account lists where slots must not
/// alias each other.
pub fn distinct_pubkeys<const N: usize>() -> impl Strategy<Value = [Pubkey; N]> {
    any::<[[u8; 32]; N]>()
        .prop_filter("pubkeys must be pairwise distinct", |keys| {
            keys.iter()
                .enumerate()
                .all(|(i, k)| keys[..i].iter().all(|prev| prev != k))
        })
        .prop_map(|keys| keys.map(Pubkey::new_from_array))
}
