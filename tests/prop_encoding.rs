use proptest::prelude::*;

use argonlite::hasher::encoded_len;
use argonlite::{Hasher, SecurityParameters, Variant, Version};

// Costs spanning one to four decimal digits while keeping t * m small
// enough that a case finishes quickly.
fn costs() -> impl Strategy<Value = (u32, u32)> {
    prop_oneof![
        (1u32..=4u32, 32u32..=9999u32),
        (1000u32..=1500u32, 32u32..=64u32),
    ]
}

fn variants() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Argon2d), Just(Variant::Argon2i), Just(Variant::Argon2id)]
}

fn versions() -> impl Strategy<Value = Version> {
    prop_oneof![Just(Version::V0x10), Just(Version::V0x13)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn prop_estimate_covers_actual_encoded_length(
        (t_cost, m_cost) in costs(),
        lanes in 1u32..=4u32,
        salt_len in 8usize..=48,
        hash_len in 16usize..=64,
        variant in variants(),
        version in versions(),
    ) {
        let params = SecurityParameters::new(t_cost, m_cost, lanes);
        let hasher = Hasher::new(params, hash_len, variant, version);
        let salt = vec![0x5au8; salt_len];

        let result = hasher.hash_with_salt(b"password", &salt).unwrap();
        let estimate = encoded_len(&params, version, hash_len, salt_len);
        prop_assert!(
            result.encoded().len() <= estimate,
            "encoded {} bytes, estimate {}",
            result.encoded().len(),
            estimate
        );
        let expected_prefix = format!("${}$", variant.tag());
        prop_assert!(result.encoded().starts_with(&expected_prefix));
    }
}
