//! Known-answer tests against the reference implementation's vectors
//! (argon2i, 32-byte digests, versions 0x10 and 0x13).

use argonlite::{Hasher, SecurityParameters, Variant, Version};

fn hashtest(
    version: Version,
    t_cost: u32,
    log2_m: u32,
    lanes: u32,
    pwd: &str,
    salt: &str,
    hex_ref: &str,
    encoded_ref: &str,
) {
    let params = SecurityParameters::new(t_cost, 1 << log2_m, lanes);
    let hasher = Hasher::new(params, 32, Variant::Argon2i, version);

    let result = hasher.hash_with_salt(pwd.as_bytes(), salt.as_bytes()).expect("hash");
    assert_eq!(result.to_hex(), hex_ref);
    assert_eq!(hex::encode(result.digest()), hex_ref);
    assert_eq!(result.digest().len(), 32);
    assert_eq!(result.encoded(), encoded_ref);
}

#[test]
fn version10_reference_vectors() {
    let version = Version::V0x10;

    hashtest(
        version,
        2,
        16,
        1,
        "password",
        "somesalt",
        "f6c4db4a54e2a370627aff3db6176b94a2a209a62c8e36152711802f7b30c694",
        "$argon2i$m=65536,t=2,p=1$c29tZXNhbHQ$9sTbSlTio3Biev89thdrlKKiCaYsjjYVJxGAL3swxpQ",
    );
    hashtest(
        version,
        2,
        8,
        1,
        "password",
        "somesalt",
        "fd4dd83d762c49bdeaf57c47bdcd0c2f1babf863fdeb490df63ede9975fccf06",
        "$argon2i$m=256,t=2,p=1$c29tZXNhbHQ$/U3YPXYsSb3q9XxHvc0MLxur+GP960kN9j7emXX8zwY",
    );
    hashtest(
        version,
        2,
        8,
        2,
        "password",
        "somesalt",
        "b6c11560a6a9d61eac706b79a2f97d68b4463aa3ad87e00c07e2b01e90c564fb",
        "$argon2i$m=256,t=2,p=2$c29tZXNhbHQ$tsEVYKap1h6scGt5ovl9aLRGOqOth+AMB+KwHpDFZPs",
    );
    hashtest(
        version,
        1,
        16,
        1,
        "password",
        "somesalt",
        "81630552b8f3b1f48cdb1992c4c678643d490b2b5eb4ff6c4b3438b5621724b2",
        "$argon2i$m=65536,t=1,p=1$c29tZXNhbHQ$gWMFUrjzsfSM2xmSxMZ4ZD1JCytetP9sSzQ4tWIXJLI",
    );
}

#[test]
fn version13_reference_vectors() {
    let version = Version::V0x13;

    hashtest(
        version,
        2,
        16,
        1,
        "password",
        "somesalt",
        "c1628832147d9720c5bd1cfd61367078729f6dfb6f8fea9ff98158e0d7816ed0",
        "$argon2i$v=19$m=65536,t=2,p=1$c29tZXNhbHQ$wWKIMhR9lyDFvRz9YTZweHKfbftvj+qf+YFY4NeBbtA",
    );
    hashtest(
        version,
        2,
        8,
        1,
        "password",
        "somesalt",
        "89e9029f4637b295beb027056a7336c414fadd43f6b208645281cb214a56452f",
        "$argon2i$v=19$m=256,t=2,p=1$c29tZXNhbHQ$iekCn0Y3spW+sCcFanM2xBT63UP2sghkUoHLIUpWRS8",
    );
    hashtest(
        version,
        2,
        8,
        2,
        "password",
        "somesalt",
        "4ff5ce2769a1d7f4c8a491df09d41a9fbe90e5eb02155a13e4c01e20cd4eab61",
        "$argon2i$v=19$m=256,t=2,p=2$c29tZXNhbHQ$T/XOJ2mh1/TIpJHfCdQan76Q5esCFVoT5MAeIM1Oq2E",
    );
    hashtest(
        version,
        1,
        16,
        1,
        "password",
        "somesalt",
        "d168075c4d985e13ebeae560cf8b94c3b5d8a16c51916b6f4ac2da3ac11bbecf",
        "$argon2i$v=19$m=65536,t=1,p=1$c29tZXNhbHQ$0WgHXE2YXhPr6uVgz4uUw7XYoWxRkWtvSsLaOsEbvs8",
    );
}

#[test]
fn reference_encodings_verify() {
    // Low-memory vectors keep the re-derivation cheap.
    let legacy = "$argon2i$m=256,t=2,p=1$c29tZXNhbHQ$/U3YPXYsSb3q9XxHvc0MLxur+GP960kN9j7emXX8zwY";
    let current =
        "$argon2i$v=19$m=256,t=2,p=1$c29tZXNhbHQ$iekCn0Y3spW+sCcFanM2xBT63UP2sghkUoHLIUpWRS8";

    let hasher =
        Hasher::new(SecurityParameters::new(2, 256, 1), 32, Variant::Argon2i, Version::V0x13);
    for encoded in [legacy, current] {
        assert!(hasher.verify(encoded, b"password").expect("verify"));
        assert!(!hasher.verify(encoded, b"Password").expect("verify"));
    }
}
