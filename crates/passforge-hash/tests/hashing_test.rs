//! Integration tests for password hashing and verification.

use std::thread;

use passforge_core::config::hashing::HashingConfig;
use passforge_core::error::ErrorKind;
use passforge_hash::{PasswordHasher, get_password_hash, hash_password, verify_password};

#[test]
fn test_hash_verify_roundtrip() {
    let hash = hash_password("mypassword123").expect("hash");
    assert!(verify_password("mypassword123", &hash).expect("verify"));
    assert!(!verify_password("wrongpassword", &hash).expect("verify"));
}

#[test]
fn test_empty_password_roundtrip() {
    let hash = hash_password("").expect("hash");
    assert!(verify_password("", &hash).expect("verify"));
    assert!(!verify_password("nonempty", &hash).expect("verify"));
}

#[test]
fn test_unicode_password_roundtrip() {
    let password = "пароль密码🔒";
    let hash = hash_password(password).expect("hash");
    assert!(verify_password(password, &hash).expect("verify"));
    assert!(!verify_password("parol", &hash).expect("verify"));
}

#[test]
fn test_long_password_roundtrip() {
    let password = "a".repeat(200);
    let hash = hash_password(&password).expect("hash");
    assert!(verify_password(&password, &hash).expect("verify"));
    assert!(!verify_password(&"a".repeat(199), &hash).expect("verify"));
}

#[test]
fn test_same_password_produces_distinct_hashes() {
    let first = hash_password("mypassword123").expect("hash");
    let second = hash_password("mypassword123").expect("hash");
    assert_ne!(first, second);
    assert!(verify_password("mypassword123", &first).expect("verify"));
    assert!(verify_password("mypassword123", &second).expect("verify"));
}

#[test]
fn test_verify_rejects_malformed_hash() {
    for garbage in ["not-a-valid-hash", "", "$argon2id$", "$2b$12$tooshort"] {
        let err = verify_password("mypassword123", garbage).expect_err("must fail");
        assert_eq!(err.kind, ErrorKind::MalformedHash, "input: {garbage:?}");
    }
}

#[test]
fn test_alias_is_structurally_equivalent() {
    let direct = hash_password("mypassword123").expect("hash");
    let aliased = get_password_hash("mypassword123").expect("hash");

    // Same algorithm tag, version, and work factors; only the salt and
    // digest segments differ.
    let direct_fields: Vec<&str> = direct.split('$').collect();
    let aliased_fields: Vec<&str> = aliased.split('$').collect();
    assert_eq!(direct_fields.len(), 6);
    assert_eq!(aliased_fields.len(), 6);
    assert_eq!(direct_fields[1], "argon2id");
    assert_eq!(direct_fields[1..4], aliased_fields[1..4]);
    assert_ne!(direct_fields[4], aliased_fields[4]);

    assert_ne!(direct, aliased);
    assert!(verify_password("mypassword123", &direct).expect("verify"));
    assert!(verify_password("mypassword123", &aliased).expect("verify"));
}

#[test]
fn test_custom_config_hashes_verify_under_default_config() {
    let config = HashingConfig {
        memory_cost_kib: 8192,
        time_cost: 3,
        parallelism: 1,
    };
    let hasher = PasswordHasher::new(&config).expect("construct");
    let hash = hasher.hash_password("mypassword123").expect("hash");

    // The encoded hash carries its own parameters, so a differently
    // configured verifier still checks it correctly.
    assert!(verify_password("mypassword123", &hash).expect("verify"));
    assert!(!verify_password("wrongpassword", &hash).expect("verify"));
}

#[test]
fn test_hasher_shared_across_threads() {
    let hasher = PasswordHasher::default();
    let hash = hasher.hash_password("concurrent-secret").expect("hash");

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let fresh = hasher.hash_password("concurrent-secret").expect("hash");
                assert!(hasher.verify_password("concurrent-secret", &fresh).expect("verify"));
                assert!(hasher.verify_password("concurrent-secret", &hash).expect("verify"));
                assert!(!hasher.verify_password("other-secret", &hash).expect("verify"));
            });
        }
    });
}
