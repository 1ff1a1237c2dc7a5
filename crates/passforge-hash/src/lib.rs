//! # passforge-hash
//!
//! Argon2id password hashing and verification for Passforge.
//!
//! [`PasswordHasher`] carries an immutable work-factor configuration and
//! produces self-describing PHC-format hash strings. The module-level
//! functions [`hash_password`], [`verify_password`], and
//! [`get_password_hash`] cover call sites that are happy with the
//! default work factors.

pub mod password;

pub use password::{PasswordHasher, get_password_hash, hash_password, verify_password};
