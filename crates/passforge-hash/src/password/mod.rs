//! Password hashing and verification.

pub mod hasher;

pub use hasher::PasswordHasher;

use passforge_core::AppResult;

/// Hashes a plaintext password with the default work factors.
///
/// Convenience wrapper over [`PasswordHasher`] for call sites that do not
/// carry their own configuration.
pub fn hash_password(password: &str) -> AppResult<String> {
    PasswordHasher::default().hash_password(password)
}

/// Verifies a plaintext password against a stored encoded hash.
///
/// The encoded hash self-describes its parameters, so this works for
/// hashes produced under any work-factor configuration.
pub fn verify_password(plain_password: &str, hashed_password: &str) -> AppResult<bool> {
    PasswordHasher::default().verify_password(plain_password, hashed_password)
}

/// Alias of [`hash_password`] kept for call-site compatibility.
pub fn get_password_hash(password: &str) -> AppResult<String> {
    hash_password(password)
}
