//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, Salt, SaltString,
        rand_core::{OsRng, RngCore},
    },
};

use passforge_core::config::hashing::HashingConfig;
use passforge_core::error::AppError;

/// Handles password hashing and verification using Argon2id.
///
/// The work factors are validated and fixed at construction; the hasher
/// itself holds no mutable state and is safe to share across threads.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a password hasher with the given work factors.
    ///
    /// Returns a configuration error when the parameter combination is
    /// rejected by the Argon2 primitive (e.g. a zero memory cost).
    pub fn new(config: &HashingConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.memory_cost_kib,
            config.time_cost,
            config.parallelism,
            None,
        )
        .map_err(|e| AppError::configuration(format!("Invalid hashing parameters: {e}")))?;

        tracing::debug!(
            memory_cost_kib = config.memory_cost_kib,
            time_cost = config.time_cost,
            parallelism = config.parallelism,
            "password hasher configured"
        );

        Ok(Self { params })
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    ///
    /// Every call draws a fresh salt from the OS CSPRNG, so hashing the
    /// same password twice yields different encoded strings. The empty
    /// string is hashed like any other password. The returned string is
    /// in PHC format and embeds the algorithm, version, work factors,
    /// and salt needed to verify it later.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let mut salt_bytes = [0u8; Salt::RECOMMENDED_LENGTH];
        OsRng
            .try_fill_bytes(&mut salt_bytes)
            .map_err(|e| AppError::encoding(format!("Failed to obtain salt randomness: {e}")))?;
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| AppError::encoding(format!("Failed to encode salt: {e}")))?;

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::encoding(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored encoded hash.
    ///
    /// The stored hash self-describes its algorithm, version, parameters,
    /// and salt; verification recomputes with exactly those values and
    /// compares digests in constant time.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    /// A string that does not parse as an encoded hash, or that names an
    /// unsupported algorithm, is a malformed-hash error rather than a
    /// failed match, so corrupted stored data is distinguishable from a
    /// wrong password.
    pub fn verify_password(&self, password: &str, encoded: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(encoded)
            .map_err(|e| AppError::malformed_hash(format!("Invalid password hash format: {e}")))?;

        match self
            .argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::malformed_hash(format!(
                "Unsupported password hash: {e}"
            ))),
        }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}
