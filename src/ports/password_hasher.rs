//! Password hashing port.
//!
//! The domain never sees plaintext passwords beyond the handler call
//! stack, and never sees hashing internals at all. Implementations:
//! argon2 in production, a transparent fake in tests.

use crate::domain::foundation::AuthError;

/// Port for credential hashing and verification.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password into an opaque PHC-format string.
    ///
    /// # Errors
    ///
    /// - `Hashing` on internal failure
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` for a mismatch; `Err` only for malformed
    /// hashes or internal failure.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hasher_is_object_safe() {
        fn _accepts_dyn(_hasher: &dyn PasswordHasher) {}
    }
}
