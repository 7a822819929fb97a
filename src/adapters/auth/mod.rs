//! Auth adapters - argon2 password hashing, JWT tokens, and test fakes.

mod argon2_hasher;
mod jwt;
mod mock;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt::JwtTokenService;
pub use mock::{MockPasswordHasher, MockTokenIssuer, MockTokenValidator};
