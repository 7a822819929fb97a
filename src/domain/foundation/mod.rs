//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the dairy ledger domain.

mod auth;
mod errors;
mod ids;
mod money;
mod ownership;
mod quantity;
mod timestamp;

pub use auth::{AuthError, AuthenticatedAccount};
pub use errors::ValidationError;
pub use ids::{
    AccountId, CowId, DistributionId, ExpenseId, FamilyId, FeedRecordId, MilkRecordId, PaymentId,
};
pub use money::Money;
pub use ownership::OwnedByAccount;
pub use quantity::{Kilograms, Liters};
pub use timestamp::Timestamp;
