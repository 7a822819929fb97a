//! Per-family statements and outstanding balances.
//!
//! A statement is the family detail view: the family, its distributions
//! and payments newest-first, and the derived billed/paid/balance figures.
//! The balance is signed: positive means the family owes, negative means
//! it has overpaid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::family::Family;
use crate::domain::foundation::Money;
use crate::domain::ledger::{Distribution, Payment};

/// Full statement for one family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyStatement {
    pub family: Family,

    /// Distributions to this family, newest first.
    pub distributions: Vec<Distribution>,

    /// Payments from this family, newest first.
    pub payments: Vec<Payment>,

    /// Sum of all amounts billed.
    pub total_billed: Money,

    /// Sum of all amounts paid.
    pub total_paid: Money,

    /// `total_billed - total_paid`. Signed.
    pub balance: Decimal,
}

impl FamilyStatement {
    /// Assembles a statement from the family's raw records.
    ///
    /// Records are reordered newest-first; the sums are exact decimal
    /// arithmetic, so insertion order cannot affect the result.
    pub fn from_records(
        family: Family,
        mut distributions: Vec<Distribution>,
        mut payments: Vec<Payment>,
    ) -> Self {
        distributions.sort_by(|a, b| b.date().cmp(&a.date()));
        payments.sort_by(|a, b| b.date().cmp(&a.date()));

        let total_billed: Money = distributions.iter().map(|d| d.amount()).sum();
        let total_paid: Money = payments.iter().map(|p| p.amount_paid()).sum();
        let balance = total_billed.amount() - total_paid.amount();

        Self {
            family,
            distributions,
            payments,
            total_billed,
            total_paid,
            balance,
        }
    }

    /// Returns true if the family owes money.
    pub fn is_outstanding(&self) -> bool {
        self.balance > Decimal::ZERO
    }
}

/// A family together with its signed balance, for the notifications view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyBalance {
    pub family: Family,
    pub balance: Decimal,
}

/// Keeps only families that owe money (`balance > 0`).
pub fn with_positive_balance(balances: Vec<FamilyBalance>) -> Vec<FamilyBalance> {
    balances
        .into_iter()
        .filter(|b| b.balance > Decimal::ZERO)
        .collect()
}
