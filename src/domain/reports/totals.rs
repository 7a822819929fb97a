//! Dashboard totals - the owner-wide aggregate figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Liters, Money};

/// Owner-wide totals shown on the dashboard.
///
/// Empty record sets produce all-zero totals, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardTotals {
    /// Total milk produced across the herd.
    pub total_milk: Liters,

    /// Total amount billed across all distributions.
    pub total_revenue: Money,

    /// Total amount spent across all expenses.
    pub total_expenses: Money,

    /// Revenue minus expenses. Signed: a loss is negative.
    pub profit: Decimal,
}

impl DashboardTotals {
    /// Assembles totals from the three underlying sums.
    pub fn from_sums(total_milk: Liters, total_revenue: Money, total_expenses: Money) -> Self {
        let profit = total_revenue.amount() - total_expenses.amount();
        Self {
            total_milk,
            total_revenue,
            total_expenses,
            profit,
        }
    }

    /// The all-zero totals of an empty record set.
    pub fn zero() -> Self {
        Self::from_sums(Liters::zero(), Money::zero(), Money::zero())
    }
}
