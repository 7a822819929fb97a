//! HTTP DTOs for report endpoints.

use serde::Serialize;

use crate::domain::reports::{DashboardTotals, FamilyBalance};

/// Owner-wide dashboard totals.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub total_milk: String,
    pub total_revenue: String,
    pub total_expenses: String,
    pub profit: String,
}

impl From<DashboardTotals> for DashboardResponse {
    fn from(totals: DashboardTotals) -> Self {
        Self {
            total_milk: totals.total_milk.value().to_string(),
            total_revenue: totals.total_revenue.amount().to_string(),
            total_expenses: totals.total_expenses.amount().to_string(),
            profit: totals.profit.to_string(),
        }
    }
}

/// A family that currently owes money.
#[derive(Debug, Clone, Serialize)]
pub struct OutstandingFamilyResponse {
    pub family_id: String,
    pub name: String,
    pub balance: String,
}

impl From<&FamilyBalance> for OutstandingFamilyResponse {
    fn from(balance: &FamilyBalance) -> Self {
        Self {
            family_id: balance.family.id().to_string(),
            name: balance.family.name().to_string(),
            balance: balance.balance.to_string(),
        }
    }
}

/// The notifications view: families with positive balance.
#[derive(Debug, Clone, Serialize)]
pub struct OutstandingListResponse {
    pub items: Vec<OutstandingFamilyResponse>,
}
