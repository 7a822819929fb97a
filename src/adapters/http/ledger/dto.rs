//! HTTP DTOs for ledger endpoints.
//!
//! Dates arrive as `YYYY-MM-DD` strings and magnitudes as decimal
//! strings; parsing happens at this boundary so malformed input turns
//! into a 400 before any domain object is built.

use serde::{Deserialize, Serialize};

use crate::domain::ledger::{Distribution, Expense, Payment};
use crate::domain::reports::ExpenseReport;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to log a milk distribution.
#[derive(Debug, Clone, Deserialize)]
pub struct LogDistributionRequest {
    pub family_id: String,
    pub date: String,
    pub liters: String,
    pub amount: String,
}

/// Request to record a payment.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPaymentRequest {
    pub family_id: String,
    pub date: String,
    pub amount_paid: String,
}

/// Request to log an expense.
#[derive(Debug, Clone, Deserialize)]
pub struct LogExpenseRequest {
    pub date: String,
    pub category: String,
    pub amount: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Distribution view.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionResponse {
    pub id: String,
    pub family_id: String,
    pub date: String,
    pub liters: String,
    pub amount: String,
}

impl From<&Distribution> for DistributionResponse {
    fn from(d: &Distribution) -> Self {
        Self {
            id: d.id().to_string(),
            family_id: d.family_id().to_string(),
            date: d.date().to_string(),
            liters: d.liters().value().to_string(),
            amount: d.amount().amount().to_string(),
        }
    }
}

/// Payment view.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub id: String,
    pub family_id: String,
    pub date: String,
    pub amount_paid: String,
}

impl From<&Payment> for PaymentResponse {
    fn from(p: &Payment) -> Self {
        Self {
            id: p.id().to_string(),
            family_id: p.family_id().to_string(),
            date: p.date().to_string(),
            amount_paid: p.amount_paid().amount().to_string(),
        }
    }
}

/// Expense view.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseResponse {
    pub id: String,
    pub date: String,
    pub category: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Expense> for ExpenseResponse {
    fn from(e: &Expense) -> Self {
        Self {
            id: e.id().to_string(),
            date: e.date().to_string(),
            category: e.category().as_str().to_string(),
            amount: e.amount().amount().to_string(),
            description: e.description().map(String::from),
        }
    }
}

/// Expense list with its running total.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseListResponse {
    pub items: Vec<ExpenseResponse>,
    pub total: String,
}

impl From<ExpenseReport> for ExpenseListResponse {
    fn from(report: ExpenseReport) -> Self {
        Self {
            items: report.expenses.iter().map(ExpenseResponse::from).collect(),
            total: report.total.amount().to_string(),
        }
    }
}
