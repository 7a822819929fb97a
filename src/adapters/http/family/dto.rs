//! HTTP DTOs for family endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::ledger::dto::{DistributionResponse, PaymentResponse};
use crate::domain::family::Family;
use crate::domain::reports::FamilyStatement;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to add a family.
#[derive(Debug, Clone, Deserialize)]
pub struct AddFamilyRequest {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Family view.
#[derive(Debug, Clone, Serialize)]
pub struct FamilyResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub created_at: String,
}

impl From<&Family> for FamilyResponse {
    fn from(family: &Family) -> Self {
        Self {
            id: family.id().to_string(),
            name: family.name().to_string(),
            address: family.address().map(String::from),
            created_at: family.created_at().as_datetime().to_rfc3339(),
        }
    }
}

/// List of the owner's families.
#[derive(Debug, Clone, Serialize)]
pub struct FamilyListResponse {
    pub items: Vec<FamilyResponse>,
}

/// Family detail: the family, its records newest-first, and the balance.
#[derive(Debug, Clone, Serialize)]
pub struct FamilyStatementResponse {
    pub family: FamilyResponse,
    pub distributions: Vec<DistributionResponse>,
    pub payments: Vec<PaymentResponse>,
    pub total_billed: String,
    pub total_paid: String,
    pub balance: String,
}

impl From<FamilyStatement> for FamilyStatementResponse {
    fn from(statement: FamilyStatement) -> Self {
        Self {
            family: FamilyResponse::from(&statement.family),
            distributions: statement
                .distributions
                .iter()
                .map(DistributionResponse::from)
                .collect(),
            payments: statement
                .payments
                .iter()
                .map(PaymentResponse::from)
                .collect(),
            total_billed: statement.total_billed.amount().to_string(),
            total_paid: statement.total_paid.amount().to_string(),
            balance: statement.balance.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AccountId, FamilyId};

    #[test]
    fn add_family_request_defaults_address_to_none() {
        let json = r#"{"name": "Smith"}"#;
        let req: AddFamilyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Smith");
        assert!(req.address.is_none());
    }

    #[test]
    fn statement_response_stringifies_the_balance() {
        let family =
            Family::new(FamilyId::new(), AccountId::new(), "Smith".to_string(), None).unwrap();
        let statement = FamilyStatement::from_records(family, vec![], vec![]);
        let response = FamilyStatementResponse::from(statement);

        assert_eq!(response.balance, "0");
        assert!(response.distributions.is_empty());
    }
}
