use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSummary {
    pub available_balance: f64,
    pub pending_balance: f64,
    pub total_earned: f64,
    pub total_withdrawn: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Credit,
    Debit,
    Withdrawal,
    Refund,
}

impl TransactionKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "Credit",
            TransactionKind::Debit => "Debit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Refund => "Refund",
        }
    }

    /// Whether the transaction increases the balance.
    pub fn is_inflow(&self) -> bool {
        matches!(self, TransactionKind::Credit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WalletTransaction {
    /// Amount with sign applied by direction.
    pub fn signed_amount(&self) -> f64 {
        if self.kind.is_inflow() {
            self.amount
        } else {
            -self.amount
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalStatus {
    Requested,
    Approved,
    Paid,
    Rejected,
}

impl WithdrawalStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            WithdrawalStatus::Requested => "Requested",
            WithdrawalStatus::Approved => "Approved",
            WithdrawalStatus::Paid => "Paid",
            WithdrawalStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: String,
    pub amount: f64,
    pub status: WithdrawalStatus,
    #[serde(default)]
    pub note: Option<String>,
    pub requested_at: DateTime<Utc>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
}

/// Minimum amount the backend accepts for a single payout.
pub const MIN_WITHDRAWAL_AMOUNT: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalRequestDto {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WithdrawalRequestDto {
    pub fn validate(&self, available_balance: f64) -> anyhow::Result<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            anyhow::bail!("Amount must be greater than zero");
        }
        if self.amount < MIN_WITHDRAWAL_AMOUNT {
            anyhow::bail!("Minimum withdrawal is {:.2}", MIN_WITHDRAWAL_AMOUNT);
        }
        if self.amount > available_balance {
            anyhow::bail!("Amount exceeds available balance ({:.2})", available_balance);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_withdrawal_validation() {
        let ok = WithdrawalRequestDto { amount: 50.0, note: None };
        assert!(ok.validate(100.0).is_ok());
        assert!(ok.validate(49.99).is_err());

        let small = WithdrawalRequestDto { amount: 5.0, note: None };
        assert!(small.validate(100.0).is_err());

        let negative = WithdrawalRequestDto { amount: -1.0, note: None };
        assert!(negative.validate(100.0).is_err());
    }

    #[test]
    fn test_signed_amount() {
        let tx = WalletTransaction {
            id: "t1".into(),
            kind: TransactionKind::Withdrawal,
            amount: 20.0,
            description: None,
            reference: None,
            created_at: Utc::now(),
        };
        assert_eq!(tx.signed_amount(), -20.0);
    }

    #[test]
    fn test_summary_default_currency() {
        let json = r#"{"available_balance":1.0,"pending_balance":0.0,"total_earned":1.0,"total_withdrawn":0.0}"#;
        let summary: WalletSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.currency, "USD");
    }
}
