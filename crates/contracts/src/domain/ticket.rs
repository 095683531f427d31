use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Normal,
    High,
}

impl TicketPriority {
    pub fn code(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Normal => "normal",
            TicketPriority::High => "high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Normal => "Normal",
            TicketPriority::High => "High",
        }
    }

    pub fn all() -> Vec<TicketPriority> {
        vec![TicketPriority::Low, TicketPriority::Normal, TicketPriority::High]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaiseTicketDto {
    pub subject: String,
    pub message: String,
    pub priority: TicketPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl RaiseTicketDto {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.subject.trim().is_empty() {
            anyhow::bail!("Subject is required");
        }
        if self.message.trim().len() < 10 {
            anyhow::bail!("Please describe the issue in at least 10 characters");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_validation() {
        let mut dto = RaiseTicketDto {
            subject: "Payout delayed".into(),
            message: "My payout from last week has not arrived.".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.message = "help".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_order_id_omitted_when_absent() {
        let dto = RaiseTicketDto {
            subject: "s".into(),
            message: "m".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("order_id").is_none());
        assert_eq!(json["priority"], "normal");
    }
}
