use serde::{Deserialize, Serialize};

/// Payout bank account of the seller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutAccount {
    pub account_holder: String,
    pub bank_name: String,
    pub account_number: String,
    #[serde(default)]
    pub routing_code: Option<String>,
}

impl PayoutAccount {
    /// Account number with all but the last four characters hidden.
    pub fn masked_number(&self) -> String {
        let chars: Vec<char> = self.account_number.chars().collect();
        let keep = chars.len().min(4);
        let hidden = chars.len() - keep;
        let mut out = "•".repeat(hidden);
        out.extend(&chars[hidden..]);
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerSettings {
    pub store_name: String,
    pub contact_email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub store_description: Option<String>,
    #[serde(default)]
    pub payout: Option<PayoutAccount>,
    #[serde(default)]
    pub order_notifications: bool,
}

pub type UpdateSellerSettingsDto = SellerSettings;

impl SellerSettings {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.store_name.trim().is_empty() {
            anyhow::bail!("Store name is required");
        }
        if !self.contact_email.contains('@') {
            anyhow::bail!("Contact email is invalid");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_number() {
        let acc = PayoutAccount {
            account_number: "12345678".into(),
            ..Default::default()
        };
        assert_eq!(acc.masked_number(), "••••5678");

        let short = PayoutAccount {
            account_number: "12".into(),
            ..Default::default()
        };
        assert_eq!(short.masked_number(), "12");
    }

    #[test]
    fn test_settings_validation() {
        let mut s = SellerSettings {
            store_name: "Acme".into(),
            contact_email: "shop@acme.test".into(),
            ..Default::default()
        };
        assert!(s.validate().is_ok());
        s.contact_email = "nope".into();
        assert!(s.validate().is_err());
    }
}
