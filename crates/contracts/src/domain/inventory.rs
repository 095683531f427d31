use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stock level of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub product_id: String,
    pub product_name: String,
    pub sku: String,
    pub quantity: u32,
    #[serde(default)]
    pub reserved: u32,
    pub updated_at: DateTime<Utc>,
}

impl StockItem {
    pub fn available(&self) -> u32 {
        self.quantity.saturating_sub(self.reserved)
    }

    pub fn is_low(&self, threshold: u32) -> bool {
        self.available() <= threshold
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAdjustmentDto {
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_uses_available_quantity() {
        let item = StockItem {
            product_id: "p".into(),
            product_name: "Mug".into(),
            sku: "MUG".into(),
            quantity: 8,
            reserved: 4,
            updated_at: Utc::now(),
        };
        assert_eq!(item.available(), 4);
        assert!(item.is_low(5));
        assert!(!item.is_low(3));
    }

    #[test]
    fn test_over_reserved_saturates() {
        let item = StockItem {
            product_id: "p".into(),
            product_name: "Mug".into(),
            sku: "MUG".into(),
            quantity: 1,
            reserved: 3,
            updated_at: Utc::now(),
        };
        assert_eq!(item.available(), 0);
    }
}
