use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Active,
    Draft,
    OutOfStock,
}

impl ProductStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Draft => "draft",
            ProductStatus::OutOfStock => "out_of_stock",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Draft => "Draft",
            ProductStatus::OutOfStock => "Out of stock",
        }
    }

    pub fn all() -> Vec<ProductStatus> {
        vec![
            ProductStatus::Active,
            ProductStatus::Draft,
            ProductStatus::OutOfStock,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub compare_at_price: Option<f64>,
    pub stock: u32,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Discount relative to `compare_at_price`, in whole percent.
    pub fn discount_percent(&self) -> Option<u32> {
        let compare = self.compare_at_price?;
        if compare <= self.price || compare <= 0.0 {
            return None;
        }
        Some((((compare - self.price) / compare) * 100.0).round() as u32)
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub price: f64,
    pub compare_at_price: Option<f64>,
    pub stock: u32,
    pub status: ProductStatus,
}

impl ProductDto {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Product name is required");
        }
        if self.sku.trim().is_empty() {
            anyhow::bail!("SKU is required");
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            anyhow::bail!("Price must be greater than zero");
        }
        if let Some(compare) = self.compare_at_price {
            if compare < self.price {
                anyhow::bail!("Compare-at price cannot be lower than the price");
            }
        }
        Ok(())
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            sku: p.sku.clone(),
            description: p.description.clone(),
            category_id: p.category_id.clone(),
            price: p.price,
            compare_at_price: p.compare_at_price,
            stock: p.stock,
            status: p.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ProductDto {
        ProductDto {
            name: "Ceramic mug".into(),
            sku: "MUG-01".into(),
            price: 12.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_accepts_minimal_product() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let mut d = dto();
        d.name = "  ".into();
        assert!(d.validate().is_err());

        let mut d = dto();
        d.price = 0.0;
        assert!(d.validate().is_err());

        let mut d = dto();
        d.compare_at_price = Some(10.0);
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "id": "p-1", "name": "Mug", "sku": "MUG", "price": 8.0, "stock": 3,
            "created_at": "2024-03-15T14:02:26Z", "updated_at": "2024-03-15T14:02:26Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.status, ProductStatus::Active);
        assert!(product.images.is_empty());
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn test_discount_percent() {
        let json = r#"{
            "id": "p-1", "name": "Mug", "sku": "MUG", "price": 75.0, "compare_at_price": 100.0,
            "stock": 3, "created_at": "2024-03-15T14:02:26Z", "updated_at": "2024-03-15T14:02:26Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.discount_percent(), Some(25));
    }
}
