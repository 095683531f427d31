use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryDto {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Category name is required");
        }
        Ok(())
    }
}
