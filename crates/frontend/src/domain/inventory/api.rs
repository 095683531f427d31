use contracts::domain::inventory::{StockAdjustmentDto, StockItem};

use crate::shared::api_utils::{get_json, put_json, ApiError};

pub async fn fetch_inventory() -> Result<Vec<StockItem>, ApiError> {
    get_json("/api/seller/inventory").await
}

/// Sets the on-hand quantity of a product; returns the updated row.
pub async fn adjust_stock(
    product_id: &str,
    dto: &StockAdjustmentDto,
) -> Result<StockItem, ApiError> {
    let path = format!("/api/seller/inventory/{}", urlencoding::encode(product_id));
    put_json(&path, dto).await
}
