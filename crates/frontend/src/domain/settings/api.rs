use contracts::domain::seller::{SellerSettings, UpdateSellerSettingsDto};

use crate::shared::api_utils::{get_json, put_json, ApiError};

pub async fn fetch_settings() -> Result<SellerSettings, ApiError> {
    get_json("/api/seller/settings").await
}

pub async fn save_settings(dto: &UpdateSellerSettingsDto) -> Result<SellerSettings, ApiError> {
    put_json("/api/seller/settings", dto).await
}
