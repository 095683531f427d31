use contracts::domain::dashboard::DashboardSummary;

use crate::shared::api_utils::{get_json, ApiError};

/// Headline figures and the latest orders of the seller
pub async fn get_summary() -> Result<DashboardSummary, ApiError> {
    get_json("/api/seller/dashboard").await
}
