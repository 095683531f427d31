use contracts::domain::wallet::{Withdrawal, WithdrawalRequestDto};

use crate::shared::api_utils::{get_json, post_json, ApiError};

pub async fn fetch_withdrawals() -> Result<Vec<Withdrawal>, ApiError> {
    get_json("/api/seller/withdrawals").await
}

pub async fn request_withdrawal(dto: &WithdrawalRequestDto) -> Result<Withdrawal, ApiError> {
    post_json("/api/seller/withdrawals", dto).await
}
