use contracts::domain::wallet::{WalletSummary, WalletTransaction};
use contracts::shared::paging::Page;
use serde::Serialize;

use crate::shared::api_utils::{get_json, ApiError};

#[derive(Debug, Serialize)]
struct TransactionsQuery {
    page: usize,
    page_size: usize,
}

fn transactions_path(page: usize, page_size: usize) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(&TransactionsQuery { page, page_size })
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(format!("/api/seller/wallet/transactions?{}", qs))
}

pub async fn fetch_wallet() -> Result<WalletSummary, ApiError> {
    get_json("/api/seller/wallet").await
}

/// `page` is 1-based, as the backend expects.
pub async fn fetch_transactions(
    page: usize,
    page_size: usize,
) -> Result<Page<WalletTransaction>, ApiError> {
    get_json(&transactions_path(page, page_size)?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transactions_path() {
        assert_eq!(
            transactions_path(3, 50).unwrap(),
            "/api/seller/wallet/transactions?page=3&page_size=50"
        );
    }
}
