use contracts::domain::order::{Order, OrderListQuery, OrderStatus, UpdateOrderStatusDto};
use contracts::shared::paging::Page;

use crate::shared::api_utils::{get_json, put_unit, ApiError};

/// Query string for the orders endpoint; empty search is omitted.
pub fn orders_query_string(query: &OrderListQuery) -> Result<String, ApiError> {
    let mut query = query.clone();
    query.search = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    serde_qs::to_string(&query).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Fetch one page of orders (server-side pagination)
pub async fn fetch_orders(query: &OrderListQuery) -> Result<Page<Order>, ApiError> {
    let qs = orders_query_string(query)?;
    get_json(&format!("/api/seller/orders?{}", qs)).await
}

pub async fn update_order_status(id: &str, status: OrderStatus) -> Result<(), ApiError> {
    put_unit(
        &format!("/api/seller/orders/{}/status", urlencoding::encode(id)),
        &UpdateOrderStatusDto { status },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_skips_empty_filters() {
        let query = OrderListQuery {
            page: 2,
            page_size: 20,
            status: None,
            search: Some("   ".into()),
        };
        assert_eq!(orders_query_string(&query).unwrap(), "page=2&page_size=20");
    }

    #[test]
    fn test_query_string_with_filters() {
        let query = OrderListQuery {
            page: 1,
            page_size: 50,
            status: Some(OrderStatus::Shipped),
            search: Some(" ORD-1 ".into()),
        };
        assert_eq!(
            orders_query_string(&query).unwrap(),
            "page=1&page_size=50&status=shipped&search=ORD-1"
        );
    }
}
