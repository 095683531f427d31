use serde::{Deserialize, Serialize};

use super::order::Order;

/// Headline figures shown on the seller dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_revenue: f64,
    pub total_orders: u32,
    pub pending_orders: u32,
    pub total_products: u32,
    pub low_stock_products: u32,
    pub wallet_balance: f64,
    #[serde(default)]
    pub recent_orders: Vec<Order>,
}
