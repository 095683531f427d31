use contracts::domain::order::OrderStatus;
use contracts::domain::product::ProductStatus;
use contracts::domain::wallet::WithdrawalStatus;
use leptos::prelude::*;

pub fn order_status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge--warning",
        OrderStatus::Processing => "badge badge--info",
        OrderStatus::Shipped => "badge badge--info",
        OrderStatus::Delivered => "badge badge--success",
        OrderStatus::Cancelled | OrderStatus::Returned => "badge badge--error",
    }
}

pub fn product_status_class(status: ProductStatus) -> &'static str {
    match status {
        ProductStatus::Active => "badge badge--success",
        ProductStatus::Draft => "badge badge--neutral",
        ProductStatus::OutOfStock => "badge badge--error",
    }
}

pub fn withdrawal_status_class(status: WithdrawalStatus) -> &'static str {
    match status {
        WithdrawalStatus::Requested => "badge badge--warning",
        WithdrawalStatus::Approved => "badge badge--info",
        WithdrawalStatus::Paid => "badge badge--success",
        WithdrawalStatus::Rejected => "badge badge--error",
    }
}

#[component]
pub fn OrderStatusBadge(status: OrderStatus) -> impl IntoView {
    view! { <span class=order_status_class(status)>{status.display_name()}</span> }
}

#[component]
pub fn ProductStatusBadge(status: ProductStatus) -> impl IntoView {
    view! { <span class=product_status_class(status)>{status.display_name()}</span> }
}

#[component]
pub fn WithdrawalStatusBadge(status: WithdrawalStatus) -> impl IntoView {
    view! { <span class=withdrawal_status_class(status)>{status.display_name()}</span> }
}
