use contracts::domain::dashboard::DashboardSummary;
use contracts::domain::order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::overview::api;
use crate::routing::use_section_selector;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::OrderStatusBadge;
use crate::shared::format::{format_datetime, format_int, format_money};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

/// Seller overview: summary cards plus the most recent orders
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<DashboardSummary>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let selector = use_section_selector();

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_summary().await {
                Ok(summary) => set_data.set(Some(summary)),
                Err(e) => {
                    log::error!("Failed to load dashboard summary: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    load();

    let card = move |pick: fn(&DashboardSummary) -> String| {
        Signal::derive(move || data.with(|d| d.as_ref().map(pick)))
    };
    let has_pending = Signal::derive(move || data.with(|d| d.as_ref().is_some_and(|d| d.pending_orders > 0)));
    let has_low_stock =
        Signal::derive(move || data.with(|d| d.as_ref().is_some_and(|d| d.low_stock_products > 0)));

    view! {
        <PageFrame page_id="dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-grid">
                    <StatCard label="Revenue" icon_name="dollar" value=card(|d| format_money(d.total_revenue)) />
                    <StatCard label="Orders" icon_name="orders" value=card(|d| format_int(d.total_orders)) />
                    <StatCard
                        label="Pending orders"
                        icon_name="orders"
                        value=card(|d| format_int(d.pending_orders))
                        accent=Signal::derive(move || Some(has_pending.get()))
                    />
                    <StatCard label="Products" icon_name="products" value=card(|d| format_int(d.total_products)) />
                    <StatCard
                        label="Low stock"
                        icon_name="stock"
                        value=card(|d| format_int(d.low_stock_products))
                        accent=Signal::derive(move || Some(has_low_stock.get()))
                    />
                    <StatCard label="Wallet balance" icon_name="wallet" value=card(|d| format_money(d.wallet_balance)) />
                </div>

                <Show when=move || has_low_stock.get()>
                    <div class="alert alert--warning">
                        {icon("alert")}
                        " Some products are running low. "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            selector.select("stock");
                        }>"Review stock"</a>
                    </div>
                </Show>

                <div class="section__header">
                    <h2 class="section__title">"Recent orders"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| selector.select("orders")>
                        "View all"
                        {icon("chevron-right")}
                    </Button>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Order"</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || data.with(|d| d.as_ref().map(|d| d.recent_orders.clone()).unwrap_or_default())
                                key=|o: &Order| (o.id.clone(), o.status)
                                children=move |order: Order| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{order.order_number.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{order.customer_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&order.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_money(order.total_amount)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <OrderStatusBadge status=order.status />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
