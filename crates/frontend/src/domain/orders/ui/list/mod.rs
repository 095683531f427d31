mod state;

use contracts::domain::order::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::orders::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::components::status_badge::OrderStatusBadge;
use crate::shared::format::{format_datetime, format_money};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use state::create_state;

#[component]
pub fn OrdersList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let updating: RwSignal<Option<String>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let (ticket, query) = state.update_untracked(|s| (s.begin_request(), s.query()));
        spawn_local(async move {
            let result = api::fetch_orders(&query).await;
            if !state.with_untracked(|s| s.is_current(ticket)) {
                log::debug!("dropping stale orders response #{}", ticket);
                return;
            }
            match result {
                Ok(page) => {
                    state.update(|s| {
                        s.items = page.items;
                        s.paging.set_total(page.total);
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::warn!("orders fetch failed: {}", e);
                    set_error.set(Some(format!("Failed to load orders: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let on_search = move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.paging.page = 0;
        });
        load_data();
    };

    let on_status_filter = move |code: String| {
        state.update(|s| {
            s.status_filter = OrderStatus::from_code(&code);
            s.paging.page = 0;
        });
        load_data();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.paging.page = page);
        load_data();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.paging.set_page_size(size));
        load_data();
    };

    let change_status = move |order_id: String, status: OrderStatus| {
        updating.set(Some(order_id.clone()));
        spawn_local(async move {
            match api::update_order_status(&order_id, status).await {
                Ok(()) => {
                    log::info!("order {} -> {}", order_id, status.code());
                    state.update(|s| {
                        if let Some(order) = s.items.iter_mut().find(|o| o.id == order_id) {
                            order.status = status;
                        }
                    });
                }
                Err(e) => set_error.set(Some(format!("Failed to update order: {}", e))),
            }
            updating.set(None);
        });
    };

    view! {
        <PageFrame page_id="orders--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                    <Badge>{move || state.get().paging.total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <SearchBox on_search=on_search placeholder="Order number or customer..." />
                        <select
                            class="filter-select"
                            on:change=move |ev| on_status_filter(event_target_value(&ev))
                        >
                            <option value="">"All statuses"</option>
                            {OrderStatus::all().into_iter().map(|status| view! {
                                <option value=status.code()>{status.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <PaginationControls
                        paging=Signal::derive(move || state.get().paging)
                        on_page_change=Callback::new(go_to_page)
                        on_page_size_change=Callback::new(change_page_size)
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Order"</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Items"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Placed"</TableHeaderCell>
                                <TableHeaderCell>"Action"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|o: &Order| (o.id.clone(), o.status)
                                children=move |order: Order| {
                                    let order_id = order.id.clone();
                                    let busy_id = order.id.clone();
                                    let next = order.status.next_statuses();
                                    let current_status = order.status;
                                    let number = order.order_number.clone();
                                    let customer = order.customer_name.clone();
                                    let count = order.item_count().to_string();
                                    let total = format_money(order.total_amount);
                                    let placed = format_datetime(&order.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 500;">{number}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{customer}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{total}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <OrderStatusBadge status=current_status />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{placed}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {if next.is_empty() {
                                                    view! { <span class="text-muted">"-"</span> }.into_any()
                                                } else {
                                                    view! {
                                                        <select
                                                            class="row-select"
                                                            disabled=move || updating.get().as_deref() == Some(busy_id.as_str())
                                                            on:change=move |ev| {
                                                                if let Some(status) = OrderStatus::from_code(&event_target_value(&ev)) {
                                                                    change_status(order_id.clone(), status);
                                                                }
                                                            }
                                                        >
                                                            <option value="" selected=true>"Move to..."</option>
                                                            {next.iter().map(|status| view! {
                                                                <option value=status.code()>{status.display_name()}</option>
                                                            }).collect_view()}
                                                        </select>
                                                    }.into_any()
                                                }}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || state.with(|s| s.is_loaded && s.items.is_empty())>
                    <div class="empty-state">"No orders match the current filters."</div>
                </Show>
            </div>
        </PageFrame>
    }
}
