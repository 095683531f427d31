use contracts::domain::wallet::{WalletSummary, WalletTransaction};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::wallet::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::config;
use crate::shared::format::{format_currency, format_date, format_money};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::pagination::PageState;

fn signed_amount_text(tx: &WalletTransaction, currency: &str) -> String {
    let amount = tx.signed_amount();
    let sign = if amount > 0.0 { "+" } else { "-" };
    format!("{} {}{}", currency, sign, format_money(amount.abs()))
}

#[component]
pub fn WalletOverview() -> impl IntoView {
    let summary = RwSignal::new(None::<WalletSummary>);
    let transactions = RwSignal::new(Vec::<WalletTransaction>::new());
    let paging = RwSignal::new(PageState::new(config().default_page_size));
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    spawn_local(async move {
        match api::fetch_wallet().await {
            Ok(s) => summary.set(Some(s)),
            Err(e) => error.set(Some(format!("Failed to load wallet: {}", e))),
        }
    });

    let load_page = move || {
        let state = paging.get_untracked();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_transactions(state.server_page(), state.page_size).await {
                Ok(page) => {
                    transactions.set(page.items);
                    paging.update(|p| p.set_total(page.total));
                }
                Err(e) => error.set(Some(format!("Failed to load transactions: {}", e))),
            }
            loading.set(false);
        });
    };

    load_page();

    let currency = move || {
        summary
            .with(|s| s.as_ref().map(|s| s.currency.clone()))
            .unwrap_or_else(|| "USD".to_string())
    };
    let money = move |pick: fn(&WalletSummary) -> f64| {
        Signal::derive(move || {
            summary.with(|s| s.as_ref().map(|s| format_currency(pick(s), &s.currency)))
        })
    };

    view! {
        <PageFrame page_id="wallet--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Wallet"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-grid">
                    <StatCard label="Available" icon_name="wallet" value=money(|s| s.available_balance) accent=true />
                    <StatCard label="Pending" icon_name="dollar" value=money(|s| s.pending_balance) />
                    <StatCard label="Total earned" icon_name="dollar" value=money(|s| s.total_earned) />
                    <StatCard label="Withdrawn" icon_name="withdrawals" value=money(|s| s.total_withdrawn) />
                </div>

                <div class="filter-panel">
                    <h2 class="section__title">"Transactions"</h2>
                    <PaginationControls
                        paging=paging
                        on_page_change=Callback::new(move |page: usize| {
                            paging.update(|p| p.page = page);
                            load_page();
                        })
                        on_page_size_change=Callback::new(move |size: usize| {
                            paging.update(|p| p.set_page_size(size));
                            load_page();
                        })
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Reference"</TableHeaderCell>
                                <TableHeaderCell>"Amount"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || transactions.get()
                                key=|tx: &WalletTransaction| tx.id.clone()
                                children=move |tx: WalletTransaction| {
                                    let amount_class = if tx.kind.is_inflow() { "amount amount--in" } else { "amount amount--out" };
                                    let amount = signed_amount_text(&tx, &currency());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{format_date(&tx.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{tx.kind.display_name()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{tx.description.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{tx.reference.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=amount_class>{amount}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || !loading.get() && transactions.with(|t| t.is_empty())>
                    <div class="empty-state">{icon("wallet")}" No transactions yet."</div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::domain::wallet::TransactionKind;

    fn tx(kind: TransactionKind, amount: f64) -> WalletTransaction {
        WalletTransaction {
            id: "t".into(),
            kind,
            amount,
            description: None,
            reference: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_signed_amount_text() {
        assert_eq!(signed_amount_text(&tx(TransactionKind::Credit, 1250.0), "USD"), "USD +1,250.00");
        assert_eq!(signed_amount_text(&tx(TransactionKind::Withdrawal, 40.0), "USD"), "USD -40.00");
    }
}
