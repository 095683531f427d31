use contracts::domain::wallet::{Withdrawal, WithdrawalRequestDto, MIN_WITHDRAWAL_AMOUNT};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::wallet::api::fetch_wallet;
use crate::domain::withdrawals::api;
use crate::shared::components::status_badge::WithdrawalStatusBadge;
use crate::shared::form_input::{opt_text, parse_amount};
use crate::shared::format::{format_datetime, format_datetime_opt, format_money};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Builds a request from form text, checked against the current balance.
fn build_request(amount: &str, note: &str, available: f64) -> Result<WithdrawalRequestDto, String> {
    let dto = WithdrawalRequestDto {
        amount: parse_amount(amount, "Amount")?,
        note: opt_text(note),
    };
    dto.validate(available).map_err(|e| e.to_string())?;
    Ok(dto)
}

fn newest_first(mut items: Vec<Withdrawal>) -> Vec<Withdrawal> {
    items.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
    items
}

#[component]
pub fn WithdrawalsList() -> impl IntoView {
    let withdrawals = RwSignal::new(Vec::<Withdrawal>::new());
    let available = RwSignal::new(None::<f64>);
    let amount = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let load_balance = move || {
        spawn_local(async move {
            match fetch_wallet().await {
                Ok(s) => available.set(Some(s.available_balance)),
                Err(e) => error.set(Some(format!("Failed to load balance: {}", e))),
            }
        });
    };

    let load_history = move || {
        spawn_local(async move {
            match api::fetch_withdrawals().await {
                Ok(list) => withdrawals.set(newest_first(list)),
                Err(e) => error.set(Some(format!("Failed to load withdrawals: {}", e))),
            }
        });
    };

    load_balance();
    load_history();

    let submit = move |_| {
        notice.set(None);
        let Some(balance) = available.get_untracked() else {
            error.set(Some("Balance is not loaded yet".to_string()));
            return;
        };
        let dto = match build_request(&amount.get_untracked(), &note.get_untracked(), balance) {
            Ok(dto) => dto,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        submitting.set(true);
        spawn_local(async move {
            match api::request_withdrawal(&dto).await {
                Ok(created) => {
                    log::info!("withdrawal {} requested", created.id);
                    notice.set(Some(format!("Withdrawal of {} requested", format_money(created.amount))));
                    amount.set(String::new());
                    note.set(String::new());
                    withdrawals.update(|list| list.insert(0, created));
                    load_balance();
                }
                Err(e) => error.set(Some(format!("Failed to request withdrawal: {}", e))),
            }
            submitting.set(false);
        });
    };

    view! {
        <PageFrame page_id="withdrawals--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Withdrawals"</h1>
                </div>
                <div class="page__header-right">
                    <span class="page__hint">
                        "Available: "
                        {move || available.get().map(format_money).unwrap_or_else(|| "…".to_string())}
                    </span>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || notice.get().map(|n| view! { <div class="alert alert--success">{n}</div> })}

                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"Amount"</label>
                        <Input value=amount placeholder=format!("Minimum {}", format_money(MIN_WITHDRAWAL_AMOUNT)) />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Note"</label>
                        <Input value=note placeholder="Optional" />
                    </div>
                    <div class="form__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=submit
                            disabled=Signal::derive(move || submitting.get() || available.get().is_none())
                        >
                            {icon("withdrawals")}
                            " Request withdrawal"
                        </Button>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Requested"</TableHeaderCell>
                                <TableHeaderCell>"Amount"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Processed"</TableHeaderCell>
                                <TableHeaderCell>"Note"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || withdrawals.get()
                                key=|w: &Withdrawal| (w.id.clone(), w.status)
                                children=move |w: Withdrawal| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&w.requested_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_money(w.amount)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <WithdrawalStatusBadge status=w.status />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime_opt(w.processed_at.as_ref())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{w.note.clone().unwrap_or_default()}</TableCellLayout>
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use contracts::domain::wallet::WithdrawalStatus;

    #[test]
    fn test_build_request_checks_balance() {
        let dto = build_request("25,00", " payout ", 100.0).unwrap();
        assert_eq!(dto.amount, 25.0);
        assert_eq!(dto.note.as_deref(), Some("payout"));

        assert!(build_request("150", "", 100.0)
            .unwrap_err()
            .starts_with("Amount exceeds available balance"));
        assert!(build_request("5", "", 100.0).unwrap_err().starts_with("Minimum withdrawal"));
        assert_eq!(build_request("", "", 100.0).unwrap_err(), "Amount is required");
    }

    #[test]
    fn test_newest_first() {
        let now = Utc::now();
        let make = |id: &str, age: i64| Withdrawal {
            id: id.into(),
            amount: 10.0,
            status: WithdrawalStatus::Requested,
            note: None,
            requested_at: now - Duration::days(age),
            processed_at: None,
        };
        let ids: Vec<_> = newest_first(vec![make("old", 5), make("new", 0), make("mid", 2)])
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }
}
