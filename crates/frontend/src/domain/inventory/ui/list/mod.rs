use contracts::domain::inventory::{StockAdjustmentDto, StockItem};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::inventory::api;
use crate::shared::config::config;
use crate::shared::form_input::{parse_count, parse_delta};
use crate::shared::format::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ci, contains_ci, filter_list, Searchable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

impl Searchable for StockItem {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.product_name, filter) || contains_ci(&self.sku, filter)
    }
}

/// New on-hand quantity from the adjust input.
///
/// `+N` / `-N` change the current quantity, a bare number replaces it.
fn resolve_quantity(input: &str, current: u32) -> Result<u32, String> {
    let input = input.trim();
    if input.starts_with('+') || input.starts_with('-') {
        let delta = parse_delta(input, "Change")?;
        let next = i64::from(current) + i64::from(delta);
        if next < 0 {
            return Err(format!("Only {} in stock", current));
        }
        u32::try_from(next).map_err(|_| format!("Quantity cannot exceed {}", u32::MAX))
    } else {
        parse_count(input, "Quantity")
    }
}

/// Display text of one stock row.
#[derive(Debug, Clone, PartialEq)]
struct StockRowText {
    name: String,
    sku: String,
    on_hand: String,
    reserved: String,
    available: String,
    updated: String,
}

impl StockRowText {
    fn new(item: &StockItem) -> Self {
        Self {
            name: item.product_name.clone(),
            sku: item.sku.clone(),
            on_hand: item.quantity.to_string(),
            reserved: item.reserved.to_string(),
            available: item.available().to_string(),
            updated: format_datetime(&item.updated_at),
        }
    }
}

fn visible(all: &[StockItem], query: &str, low_only: bool, threshold: u32) -> Vec<StockItem> {
    let mut items: Vec<StockItem> = filter_list(all.to_vec(), query)
        .into_iter()
        .filter(|s| !low_only || s.is_low(threshold))
        .collect();
    // Lowest availability first
    items.sort_by(|a, b| {
        a.available()
            .cmp(&b.available())
            .then_with(|| cmp_ci(&a.product_name, &b.product_name))
    });
    items
}

#[component]
fn AdjustCell(
    item: StockItem,
    #[prop(into)] on_saved: Callback<StockItem>,
    #[prop(into)] on_error: Callback<String>,
) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let product_id = StoredValue::new(item.product_id.clone());
    let current = item.quantity;

    let save = move |_| {
        let quantity = match resolve_quantity(&input.get_untracked(), current) {
            Ok(q) => q,
            Err(msg) => {
                on_error.run(msg);
                return;
            }
        };
        saving.set(true);
        let id = product_id.get_value();
        spawn_local(async move {
            let dto = StockAdjustmentDto {
                quantity,
                note: None,
            };
            match api::adjust_stock(&id, &dto).await {
                Ok(updated) => {
                    input.set(String::new());
                    on_saved.run(updated);
                }
                Err(e) => on_error.run(format!("Failed to update stock: {}", e)),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="stock-adjust">
            <Input value=input placeholder="e.g. 25 or +5" attr:style="width: 120px;" />
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=save
                disabled=Signal::derive(move || saving.get() || input.get().trim().is_empty())
                attr:title="Apply"
            >
                {icon("save")}
            </Button>
        </div>
    }
}

#[component]
pub fn StockList() -> impl IntoView {
    let threshold = config().low_stock_threshold;
    let items = RwSignal::new(Vec::<StockItem>::new());
    let search = RwSignal::new(String::new());
    let low_only = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let load_data = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_inventory().await {
                Ok(list) => items.set(list),
                Err(e) => error.set(Some(format!("Failed to load inventory: {}", e))),
            }
            loading.set(false);
        });
    };

    load_data();

    let on_saved = Callback::new(move |updated: StockItem| {
        log::info!("stock of {} set to {}", updated.product_id, updated.quantity);
        error.set(None);
        items.update(|list| {
            if let Some(row) = list.iter_mut().find(|s| s.product_id == updated.product_id) {
                *row = updated;
            }
        });
    });
    let on_error = Callback::new(move |msg: String| error.set(Some(msg)));

    let low_count = move || items.with(|list| list.iter().filter(|s| s.is_low(threshold)).count());

    view! {
        <PageFrame page_id="stock--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Stock"</h1>
                    <Badge color=BadgeColor::Danger appearance=BadgeAppearance::Tint>
                        {move || format!("{} low", low_count())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Input value=search placeholder="Product or SKU..." />
                        <Checkbox
                            checked=low_only
                            label=format!("Only low stock (≤ {})", threshold)
                        />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"SKU"</TableHeaderCell>
                                <TableHeaderCell>"On hand"</TableHeaderCell>
                                <TableHeaderCell>"Reserved"</TableHeaderCell>
                                <TableHeaderCell>"Available"</TableHeaderCell>
                                <TableHeaderCell>"Updated"</TableHeaderCell>
                                <TableHeaderCell>"Adjust"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.with(|all| visible(all, &search.get(), low_only.get(), threshold))
                                key=|s: &StockItem| (s.product_id.clone(), s.quantity, s.reserved)
                                children=move |item: StockItem| {
                                    let low = item.is_low(threshold);
                                    let StockRowText { name, sku, on_hand, reserved, available, updated } =
                                        StockRowText::new(&item);
                                    view! {
                                        <TableRow class=if low { "table__row--warning" } else { "" }>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{sku}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{on_hand}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{reserved}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {available}
                                                    {low.then(|| view! { <span class="stock--low">{icon("alert")}</span> })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{updated}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <AdjustCell item=item on_saved=on_saved on_error=on_error />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || !loading.get() && items.with(|i| i.is_empty())>
                    <div class="empty-state">"No stock records."</div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn stock(id: &str, name: &str, quantity: u32, reserved: u32) -> StockItem {
        StockItem {
            product_id: id.into(),
            product_name: name.into(),
            sku: format!("SKU-{}", id),
            quantity,
            reserved,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_resolve_quantity() {
        assert_eq!(resolve_quantity("25", 3), Ok(25));
        assert_eq!(resolve_quantity("+5", 3), Ok(8));
        assert_eq!(resolve_quantity("-3", 3), Ok(0));
        assert_eq!(resolve_quantity("-4", 3), Err("Only 3 in stock".to_string()));
        assert!(resolve_quantity("lots", 3).is_err());
    }

    #[test]
    fn test_resolve_quantity_overflow_is_not_a_shortage() {
        let err = resolve_quantity("+2147483647", u32::MAX - 1).unwrap_err();
        assert_eq!(err, format!("Quantity cannot exceed {}", u32::MAX));
        assert_eq!(resolve_quantity("+1", u32::MAX - 1), Ok(u32::MAX));
        assert_eq!(
            resolve_quantity("-2147483648", 10),
            Err("Only 10 in stock".to_string())
        );
    }

    #[test]
    fn test_row_text() {
        let item = stock("7", "Teapot", 12, 4);
        let row = StockRowText::new(&item);
        assert_eq!(row.name, "Teapot");
        assert_eq!(row.sku, "SKU-7");
        assert_eq!(row.on_hand, "12");
        assert_eq!(row.reserved, "4");
        assert_eq!(row.available, "8");
        assert_eq!(row.updated, format_datetime(&item.updated_at));
    }

    #[test]
    fn test_visible_low_only_sorted_by_availability() {
        let all = vec![
            stock("1", "Teapot", 40, 0),
            stock("2", "Mug", 6, 2),
            stock("3", "Apron", 2, 0),
        ];
        let low: Vec<_> = visible(&all, "", true, 5)
            .into_iter()
            .map(|s| s.product_name)
            .collect();
        assert_eq!(low, vec!["Apron", "Mug"]);
        assert_eq!(visible(&all, "sku-1", false, 5).len(), 1);
    }
}
