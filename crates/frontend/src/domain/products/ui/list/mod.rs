mod state;

use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::products::api;
use crate::routing::routes::{edit_product_path, view_product_path};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::components::status_badge::ProductStatusBadge;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_ci, cmp_f64, contains_ci, filter_list, get_sort_class, get_sort_indicator, sort_list,
    Searchable, Sortable,
};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::pagination::{page_slice, PageState};
use state::{create_state, ProductsListState};

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.sku, filter)
            || self
                .category_name
                .as_deref()
                .is_some_and(|c| contains_ci(c, filter))
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "sku" => cmp_ci(&self.sku, &other.sku),
            "category" => cmp_ci(
                self.category_name.as_deref().unwrap_or(""),
                other.category_name.as_deref().unwrap_or(""),
            ),
            "price" => cmp_f64(self.price, other.price),
            "stock" => self.stock.cmp(&other.stock),
            "updated_at" => self.updated_at.cmp(&other.updated_at),
            _ => cmp_ci(&self.name, &other.name),
        }
    }
}

/// Search, sort and paginate the full product list into the visible page.
fn visible_page(
    all: &[Product],
    query: &str,
    sort_field: &str,
    ascending: bool,
    paging: &mut PageState,
) -> Vec<Product> {
    let mut data = filter_list(all.to_vec(), query);
    sort_list(&mut data, sort_field, ascending);
    paging.set_total(data.len());
    page_slice(&data, paging.page, paging.page_size).to_vec()
}

fn refresh(state: &mut ProductsListState, all: &[Product]) {
    let query = state.search_query.clone();
    let field = state.sort_field.clone();
    state.items = visible_page(all, &query, &field, state.sort_ascending, &mut state.paging);
}

#[component]
pub fn ProductsList() -> impl IntoView {
    let state = create_state();
    let all_products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let navigate = StoredValue::new_local(use_navigate());

    let refresh_view = move || {
        all_products.with_untracked(|all| state.update(|s| refresh(s, all)));
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(data) => {
                    all_products.set(data);
                    state.update(|s| {
                        s.paging.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                }
                Err(e) => set_error.set(Some(format!("Failed to load products: {}", e))),
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
        refresh_view();
    };

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
        });
        refresh_view();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.paging.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.paging.set_page_size(size));
        refresh_view();
    };

    let delete_product = move |product: Product| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete \"{}\"?", product.name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_product(&product.id).await {
                Ok(()) => {
                    log::info!("deleted product {}", product.id);
                    all_products.update(|all| all.retain(|p| p.id != product.id));
                    refresh_view();
                }
                Err(e) => set_error.set(Some(format!("Failed to delete product: {}", e))),
            }
        });
    };

    let open = move |path: String| navigate.with_value(|nav| nav(&path, Default::default()));

    let sort_header = move |field: &'static str, title: &'static str| {
        view! {
            <TableHeaderCell>
                <div class="table__sortable-header" style="cursor:pointer;" on:click=move |_| toggle_sort(field)>
                    {title}
                    <span class=move || state.with(|s| get_sort_class(&s.sort_field, field))>
                        {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                    </span>
                </div>
            </TableHeaderCell>
        }
    };

    view! {
        <PageFrame page_id="products--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                    <Badge>{move || state.get().paging.total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open("/products/add".to_string())
                    >
                        {icon("plus")}
                        " Add product"
                    </Button>
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
                        <SearchBox on_search=on_search placeholder="Name, SKU or category..." />
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
                                {sort_header("name", "Name")}
                                {sort_header("sku", "SKU")}
                                {sort_header("category", "Category")}
                                {sort_header("price", "Price")}
                                {sort_header("stock", "Stock")}
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|p: &Product| (p.id.clone(), p.updated_at)
                                children=move |product: Product| {
                                    let view_path = view_product_path(&product.id);
                                    let edit_path = edit_product_path(&product.id);
                                    let for_delete = product.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{product.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{product.sku.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{product.category_name.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_money(product.price)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{product.stock.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <ProductStatusBadge status=product.status />
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open(view_path.clone())
                                                    attr:title="View"
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open(edit_path.clone())
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_product(for_delete.clone())
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || state.with(|s| s.is_loaded && s.items.is_empty())>
                    <div class="empty-state">"No products yet."</div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::product::ProductStatus;

    fn product(id: &str, name: &str, price: f64, category: Option<&str>) -> Product {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Product {
            id: id.into(),
            name: name.into(),
            sku: format!("SKU-{}", id),
            description: None,
            category_id: None,
            category_name: category.map(str::to_string),
            price,
            compare_at_price: None,
            stock: 1,
            status: ProductStatus::Active,
            images: vec![],
            created_at: ts,
            updated_at: ts,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Teapot", 30.0, Some("Kitchen")),
            product("2", "apron", 12.0, Some("Textile")),
            product("3", "Mug", 8.0, Some("Kitchen")),
            product("4", "Coaster", 3.0, None),
        ]
    }

    #[test]
    fn test_search_matches_category() {
        let mut paging = PageState::new(10);
        let page = visible_page(&catalog(), "kitchen", "name", true, &mut paging);
        let names: Vec<_> = page.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mug", "Teapot"]);
        assert_eq!(paging.total_count, 2);
    }

    #[test]
    fn test_sort_by_price_descending_and_paginate() {
        let mut paging = PageState::new(3);
        paging.page = 1;
        let page = visible_page(&catalog(), "", "price", false, &mut paging);
        assert_eq!(paging.total_pages(), 2);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "Coaster");
    }

    #[test]
    fn test_page_clamped_when_search_narrows() {
        let mut paging = PageState::new(1);
        paging.set_total(4);
        paging.page = 3;
        let page = visible_page(&catalog(), "sku-2", "name", true, &mut paging);
        assert_eq!(paging.page, 0);
        assert_eq!(page[0].name, "apron");
    }
}
