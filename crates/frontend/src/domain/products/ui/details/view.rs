use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::products::api;
use crate::routing::routes::edit_product_path;
use crate::shared::components::status_badge::ProductStatusBadge;
use crate::shared::format::{format_datetime, format_money};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

#[component]
pub fn ProductView(#[prop(into)] product_id: String) -> impl IntoView {
    let product = RwSignal::new(None::<Product>);
    let error = RwSignal::new(None::<String>);
    let navigate = StoredValue::new_local(use_navigate());

    let id = product_id.clone();
    spawn_local(async move {
        match api::fetch_product(&id).await {
            Ok(p) => product.set(Some(p)),
            Err(e) => error.set(Some(format!("Failed to load product: {}", e))),
        }
    });

    let go_to = move |path: String| navigate.with_value(|nav| nav(&path, Default::default()));
    let edit_path = edit_product_path(&product_id);

    view! {
        <PageFrame page_id="products--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| go_to("/products".to_string())
                        attr:title="Back to products"
                    >
                        {icon("arrow-left")}
                    </Button>
                    <h1 class="page__title">
                        {move || product.get().map(|p| p.name).unwrap_or_else(|| "Product".to_string())}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| go_to(edit_path.clone())
                    >
                        {icon("edit")}
                        " Edit"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || product.get().map(|p| {
                    let discount = p.discount_percent();
                    view! {
                        <dl class="detail-list">
                            <dt>"SKU"</dt>
                            <dd>{p.sku.clone()}</dd>
                            <dt>"Status"</dt>
                            <dd><ProductStatusBadge status=p.status /></dd>
                            <dt>"Category"</dt>
                            <dd>{p.category_name.clone().unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Price"</dt>
                            <dd>
                                {format_money(p.price)}
                                {p.compare_at_price.map(|c| view! {
                                    <span class="price--compare">{format_money(c)}</span>
                                })}
                                {discount.map(|d| view! {
                                    <Badge color=BadgeColor::Success>{format!("-{}%", d)}</Badge>
                                })}
                            </dd>
                            <dt>"In stock"</dt>
                            <dd>{p.stock.to_string()}</dd>
                            <dt>"Created"</dt>
                            <dd>{format_datetime(&p.created_at)}</dd>
                            <dt>"Updated"</dt>
                            <dd>{format_datetime(&p.updated_at)}</dd>
                        </dl>
                        {p.description.clone().map(|d| view! { <p class="detail-description">{d}</p> })}
                        {(!p.images.is_empty()).then(|| view! {
                            <div class="detail-images">
                                {p.images.iter().map(|src| view! { <img src=src.clone() alt="" /> }).collect_view()}
                            </div>
                        })}
                    }
                })}
            </div>
        </PageFrame>
    }
}
