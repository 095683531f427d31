use contracts::domain::category::Category;
use contracts::domain::product::{Product, ProductDto, ProductStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

use crate::domain::categories::api::fetch_categories;
use crate::domain::products::api;
use crate::routing::routes::view_product_path;
use crate::shared::form_input::{opt_text, parse_amount, parse_count, parse_optional_amount};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

/// Raw text of the form inputs.
#[derive(Debug, Clone, Default, PartialEq)]
struct ProductFields {
    name: String,
    sku: String,
    description: String,
    category_id: String,
    price: String,
    compare_at_price: String,
    stock: String,
    status: String,
}

impl ProductFields {
    fn from_product(p: &Product) -> Self {
        let dto = ProductDto::from(p);
        Self {
            name: dto.name,
            sku: dto.sku,
            description: dto.description.unwrap_or_default(),
            category_id: dto.category_id.unwrap_or_default(),
            price: dto.price.to_string(),
            compare_at_price: dto.compare_at_price.map(|v| v.to_string()).unwrap_or_default(),
            stock: dto.stock.to_string(),
            status: dto.status.code().to_string(),
        }
    }

    fn to_dto(&self) -> Result<ProductDto, String> {
        let dto = ProductDto {
            name: self.name.trim().to_string(),
            sku: self.sku.trim().to_string(),
            description: opt_text(&self.description),
            category_id: opt_text(&self.category_id),
            price: parse_amount(&self.price, "Price")?,
            compare_at_price: parse_optional_amount(&self.compare_at_price, "Compare-at price")?,
            stock: parse_count(&self.stock, "Stock")?,
            status: ProductStatus::from_code(&self.status).unwrap_or_default(),
        };
        dto.validate().map_err(|e| e.to_string())?;
        Ok(dto)
    }
}

/// Create form when `product_id` is absent, edit form otherwise.
#[component]
pub fn ProductForm(#[prop(optional, into)] product_id: Option<String>) -> impl IntoView {
    let is_edit = product_id.is_some();
    let id_state = StoredValue::new(product_id);

    let name = RwSignal::new(String::new());
    let sku = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let compare_at_price = RwSignal::new(String::new());
    let stock = RwSignal::new("0".to_string());
    let status = RwSignal::new(ProductStatus::default().code().to_string());

    let categories = RwSignal::new(Vec::<Category>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(is_edit);
    let saving = RwSignal::new(false);
    let navigate = StoredValue::new_local(use_navigate());

    let apply = move |fields: ProductFields| {
        name.set(fields.name);
        sku.set(fields.sku);
        description.set(fields.description);
        category_id.set(fields.category_id);
        price.set(fields.price);
        compare_at_price.set(fields.compare_at_price);
        stock.set(fields.stock);
        status.set(fields.status);
    };

    spawn_local(async move {
        match fetch_categories().await {
            Ok(list) => categories.set(list),
            Err(e) => log::warn!("categories unavailable for product form: {}", e),
        }
    });

    if let Some(id) = id_state.get_value() {
        spawn_local(async move {
            match api::fetch_product(&id).await {
                Ok(product) => apply(ProductFields::from_product(&product)),
                Err(e) => error.set(Some(format!("Failed to load product: {}", e))),
            }
            loading.set(false);
        });
    }

    let collect = move || ProductFields {
        name: name.get_untracked(),
        sku: sku.get_untracked(),
        description: description.get_untracked(),
        category_id: category_id.get_untracked(),
        price: price.get_untracked(),
        compare_at_price: compare_at_price.get_untracked(),
        stock: stock.get_untracked(),
        status: status.get_untracked(),
    };

    let go_to = move |path: String| {
        navigate.with_value(|nav| nav(&path, NavigateOptions::default()));
    };

    let handle_save = move |_| {
        let dto = match collect().to_dto() {
            Ok(dto) => dto,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        let id = id_state.get_value();
        spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update_product(id, &dto).await,
                None => api::create_product(&dto).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("saved product {}", saved.id);
                    go_to(view_product_path(&saved.id));
                }
                Err(e) => error.set(Some(format!("Failed to save product: {}", e))),
            }
        });
    };

    let title = if is_edit { "Edit product" } else { "Add product" };

    view! {
        <PageFrame page_id="products--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_save
                        disabled=Signal::derive(move || saving.get() || loading.get())
                    >
                        {icon("save")}
                        {move || if saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| go_to("/products".to_string())
                    >
                        {icon("x")}
                        " Cancel"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="loading">"Loading..."</div> }
                >
                    <div class="form__grid">
                        <div class="form__group" style="grid-column: 1 / -1;">
                            <label class="form__label">"Name"</label>
                            <Input value=name placeholder="Product name" />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"SKU"</label>
                            <Input value=sku placeholder="Unique article" />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Category"</label>
                            <Select value=category_id>
                                <option value="">"No category"</option>
                                {move || {
                                    categories
                                        .get()
                                        .into_iter()
                                        .map(|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> })
                                        .collect_view()
                                }}
                            </Select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Price"</label>
                            <Input value=price placeholder="0.00" />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Compare-at price"</label>
                            <Input value=compare_at_price placeholder="Optional" />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Stock"</label>
                            <Input value=stock />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Status"</label>
                            <Select value=status>
                                {ProductStatus::all()
                                    .into_iter()
                                    .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                    .collect_view()}
                            </Select>
                        </div>
                        <div class="form__group" style="grid-column: 1 / -1;">
                            <label class="form__label">"Description"</label>
                            <Textarea value=description placeholder="Optional" />
                        </div>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductFields {
        ProductFields {
            name: " Teapot ".into(),
            sku: "TP-1".into(),
            description: "".into(),
            category_id: "kitchen".into(),
            price: "30,5".into(),
            compare_at_price: "".into(),
            stock: "4".into(),
            status: "draft".into(),
        }
    }

    #[test]
    fn test_to_dto_parses_inputs() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.name, "Teapot");
        assert_eq!(dto.price, 30.5);
        assert_eq!(dto.description, None);
        assert_eq!(dto.category_id.as_deref(), Some("kitchen"));
        assert_eq!(dto.stock, 4);
        assert_eq!(dto.status, ProductStatus::Draft);
    }

    #[test]
    fn test_to_dto_reports_first_problem() {
        let mut fields = filled();
        fields.stock = "many".into();
        assert_eq!(fields.to_dto().unwrap_err(), "Stock must be a whole number");

        let mut fields = filled();
        fields.name = "  ".into();
        assert_eq!(fields.to_dto().unwrap_err(), "Product name is required");

        let mut fields = filled();
        fields.compare_at_price = "10".into();
        assert!(fields.to_dto().is_err());
    }
}
