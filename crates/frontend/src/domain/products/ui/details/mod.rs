//! Product card pages: add, edit and read-only view.
//!
//! Edit and view pages take the product id from the current location
//! (`/products/edit/{id}`, `/products/view/{id}`).

mod form;
mod view;

pub use form::ProductForm;
pub use view::ProductView;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routing::routes::detail_id;

/// Decoded product id from a detail path.
pub fn product_id_from_path(path: &str) -> Option<String> {
    let raw = detail_id(path)?;
    urlencoding::decode(raw).ok().map(|id| id.into_owned())
}

fn missing_product() -> AnyView {
    view! { <div class="alert alert--error">"Product not found in the address."</div> }.into_any()
}

#[component]
pub fn AddProductPage() -> impl IntoView {
    view! { <ProductForm /> }
}

#[component]
pub fn EditProductPage() -> impl IntoView {
    let location = use_location();
    let product_id = Memo::new(move |_| product_id_from_path(&location.pathname.get()));

    move || match product_id.get() {
        Some(id) => view! { <ProductForm product_id=id /> }.into_any(),
        None => missing_product(),
    }
}

#[component]
pub fn ViewProductPage() -> impl IntoView {
    let location = use_location();
    let product_id = Memo::new(move |_| product_id_from_path(&location.pathname.get()));

    move || match product_id.get() {
        Some(id) => view! { <ProductView product_id=id /> }.into_any(),
        None => missing_product(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_from_path() {
        assert_eq!(product_id_from_path("/products/view/p-1"), Some("p-1".to_string()));
        assert_eq!(
            product_id_from_path("/products/edit/a%20b%2Fc"),
            Some("a b/c".to_string())
        );
        assert_eq!(product_id_from_path("/products/add"), None);
    }
}
