use contracts::domain::product::Product;
use leptos::prelude::*;

use crate::shared::config::config;
use crate::shared::pagination::PageState;

#[derive(Clone, Debug)]
pub struct ProductsListState {
    /// Visible page after search, sort and pagination
    pub items: Vec<Product>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub paging: PageState,
    pub is_loaded: bool,
}

impl Default for ProductsListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
            paging: PageState::new(config().default_page_size),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ProductsListState> {
    RwSignal::new(ProductsListState::default())
}
