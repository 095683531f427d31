use contracts::domain::order::{Order, OrderListQuery, OrderStatus};
use leptos::prelude::*;

use crate::shared::config::config;
use crate::shared::pagination::PageState;

#[derive(Clone, Debug)]
pub struct OrdersListState {
    pub items: Vec<Order>,
    pub status_filter: Option<OrderStatus>,
    pub search_query: String,
    pub paging: PageState,
    pub is_loaded: bool,
    /// Ticket of the latest fetch; older responses are dropped.
    pub request_seq: u64,
}

impl Default for OrdersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status_filter: None,
            search_query: String::new(),
            paging: PageState::new(config().default_page_size),
            is_loaded: false,
            request_seq: 0,
        }
    }
}

impl OrdersListState {
    /// Query for the current filters and page.
    pub fn query(&self) -> OrderListQuery {
        OrderListQuery {
            page: self.paging.server_page(),
            page_size: self.paging.page_size,
            status: self.status_filter,
            search: Some(self.search_query.clone()),
        }
    }

    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.request_seq == ticket
    }
}

pub fn create_state() -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_uses_one_based_page() {
        let mut state = OrdersListState::default();
        state.paging.set_total(100);
        state.paging.page = 2;
        state.status_filter = Some(OrderStatus::Pending);

        let query = state.query();
        assert_eq!(query.page, 3);
        assert_eq!(query.status, Some(OrderStatus::Pending));
    }

    #[test]
    fn test_only_latest_request_is_current() {
        let mut state = OrdersListState::default();
        let first = state.begin_request();
        let second = state.begin_request();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }
}
