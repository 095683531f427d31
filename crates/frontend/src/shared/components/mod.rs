pub mod pagination_controls;
pub mod search_box;
pub mod stat_card;
pub mod status_badge;
