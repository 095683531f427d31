//! Navigation routing for the dashboard shell.
//!
//! Содержит:
//! - `section` - идентификаторы разделов (что сейчас активно)
//! - `routes` - таблицы path → section и section → navigation target
//! - `sidebar` - состояние боковой панели и режим устройства
//! - `router` - чистая state machine: path change / section request / resize / toggle
//! - `context` - реактивная обёртка над router для Leptos
//! - `viewport` - подписка на resize окна

pub mod context;
pub mod router;
pub mod routes;
pub mod section;
pub mod sidebar;
pub mod viewport;

pub use context::{
    use_navigation, use_section_selector, NavigationContext, RouterNavigator, SectionSelector,
};
pub use router::{NavRequest, NavigationRouter, Navigator};
pub use routes::NavMode;
pub use section::Section;
pub use sidebar::{DeviceMode, SidebarState, MOBILE_BREAKPOINT_PX};
