//! Navigation Router state machine.
//!
//! Keeps "which section is active" consistent with "which URL is shown" and
//! owns sidebar visibility. Pure Rust: the browser side is plugged in through
//! the [`Navigator`] trait and the viewport width passed to `on_resize`.

use log::debug;

use super::routes::{self, NavMode, FALLBACK_PATH};
use super::section::Section;
use super::sidebar::SidebarState;

/// One navigation to perform on the routing collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRequest {
    pub path: &'static str,
    pub mode: NavMode,
}

impl NavRequest {
    pub fn replace(&self) -> bool {
        self.mode == NavMode::Replace
    }
}

/// Routing collaborator: changes the browser URL.
pub trait Navigator {
    fn navigate(&self, request: &NavRequest);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationRouter {
    active: Section,
    sidebar: SidebarState,
}

impl NavigationRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    /// Syncs the active section with a new URL path.
    pub fn on_path_change(&mut self, path: &str) -> Section {
        let section = routes::resolve_path(path);
        if section != self.active {
            debug!("path '{}' -> section '{}'", path, section);
        }
        self.active = section;
        section
    }

    /// Handles a sidebar selection without performing the navigation.
    ///
    /// Blank ids are ignored. Otherwise the active section is set
    /// optimistically and the navigation to perform is returned; unknown
    /// ids and sections without a navigation target go to the fallback path.
    pub fn select_section(&mut self, id: &str) -> Option<NavRequest> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }

        let known = Section::from_id(id);
        self.active = known.unwrap_or(Section::FALLBACK);

        let request = known
            .and_then(routes::nav_target)
            .map(|target| NavRequest {
                path: target.path,
                mode: target.mode,
            })
            .unwrap_or_else(|| {
                debug!("no navigation target for '{}', using fallback", id);
                NavRequest {
                    path: FALLBACK_PATH,
                    mode: NavMode::Replace,
                }
            });
        debug!("section '{}' -> navigate {:?}", id, request);
        Some(request)
    }

    /// Handles a sidebar selection and issues the navigation.
    pub fn request_section<N: Navigator + ?Sized>(&mut self, id: &str, navigator: &N) {
        if let Some(request) = self.select_section(id) {
            navigator.navigate(&request);
        }
    }

    pub fn on_resize(&mut self, width: u32) -> bool {
        let changed = self.sidebar.on_resize(width);
        if changed {
            debug!(
                "viewport {}px crossed breakpoint, mobile_open={}",
                width, self.sidebar.mobile_open
            );
        }
        changed
    }

    pub fn toggle_collapse(&mut self) {
        self.sidebar.toggle();
    }

    pub fn close_mobile(&mut self) {
        self.sidebar.close_mobile();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::routes::NAV_TARGETS;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        calls: RefCell<Vec<NavRequest>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, request: &NavRequest) {
            self.calls.borrow_mut().push(*request);
        }
    }

    #[test]
    fn test_initial_state() {
        let router = NavigationRouter::new();
        assert_eq!(router.active(), Section::Dashboard);
        assert_eq!(router.sidebar(), SidebarState::default());
    }

    #[test]
    fn test_path_change_sets_active_section() {
        let mut router = NavigationRouter::new();
        assert_eq!(router.on_path_change("/products/view/42"), Section::ViewProduct);
        assert_eq!(router.active(), Section::ViewProduct);

        router.on_path_change("/unknown/page");
        assert_eq!(router.active(), Section::Dashboard);
    }

    #[test]
    fn test_path_change_is_idempotent() {
        let mut router = NavigationRouter::new();
        router.on_path_change("/stock");
        let snapshot = router.clone();
        router.on_path_change("/stock");
        assert_eq!(router, snapshot);
    }

    #[test]
    fn test_each_recognised_section_navigates_once() {
        for target in NAV_TARGETS {
            let mut router = NavigationRouter::new();
            let nav = RecordingNavigator::default();
            router.request_section(target.section.id(), &nav);

            let calls = nav.calls.borrow();
            assert_eq!(calls.len(), 1, "section {}", target.section);
            assert_eq!(calls[0].path, target.path);
            assert_eq!(router.active(), target.section);
        }
    }

    #[test]
    fn test_stock_replaces_history() {
        let mut router = NavigationRouter::new();
        let nav = RecordingNavigator::default();
        router.request_section("stock", &nav);
        assert_eq!(
            nav.calls.borrow().as_slice(),
            &[NavRequest {
                path: "/stock",
                mode: NavMode::Replace
            }]
        );
    }

    #[test]
    fn test_raise_ticket_pushes_history() {
        let mut router = NavigationRouter::new();
        let nav = RecordingNavigator::default();
        router.request_section("raise-ticket", &nav);

        let calls = nav.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path, "/raise-ticket");
        assert!(!calls[0].replace());
    }

    #[test]
    fn test_empty_id_is_noop() {
        let mut router = NavigationRouter::new();
        router.on_path_change("/orders");
        let before = router.clone();
        let nav = RecordingNavigator::default();

        router.request_section("", &nav);
        router.request_section("   ", &nav);

        assert!(nav.calls.borrow().is_empty());
        assert_eq!(router, before);
    }

    #[test]
    fn test_unknown_id_goes_to_fallback() {
        let mut router = NavigationRouter::new();
        router.on_path_change("/orders");
        let nav = RecordingNavigator::default();

        router.request_section("reports", &nav);

        assert_eq!(router.active(), Section::Dashboard);
        assert_eq!(
            nav.calls.borrow().as_slice(),
            &[NavRequest {
                path: FALLBACK_PATH,
                mode: NavMode::Replace
            }]
        );
    }

    #[test]
    fn test_path_only_section_request_falls_back_to_dashboard_path() {
        let mut router = NavigationRouter::new();
        let request = router.select_section("view-product");
        assert_eq!(router.active(), Section::ViewProduct);
        assert_eq!(request.map(|r| r.path), Some(FALLBACK_PATH));

        router.on_path_change(FALLBACK_PATH);
        assert_eq!(router.active(), Section::Dashboard);
    }

    #[test]
    fn test_last_event_wins() {
        let mut router = NavigationRouter::new();
        router.select_section("wallet");
        router.on_path_change("/orders");
        assert_eq!(router.active(), Section::Orders);

        router.on_path_change("/categories");
        router.select_section("settings");
        assert_eq!(router.active(), Section::Settings);
    }

    #[test]
    fn test_resize_and_toggle_delegate_to_sidebar() {
        let mut router = NavigationRouter::new();
        router.on_resize(767);
        assert!(router.on_resize(768));
        assert!(router.sidebar().mobile_open);

        router.toggle_collapse();
        assert!(router.sidebar().desktop_collapsed);
        assert!(router.sidebar().mobile_open);

        router.on_resize(500);
        router.toggle_collapse();
        assert!(router.sidebar().mobile_open);
        router.close_mobile();
        assert!(!router.sidebar().mobile_open);
    }
}
