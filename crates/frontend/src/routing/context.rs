use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::router::{NavRequest, NavigationRouter, Navigator};
use super::section::Section;
use super::sidebar::SidebarState;

/// Reactive handle over [`NavigationRouter`], provided once by the shell.
#[derive(Clone, Copy)]
pub struct NavigationContext {
    router: RwSignal<NavigationRouter>,
}

impl NavigationContext {
    pub fn new() -> Self {
        Self {
            router: RwSignal::new(NavigationRouter::new()),
        }
    }

    pub fn active(&self) -> Section {
        self.router.with(|r| r.active())
    }

    pub fn sidebar(&self) -> SidebarState {
        self.router.with(|r| r.sidebar())
    }

    /// Resize events fire continuously; subscribers are only notified
    /// when the sidebar state actually changes.
    pub fn on_resize(&self, width: u32) {
        let mut next = self.router.get_untracked();
        next.on_resize(width);
        self.set_if_changed(next);
    }

    pub fn on_path_change(&self, path: &str) {
        let mut next = self.router.get_untracked();
        next.on_path_change(path);
        self.set_if_changed(next);
    }

    /// Sidebar selection: updates the active section, then navigates.
    ///
    /// Navigation runs only after the signal write has completed.
    pub fn request_section<N: Navigator + ?Sized>(&self, id: &str, navigator: &N) {
        if id.trim().is_empty() {
            return;
        }
        let mut request = None;
        self.router.update(|r| request = r.select_section(id));
        if let Some(request) = request {
            navigator.navigate(&request);
        }
    }

    pub fn toggle_collapse(&self) {
        self.router.update(|r| r.toggle_collapse());
    }

    pub fn close_mobile(&self) {
        self.router.update(|r| r.close_mobile());
    }

    fn set_if_changed(&self, next: NavigationRouter) {
        if self.router.with_untracked(|current| *current != next) {
            self.router.set(next);
        }
    }
}

impl Default for NavigationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the navigation context.
pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>().expect("NavigationContext not found in component tree")
}

/// Section selection bound to the live router, for links outside the sidebar.
#[derive(Clone, Copy)]
pub struct SectionSelector(pub Callback<String>);

impl SectionSelector {
    pub fn select(&self, id: &str) {
        self.0.run(id.to_string());
    }
}

pub fn use_section_selector() -> SectionSelector {
    use_context::<SectionSelector>().expect("SectionSelector not found in component tree")
}

/// [`Navigator`] backed by `leptos_router`'s navigate function.
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, request: &NavRequest) {
        (self.0)(
            request.path,
            NavigateOptions {
                replace: request.replace(),
                ..Default::default()
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::routes::NavMode;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingNavigator {
        calls: RefCell<Vec<NavRequest>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, request: &NavRequest) {
            self.calls.borrow_mut().push(*request);
        }
    }

    /// Memo that counts how often it recomputes.
    fn counting_memo<T>(
        read: impl Fn() -> T + Send + Sync + 'static,
    ) -> (Memo<T>, Arc<AtomicUsize>)
    where
        T: PartialEq + Send + Sync + 'static,
    {
        let runs = Arc::new(AtomicUsize::new(0));
        let memo = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                read()
            }
        });
        (memo, runs)
    }

    #[test]
    fn test_blank_id_changes_nothing() {
        let owner = Owner::new();
        owner.set();

        let nav = NavigationContext::new();
        nav.on_path_change("/orders");
        let navigator = RecordingNavigator::default();

        nav.request_section("", &navigator);
        nav.request_section("   ", &navigator);

        assert!(navigator.calls.borrow().is_empty());
        assert_eq!(nav.active(), Section::Orders);
    }

    #[test]
    fn test_request_navigates_once() {
        let owner = Owner::new();
        owner.set();

        let nav = NavigationContext::new();
        let navigator = RecordingNavigator::default();

        nav.request_section("stock", &navigator);
        assert_eq!(nav.active(), Section::Stock);
        assert_eq!(navigator.calls.borrow().len(), 1);
        assert_eq!(navigator.calls.borrow()[0].path, "/stock");

        nav.request_section("raise-ticket", &navigator);
        let calls = navigator.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].path, "/raise-ticket");
        assert_eq!(calls[1].mode, NavMode::Push);
    }

    #[test]
    fn test_resize_within_mode_does_not_notify() {
        let owner = Owner::new();
        owner.set();

        let nav = NavigationContext::new();
        nav.on_resize(1024);
        let (sidebar, runs) = counting_memo(move || nav.sidebar());
        assert!(sidebar.get_untracked().mobile_open);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        nav.on_resize(1100);
        nav.on_resize(800);
        assert!(sidebar.get_untracked().mobile_open);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        nav.on_resize(500);
        assert!(!sidebar.get_untracked().mobile_open);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_same_path_does_not_notify() {
        let owner = Owner::new();
        owner.set();

        let nav = NavigationContext::new();
        nav.on_path_change("/wallet");
        let (active, runs) = counting_memo(move || nav.active());
        assert_eq!(active.get_untracked(), Section::Wallet);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        nav.on_path_change("/wallet");
        assert_eq!(active.get_untracked(), Section::Wallet);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        nav.on_path_change("/products/view/42");
        assert_eq!(active.get_untracked(), Section::ViewProduct);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
