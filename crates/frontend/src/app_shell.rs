//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - auth gate (показывает LoginPage или DashboardShell)
//! - `DashboardShell` - layout с Sidebar и активным разделом

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::layout::registry::render_section;
use crate::layout::Shell;
use crate::routing::viewport::watch_viewport;
use crate::routing::{use_navigation, NavigationContext, RouterNavigator, SectionSelector};
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Resolves the section of the current location before the first render,
/// so a deep link mounts its own page instead of the dashboard.
fn sync_initial_path(nav: NavigationContext, pathname: Memo<String>) {
    pathname.with_untracked(|path| nav.on_path_change(path));
}

/// Dashboard layout bound to the browser location.
///
/// URL changes drive the active section; sidebar selections go through the
/// router and come back as URL changes.
#[component]
fn DashboardShell() -> impl IntoView {
    let nav = use_navigation();
    let location = use_location();

    sync_initial_path(nav, location.pathname);
    Effect::new(move |_| {
        let path = location.pathname.get();
        nav.on_path_change(&path);
    });

    watch_viewport(nav);

    let navigator = StoredValue::new_local(RouterNavigator(use_navigate()));
    let on_select = Callback::new(move |id: String| {
        navigator.with_value(|n| nav.request_section(&id, n));
    });
    provide_context(SectionSelector(on_select));

    // Sidebar toggles must not remount the page
    let active = Memo::new(move |_| nav.active());

    view! {
        <Shell on_select=on_select>
            {move || render_section(active.get())}
        </Shell>
    }
}

/// Application shell - auth gate component.
///
/// Показывает:
/// - `LoginPage` если продавец не авторизован
/// - `DashboardShell` если авторизован
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <DashboardShell />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Section;

    #[test]
    fn test_deep_link_resolved_before_render() {
        let owner = Owner::new();
        owner.set();

        let nav = NavigationContext::new();
        let path = RwSignal::new("/orders".to_string());
        sync_initial_path(nav, Memo::new(move |_| path.get()));

        let active = Memo::new(move |_| nav.active());
        assert_eq!(active.get_untracked(), Section::Orders);

        path.set("/products/edit/9".to_string());
        sync_initial_path(nav, Memo::new(move |_| path.get()));
        assert_eq!(active.get_untracked(), Section::EditProduct);
    }
}
