//! Sidebar: fixed desktop panel plus the mobile overlay.
//!
//! Items only report the selected section id through `on_select`; the shell
//! decides what navigation that means.

use leptos::prelude::*;

use crate::routing::{use_navigation, DeviceMode, Section};
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<Section>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            items: vec![Section::Dashboard],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            items: vec![Section::Orders],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            items: vec![
                Section::Products,
                Section::AddProduct,
                Section::Categories,
                Section::Stock,
            ],
        },
        MenuGroup {
            id: "finance",
            label: "Finance",
            items: vec![Section::Wallet, Section::Withdrawals],
        },
        MenuGroup {
            id: "account",
            label: "Account",
            items: vec![Section::Settings, Section::RaiseTicket],
        },
    ]
}

#[component]
fn MenuItems(
    #[prop(into)] on_select: Callback<String>,
    /// Runs after a selection (the overlay closes itself with it)
    #[prop(optional, into)]
    after_select: Option<Callback<()>>,
) -> impl IntoView {
    let nav = use_navigation();

    menu_groups()
        .into_iter()
        .map(|group| {
            view! {
                <div class="app-sidebar__group" data-group=group.id>
                    <div class="app-sidebar__group-label">{group.label}</div>
                    {group
                        .items
                        .into_iter()
                        .map(|section| {
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || nav.active().highlight() == section
                                    title=section.label()
                                    on:click=move |_| {
                                        on_select.run(section.id().to_string());
                                        if let Some(after) = after_select {
                                            after.run(());
                                        }
                                    }
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(section.id())}
                                        <span class="app-sidebar__label">{section.label()}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn Sidebar(#[prop(into)] on_select: Callback<String>) -> impl IntoView {
    let nav = use_navigation();
    let collapsed = move || nav.sidebar().desktop_collapsed;
    let overlay = move || nav.sidebar().show_mobile_overlay();
    let close = Callback::new(move |_: ()| nav.close_mobile());

    view! {
        <aside
            class="app-sidebar app-sidebar--desktop"
            class:app-sidebar--collapsed=collapsed
        >
            <div class="app-sidebar__content">
                <MenuItems on_select=on_select />
            </div>
        </aside>

        <Show when=overlay>
            <div class="app-sidebar__backdrop" on:click=move |_| close.run(())></div>
            <aside class="app-sidebar app-sidebar--mobile">
                <div class="app-sidebar__mobile-header">
                    <span>"Menu"</span>
                    <button class="top-header__icon-btn" on:click=move |_| close.run(()) title="Close">
                        {icon("x")}
                    </button>
                </div>
                <div class="app-sidebar__content">
                    <MenuItems on_select=on_select after_select=close />
                </div>
            </aside>
        </Show>
    }
}

/// Icon for the top header toggle in the given mode.
pub fn toggle_icon_name(mode: DeviceMode, mobile_open: bool, desktop_collapsed: bool) -> &'static str {
    match mode {
        DeviceMode::Mobile if mobile_open => "x",
        DeviceMode::Mobile => "menu",
        DeviceMode::Desktop if desktop_collapsed => "panel-left-open",
        DeviceMode::Desktop => "panel-left-close",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::routes::nav_target;

    #[test]
    fn test_menu_lists_every_navigable_section_once() {
        let listed: Vec<Section> = menu_groups().into_iter().flat_map(|g| g.items).collect();
        for section in Section::ALL {
            let count = listed.iter().filter(|s| **s == section).count();
            let expected = usize::from(nav_target(section).is_some());
            assert_eq!(count, expected, "section {}", section);
        }
    }

    #[test]
    fn test_toggle_icon_name() {
        assert_eq!(toggle_icon_name(DeviceMode::Mobile, false, true), "menu");
        assert_eq!(toggle_icon_name(DeviceMode::Mobile, true, false), "x");
        assert_eq!(toggle_icon_name(DeviceMode::Desktop, true, false), "panel-left-close");
        assert_eq!(toggle_icon_name(DeviceMode::Desktop, true, true), "panel-left-open");
    }
}
