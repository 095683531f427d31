//! Top bar: sidebar toggle, store name and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::sidebar::toggle_icon_name;
use crate::routing::{use_navigation, DeviceMode};
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let nav = use_navigation();
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    let toggle_title = move || {
        let s = nav.sidebar();
        match (s.mode, s.mobile_open, s.desktop_collapsed) {
            (DeviceMode::Mobile, true, _) => "Close menu",
            (DeviceMode::Mobile, false, _) => "Open menu",
            (DeviceMode::Desktop, _, true) => "Expand sidebar",
            (DeviceMode::Desktop, _, false) => "Collapse sidebar",
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| nav.toggle_collapse()
                    title=toggle_title
                >
                    {move || {
                        let s = nav.sidebar();
                        icon(toggle_icon_name(s.mode, s.mobile_open, s.desktop_collapsed))
                    }}
                </button>
                <span class="top-header__title">"Seller Center"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().seller
                            .map(|s| s.store_name)
                            .unwrap_or_else(|| "Seller".to_string())}
                    </span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
