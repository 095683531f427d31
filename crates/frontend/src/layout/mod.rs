pub mod registry;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// +------------------------------+
/// ```
///
/// Below the breakpoint the sidebar is replaced by an overlay opened from
/// the TopHeader toggle.
#[component]
pub fn Shell(#[prop(into)] on_select: Callback<String>, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Sidebar on_select=on_select />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
