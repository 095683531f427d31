use leptos::prelude::*;
use leptos_router::components::Router;

use crate::app_shell::AppShell;
use crate::routing::NavigationContext;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Router state outlives login/logout so the sidebar keeps its mode
    provide_context(NavigationContext::new());

    view! {
        <Router>
            <AuthProvider>
                <AppShell />
            </AuthProvider>
        </Router>
    }
}
