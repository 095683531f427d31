use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value; `None` while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Highlights the card (e.g. pending work)
    #[prop(optional, into)]
    accent: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="stat-card" class:stat-card--accent=move || accent.get().unwrap_or(false)>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "…".to_string())}
                </div>
            </div>
        </div>
    }
}
