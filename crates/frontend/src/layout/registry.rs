//! Section content registry: the single mapping from `Section` to a page.
//!
//! The match is exhaustive, so every section renders something; unknown
//! paths never get here as anything but `Section::Dashboard`.

use leptos::prelude::*;

use crate::dashboards::OverviewDashboard;
use crate::domain::categories::ui::list::CategoriesList;
use crate::domain::inventory::ui::list::StockList;
use crate::domain::orders::ui::list::OrdersList;
use crate::domain::products::ui::details::{AddProductPage, EditProductPage, ViewProductPage};
use crate::domain::products::ui::list::ProductsList;
use crate::domain::settings::ui::form::SettingsForm;
use crate::domain::tickets::ui::form::RaiseTicketForm;
use crate::domain::wallet::ui::overview::WalletOverview;
use crate::domain::withdrawals::ui::list::WithdrawalsList;
use crate::routing::Section;

pub fn render_section(section: Section) -> AnyView {
    log::debug!("rendering section '{}'", section);

    match section {
        Section::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Section::Orders => view! { <OrdersList /> }.into_any(),
        Section::Products => view! { <ProductsList /> }.into_any(),
        Section::AddProduct => view! { <AddProductPage /> }.into_any(),
        Section::ViewProduct => view! { <ViewProductPage /> }.into_any(),
        Section::EditProduct => view! { <EditProductPage /> }.into_any(),
        Section::Categories => view! { <CategoriesList /> }.into_any(),
        Section::Stock => view! { <StockList /> }.into_any(),
        Section::Wallet => view! { <WalletOverview /> }.into_any(),
        Section::Withdrawals => view! { <WithdrawalsList /> }.into_any(),
        Section::Settings => view! { <SettingsForm /> }.into_any(),
        Section::RaiseTicket => view! { <RaiseTicketForm /> }.into_any(),
    }
}
