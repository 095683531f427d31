use std::fmt;

/// Identifier of the page currently shown in the content area.
///
/// Decoupled from the URL: several paths may resolve to one section and
/// two sections are reachable only through path matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Orders,
    Products,
    AddProduct,
    ViewProduct,
    EditProduct,
    Categories,
    Stock,
    Wallet,
    Withdrawals,
    Settings,
    RaiseTicket,
}

impl Section {
    /// Rendered when nothing else matches.
    pub const FALLBACK: Section = Section::Dashboard;

    pub const ALL: [Section; 12] = [
        Section::Dashboard,
        Section::Orders,
        Section::Products,
        Section::AddProduct,
        Section::ViewProduct,
        Section::EditProduct,
        Section::Categories,
        Section::Stock,
        Section::Wallet,
        Section::Withdrawals,
        Section::Settings,
        Section::RaiseTicket,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Orders => "orders",
            Section::Products => "products",
            Section::AddProduct => "add-product",
            Section::ViewProduct => "view-product",
            Section::EditProduct => "edit-product",
            Section::Categories => "categories",
            Section::Stock => "stock",
            Section::Wallet => "wallet",
            Section::Withdrawals => "withdrawals",
            Section::Settings => "settings",
            Section::RaiseTicket => "raise-ticket",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Orders => "Orders",
            Section::Products => "Products",
            Section::AddProduct => "Add Product",
            Section::ViewProduct => "Product Details",
            Section::EditProduct => "Edit Product",
            Section::Categories => "Categories",
            Section::Stock => "Stock",
            Section::Wallet => "Wallet",
            Section::Withdrawals => "Withdrawals",
            Section::Settings => "Settings",
            Section::RaiseTicket => "Raise Ticket",
        }
    }

    /// Sidebar entry to highlight while this section is active.
    ///
    /// Product detail pages keep the "Products" entry lit.
    pub fn highlight(&self) -> Section {
        match self {
            Section::ViewProduct | Section::EditProduct => Section::Products,
            other => *other,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(Section::from_id("reports"), None);
        assert_eq!(Section::from_id(""), None);
        assert_eq!(Section::from_id("Dashboard"), None);
    }

    #[test]
    fn test_default_is_fallback() {
        assert_eq!(Section::default(), Section::FALLBACK);
        assert_eq!(Section::FALLBACK.id(), "dashboard");
    }

    #[test]
    fn test_detail_sections_highlight_products() {
        assert_eq!(Section::ViewProduct.highlight(), Section::Products);
        assert_eq!(Section::EditProduct.highlight(), Section::Products);
        assert_eq!(Section::Stock.highlight(), Section::Stock);
    }
}
