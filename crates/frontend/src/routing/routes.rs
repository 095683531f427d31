//! Route tables - единственный источник правды для маппинга URL ↔ Section.
//!
//! `ROUTES` resolves a browser path to the section to render.
//! `NAV_TARGETS` tells where a sidebar selection should navigate to.
//! The two are deliberately not inverses of each other: detail pages are
//! only entered by path.

use super::section::Section;

/// Path the router falls back to for unknown section requests.
pub const FALLBACK_PATH: &str = "/dashboard";

pub const VIEW_PRODUCT_PREFIX: &str = "/products/view/";
pub const EDIT_PRODUCT_PREFIX: &str = "/products/edit/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    Exact(&'static str),
    Prefix(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct RouteRule {
    pub pattern: PathPattern,
    pub section: Section,
}

const fn exact(path: &'static str, section: Section) -> RouteRule {
    RouteRule {
        pattern: PathPattern::Exact(path),
        section,
    }
}

const fn prefix(path: &'static str, section: Section) -> RouteRule {
    RouteRule {
        pattern: PathPattern::Prefix(path),
        section,
    }
}

pub static ROUTES: &[RouteRule] = &[
    exact("/", Section::Dashboard),
    exact("/dashboard", Section::Dashboard),
    exact("/orders", Section::Orders),
    exact("/products", Section::Products),
    exact("/products/add", Section::AddProduct),
    exact("/categories", Section::Categories),
    exact("/stock", Section::Stock),
    exact("/wallet", Section::Wallet),
    exact("/withdrawals", Section::Withdrawals),
    exact("/settings", Section::Settings),
    exact("/raise-ticket", Section::RaiseTicket),
    prefix(VIEW_PRODUCT_PREFIX, Section::ViewProduct),
    prefix(EDIT_PRODUCT_PREFIX, Section::EditProduct),
];

/// Resolves a URL path to a section.
///
/// Exact rules win over prefix rules regardless of table order; anything
/// unmatched resolves to [`Section::FALLBACK`].
pub fn resolve_path(path: &str) -> Section {
    let exact_hit = ROUTES.iter().find(|rule| match rule.pattern {
        PathPattern::Exact(p) => p == path,
        PathPattern::Prefix(_) => false,
    });
    let hit = exact_hit.or_else(|| {
        ROUTES.iter().find(|rule| match rule.pattern {
            PathPattern::Prefix(p) => path.starts_with(p),
            PathPattern::Exact(_) => false,
        })
    });
    hit.map(|rule| rule.section).unwrap_or(Section::FALLBACK)
}

/// How a navigation should treat the browser history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// Replace the current history entry.
    Replace,
    /// Push a new history entry.
    Push,
}

#[derive(Debug, Clone, Copy)]
pub struct NavTarget {
    pub section: Section,
    pub path: &'static str,
    pub mode: NavMode,
}

const fn target(section: Section, path: &'static str, mode: NavMode) -> NavTarget {
    NavTarget {
        section,
        path,
        mode,
    }
}

pub static NAV_TARGETS: &[NavTarget] = &[
    target(Section::Dashboard, "/dashboard", NavMode::Replace),
    target(Section::Orders, "/orders", NavMode::Replace),
    target(Section::Products, "/products", NavMode::Replace),
    target(Section::AddProduct, "/products/add", NavMode::Replace),
    target(Section::Categories, "/categories", NavMode::Replace),
    target(Section::Stock, "/stock", NavMode::Replace),
    target(Section::Wallet, "/wallet", NavMode::Replace),
    target(Section::Withdrawals, "/withdrawals", NavMode::Replace),
    target(Section::Settings, "/settings", NavMode::Replace),
    target(Section::RaiseTicket, "/raise-ticket", NavMode::Push),
];

pub fn nav_target(section: Section) -> Option<&'static NavTarget> {
    NAV_TARGETS.iter().find(|t| t.section == section)
}

/// Trailing identifier of a detail path, e.g. `"42"` for `/products/view/42`.
pub fn detail_id(path: &str) -> Option<&str> {
    [VIEW_PRODUCT_PREFIX, EDIT_PRODUCT_PREFIX]
        .into_iter()
        .find_map(|p| path.strip_prefix(p))
        .map(|rest| rest.trim_end_matches('/'))
        .filter(|id| !id.is_empty())
}

pub fn view_product_path(id: &str) -> String {
    format!("{}{}", VIEW_PRODUCT_PREFIX, urlencoding::encode(id))
}

pub fn edit_product_path(id: &str) -> String {
    format!("{}{}", EDIT_PRODUCT_PREFIX, urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_exact_route_resolves_to_its_section() {
        for rule in ROUTES {
            if let PathPattern::Exact(path) = rule.pattern {
                assert_eq!(resolve_path(path), rule.section, "path {}", path);
            }
        }
    }

    #[test]
    fn test_prefix_routes_ignore_trailing_identifier() {
        assert_eq!(resolve_path("/products/view/42"), Section::ViewProduct);
        assert_eq!(resolve_path("/products/view/abc-def"), Section::ViewProduct);
        assert_eq!(resolve_path("/products/view/"), Section::ViewProduct);
        assert_eq!(resolve_path("/products/edit/7"), Section::EditProduct);
        assert_eq!(resolve_path("/products/edit/7/extra"), Section::EditProduct);
    }

    #[test]
    fn test_exact_match_wins_over_prefix() {
        assert_eq!(resolve_path("/products"), Section::Products);
        assert_eq!(resolve_path("/products/add"), Section::AddProduct);
    }

    #[test]
    fn test_unmatched_paths_fall_back() {
        for path in [
            "/unknown/page",
            "",
            "/orders/",
            "/products/view",
            "/Products",
            "/stock?x=1",
        ] {
            assert_eq!(resolve_path(path), Section::Dashboard, "path {:?}", path);
        }
    }

    #[test]
    fn test_each_route_section_has_single_mapping() {
        for rule in ROUTES {
            let matching: Vec<_> = ROUTES
                .iter()
                .filter(|other| other.pattern == rule.pattern)
                .collect();
            assert_eq!(matching.len(), 1);
        }
    }

    #[test]
    fn test_nav_targets() {
        let stock = nav_target(Section::Stock).unwrap();
        assert_eq!(stock.path, "/stock");
        assert_eq!(stock.mode, NavMode::Replace);

        let ticket = nav_target(Section::RaiseTicket).unwrap();
        assert_eq!(ticket.path, "/raise-ticket");
        assert_eq!(ticket.mode, NavMode::Push);

        assert!(nav_target(Section::ViewProduct).is_none());
        assert!(nav_target(Section::EditProduct).is_none());
    }

    #[test]
    fn test_nav_targets_land_on_their_own_section() {
        for t in NAV_TARGETS {
            assert_eq!(resolve_path(t.path), t.section);
        }
        assert_eq!(resolve_path(FALLBACK_PATH), Section::FALLBACK);
    }

    #[test]
    fn test_only_raise_ticket_pushes_history() {
        let pushing: Vec<_> = NAV_TARGETS
            .iter()
            .filter(|t| t.mode == NavMode::Push)
            .map(|t| t.section)
            .collect();
        assert_eq!(pushing, vec![Section::RaiseTicket]);
    }

    #[test]
    fn test_detail_id() {
        assert_eq!(detail_id("/products/view/42"), Some("42"));
        assert_eq!(detail_id("/products/edit/abc/"), Some("abc"));
        assert_eq!(detail_id("/products/view/"), None);
        assert_eq!(detail_id("/orders"), None);
    }

    #[test]
    fn test_detail_paths_resolve_back() {
        assert_eq!(resolve_path(&view_product_path("p 1")), Section::ViewProduct);
        assert_eq!(edit_product_path("9"), "/products/edit/9");
    }
}
