//! PageFrame — standard root wrapper for every section page.
//!
//! Sets `id="{section}--{category}"` and `data-page-category` on the root
//! element so a page found in the DOM inspector can be traced back to code.

use leptos::prelude::*;

/// Table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Summary cards and charts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Stand-alone form (settings, support ticket).
pub const PAGE_CAT_FORM: &str = "form";

pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_FORM => "page page--form",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{section}--{category}`, e.g. `"orders--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class=page_class(category) data-page-category=category>
            {children()}
        </div>
    }
}
