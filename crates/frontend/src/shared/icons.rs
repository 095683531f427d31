use leptos::prelude::*;

/// Stroke icon paths (24x24 viewBox, lucide-style).
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "dashboard" => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
        "orders" => &[
            "M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z",
            "M3 6h18",
            "M16 10a4 4 0 0 1-8 0",
        ],
        "products" => &[
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            "M3.27 6.96 12 12l8.73-5.04",
            "M12 22V12",
        ],
        "add-product" | "plus" => &["M12 5v14", "M5 12h14"],
        "categories" => &[
            "M20.59 13.41 13.42 20.58a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z",
            "M7 7h.01",
        ],
        "stock" => &["M3 3h7v7H3z", "M14 3h7v7h-7z", "M14 14h7v7h-7z", "M3 14h7v7H3z"],
        "wallet" => &[
            "M20 12V8H6a2 2 0 0 1-2-2c0-1.1.9-2 2-2h12v4",
            "M4 6v12a2 2 0 0 0 2 2h14v-4",
            "M18 12a2 2 0 0 0 0 4h4v-4z",
        ],
        "withdrawals" => &["M7 17 17 7", "M7 7h10v10"],
        "settings" => &[
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-1-1.51 1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.51-1 1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
        ],
        "raise-ticket" => &[
            "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
            "M12 7v4",
            "M12 14h.01",
        ],
        "menu" => &["M3 6h18", "M3 12h18", "M3 18h18"],
        "panel-left-close" => &["M3 3h18v18H3z", "M9 3v18", "m16 15-3-3 3-3"],
        "panel-left-open" => &["M3 3h18v18H3z", "M9 3v18", "m14 9 3 3-3 3"],
        "x" => &["M18 6 6 18", "M6 6l12 12"],
        "eye" => &[
            "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z",
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
        ],
        "edit" => &[
            "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
            "M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4z",
        ],
        "trash" => &[
            "M3 6h18",
            "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
            "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
        ],
        "refresh" => &[
            "M23 4v6h-6",
            "M1 20v-6h6",
            "M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15",
        ],
        "chevron-left" => &["m15 18-6-6 6-6"],
        "chevron-right" => &["m9 18 6-6-6-6"],
        "chevrons-left" => &["m11 17-5-5 5-5", "m18 17-5-5 5-5"],
        "chevrons-right" => &["m13 17 5-5-5-5", "m6 17 5-5-5-5"],
        "search" => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "m21 21-4.35-4.35"],
        "user" => &[
            "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
            "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
        ],
        "log-out" => &[
            "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
            "m16 17 5-5-5-5",
            "M21 12H9",
        ],
        "alert" => &[
            "M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z",
            "M12 9v4",
            "M12 17h.01",
        ],
        "dollar" => &["M12 1v22", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
        "save" => &[
            "M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z",
            "M17 21v-8H7v8",
            "M7 3v5h8",
        ],
        "arrow-left" => &["M19 12H5", "m12 19-7-7 7-7"],
        "send" => &["m22 2-7 20-4-9-9-4z", "M22 2 11 13"],
        _ => &["M12 12h.01"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let paths = icon_paths(name);
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}
