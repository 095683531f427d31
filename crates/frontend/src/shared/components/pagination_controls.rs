use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::pagination::PageState;
use leptos::prelude::*;

/// "21–40 of 95"; "0 of 0" for an empty list.
pub fn range_label(paging: &PageState) -> String {
    if paging.total_count == 0 {
        return "0 of 0".to_string();
    }
    let first = paging.page * paging.page_size + 1;
    let last = ((paging.page + 1) * paging.page_size).min(paging.total_count);
    format!("{}–{} of {}", first.min(last), last, paging.total_count)
}

/// Page index a navigation button leads to, or `None` when it is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    First,
    Prev,
    Next,
    Last,
}

fn step_target(paging: &PageState, step: Step) -> Option<usize> {
    let last = paging.total_pages() - 1;
    let target = match step {
        Step::First | Step::Prev if paging.page == 0 => return None,
        Step::Next | Step::Last if paging.page >= last => return None,
        Step::First => 0,
        Step::Prev => paging.page - 1,
        Step::Next => paging.page + 1,
        Step::Last => last,
    };
    Some(target)
}

/// Pagination bar over a [`PageState`]: first/prev/next/last, the visible
/// range and a page size selector.
#[component]
pub fn PaginationControls(
    #[prop(into)] paging: Signal<PageState>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let options = config().page_size_options.clone();
    let default_size = config().default_page_size;

    let step_button = move |step: Step, icon_name: &'static str, title: &'static str| {
        view! {
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(page) = step_target(&paging.get_untracked(), step) {
                        on_page_change.run(page);
                    }
                }
                disabled=move || step_target(&paging.get(), step).is_none()
                title=title
            >
                {icon(icon_name)}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {step_button(Step::First, "chevrons-left", "First page")}
            {step_button(Step::Prev, "chevron-left", "Previous page")}
            <span class="pagination-info">{move || range_label(&paging.get())}</span>
            {step_button(Step::Next, "chevron-right", "Next page")}
            {step_button(Step::Last, "chevrons-right", "Last page")}
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(default_size);
                    on_page_size_change.run(size);
                }
                prop:value=move || paging.get().page_size.to_string()
            >
                {options
                    .into_iter()
                    .map(|size| view! { <option value=size.to_string()>{format!("{} / page", size)}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paging(page: usize, page_size: usize, total: usize) -> PageState {
        PageState {
            page,
            page_size,
            total_count: total,
        }
    }

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(&paging(0, 20, 0)), "0 of 0");
        assert_eq!(range_label(&paging(0, 20, 95)), "1–20 of 95");
        assert_eq!(range_label(&paging(4, 20, 95)), "81–95 of 95");
    }

    #[test]
    fn test_step_targets() {
        let p = paging(0, 10, 35);
        assert_eq!(step_target(&p, Step::First), None);
        assert_eq!(step_target(&p, Step::Prev), None);
        assert_eq!(step_target(&p, Step::Next), Some(1));
        assert_eq!(step_target(&p, Step::Last), Some(3));

        let p = paging(3, 10, 35);
        assert_eq!(step_target(&p, Step::Prev), Some(2));
        assert_eq!(step_target(&p, Step::Next), None);

        // a single empty page disables everything
        let p = paging(0, 10, 0);
        assert!([Step::First, Step::Prev, Step::Next, Step::Last]
            .into_iter()
            .all(|s| step_target(&p, s).is_none()));
    }
}
