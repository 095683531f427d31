use contracts::domain::category::{Category, CategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::categories::api;
use crate::shared::form_input::opt_text;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ci, contains_ci, filter_list, Searchable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

impl Searchable for Category {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || self
                .description
                .as_deref()
                .is_some_and(|d| contains_ci(d, filter))
    }
}

fn visible(all: &[Category], query: &str) -> Vec<Category> {
    let mut items = filter_list(all.to_vec(), query);
    items.sort_by(|a, b| cmp_ci(&a.name, &b.name));
    items
}

#[component]
pub fn CategoriesList() -> impl IntoView {
    let categories = RwSignal::new(Vec::<Category>::new());
    let search = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    // Editor: `editing` holds the id of the category being renamed
    let editing = RwSignal::new(None::<String>);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let load_data = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(list) => categories.set(list),
                Err(e) => error.set(Some(format!("Failed to load categories: {}", e))),
            }
            loading.set(false);
        });
    };

    load_data();

    let reset_editor = move || {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
    };

    let start_edit = move |category: Category| {
        name.set(category.name);
        description.set(category.description.unwrap_or_default());
        editing.set(Some(category.id));
    };

    let handle_save = move |_| {
        let dto = CategoryDto {
            name: name.get_untracked().trim().to_string(),
            description: opt_text(&description.get_untracked()),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        saving.set(true);
        let target = editing.get_untracked();
        spawn_local(async move {
            let result = match target.as_deref() {
                Some(id) => api::update_category(id, &dto).await,
                None => api::create_category(&dto).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    categories.update(|list| match list.iter_mut().find(|c| c.id == saved.id) {
                        Some(existing) => *existing = saved,
                        None => list.push(saved),
                    });
                    reset_editor();
                }
                Err(e) => error.set(Some(format!("Failed to save category: {}", e))),
            }
        });
    };

    let handle_delete = move |category: Category| {
        if category.product_count > 0 {
            error.set(Some(format!(
                "\"{}\" still has {} product(s)",
                category.name, category.product_count
            )));
            return;
        }
        spawn_local(async move {
            match api::delete_category(&category.id).await {
                Ok(()) => categories.update(|list| list.retain(|c| c.id != category.id)),
                Err(e) => error.set(Some(format!("Failed to delete category: {}", e))),
            }
        });
    };

    view! {
        <PageFrame page_id="categories--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Categories"</h1>
                    <Badge>{move || categories.with(|c| c.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Input value=name placeholder="Category name" />
                        <Input value=description placeholder="Description (optional)" />
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_save
                            disabled=Signal::derive(move || saving.get())
                        >
                            {move || if editing.get().is_some() { "Update" } else { "Add" }}
                        </Button>
                        <Show when=move || editing.get().is_some()>
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| reset_editor()>
                                "Cancel"
                            </Button>
                        </Show>
                    </div>
                    <Input value=search placeholder="Search..." />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Products"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || categories.with(|all| visible(all, &search.get()))
                                key=|c: &Category| (c.id.clone(), c.name.clone(), c.product_count)
                                children=move |category: Category| {
                                    let for_edit = category.clone();
                                    let for_delete = category.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{category.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {category.description.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{category.product_count.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| start_edit(for_edit.clone())
                                                    attr:title="Rename"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| handle_delete(for_delete.clone())
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str, description: Option<&str>) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            description: description.map(str::to_string),
            product_count: 0,
        }
    }

    #[test]
    fn test_visible_filters_and_sorts_by_name() {
        let all = vec![
            category("1", "textile", Some("Aprons and towels")),
            category("2", "Kitchen", None),
            category("3", "Garden", Some("Outdoor kitchen tools")),
        ];
        let names: Vec<_> = visible(&all, "KITCHEN").into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Garden", "Kitchen"]);
        assert_eq!(visible(&all, "").len(), 3);
    }
}
