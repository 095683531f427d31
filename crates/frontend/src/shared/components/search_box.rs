use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;

const DEBOUNCE_MS: u32 = 300;

/// Search input that reports the query after typing pauses for
/// `DEBOUNCE_MS`, or immediately on the clear button.
#[component]
pub fn SearchBox(
    #[prop(into)] on_search: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let value = RwSignal::new(String::new());
    // bumped on every keystroke; a pending timer only fires if still current
    let generation = StoredValue::new(0u64);

    Effect::new(move |prev: Option<()>| {
        let query = value.get();
        if prev.is_none() {
            return;
        }
        generation.update_value(|g| *g += 1);
        let ticket = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() == ticket {
                on_search.run(query.trim().to_string());
            }
        });
    });

    let clear = move |_| {
        generation.update_value(|g| *g += 1);
        value.set(String::new());
        on_search.run(String::new());
    };

    view! {
        <div class="search-box">
            {icon("search")}
            <Input value=value placeholder=placeholder />
            <Show when=move || !value.get().is_empty()>
                <Button appearance=ButtonAppearance::Subtle on_click=clear>
                    {icon("x")}
                </Button>
            </Show>
        </div>
    }
}
