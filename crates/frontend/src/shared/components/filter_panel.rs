use crate::shared::icons::icon;
use leptos::prelude::*;

/// One category button
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub token: String,
    pub label: String,
}

/// FilterPanel component - category buttons plus a free-text search box
#[component]
pub fn FilterPanel(
    /// Buttons in display order
    options: Vec<FilterOption>,

    /// Token of the active button
    #[prop(into)]
    active: Signal<String>,

    on_select: Callback<String>,

    /// Called on every input event with the raw text
    on_search: Callback<String>,

    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel__search">
                {icon("search")}
                <input
                    id="spice-search"
                    type="search"
                    placeholder=placeholder
                    on:input=move |ev| on_search.run(event_target_value(&ev))
                />
            </div>
            <div class="filter-panel__buttons">
                {options
                    .into_iter()
                    .map(|option| {
                        let token = option.token.clone();
                        let is_active = {
                            let token = token.clone();
                            move || active.get() == token
                        };
                        view! {
                            <FilterButton
                                label=option.label
                                is_active=Signal::derive(is_active)
                                on_click=Callback::new(move |_| on_select.run(token.clone()))
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FilterButton(
    #[prop(into)] label: String,
    #[prop(into)] is_active: Signal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=move || if is_active.get() { "filter-btn active" } else { "filter-btn" }
            on:click=move |_| on_click.run(())
        >
            {label}
        </button>
    }
}
