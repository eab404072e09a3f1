use crate::layout::global_context::StoreContext;
use crate::shared::components::{CardAnimated, FilterOption, FilterPanel};
use contracts::domain::a001_spice::{CategoryInfo, SpiceCard};
use contracts::projections::p001_catalog_visibility::{CategoryFilter, ALL_CATEGORIES};
use contracts::shared::config::MotionConfig;
use contracts::usecases::u002_storefront::StoreCommand;
use leptos::prelude::*;

const ALL_LABEL: &str = "الكل";

fn filter_options(categories: &[CategoryInfo]) -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        token: ALL_CATEGORIES.to_string(),
        label: ALL_LABEL.to_string(),
    })
    .chain(categories.iter().map(|c| FilterOption {
        token: c.tag.clone(),
        label: c.label.clone(),
    }))
    .collect()
}

/// Catalog section: filter bar and the card grid
#[component]
pub fn SpiceList() -> impl IntoView {
    let ctx = use_context::<StoreContext>().expect("StoreContext should be provided");

    let (categories, cards) = ctx.store.with_untracked(|s| {
        (
            s.catalog().categories.clone(),
            s.catalog().cards.clone(),
        )
    });
    let motion = ctx.store.with_untracked(|s| s.config().motion);

    let active = Memo::new(move |_| {
        ctx.store
            .with(|s| s.filter().category().token().to_string())
    });

    let on_select = Callback::new(move |token: String| {
        ctx.dispatch(StoreCommand::SelectCategory(CategoryFilter::from_token(&token)));
    });
    let on_search = Callback::new(move |text: String| {
        ctx.dispatch(StoreCommand::Search(text));
    });

    let nothing_found = move || {
        ctx.store.with(|s| {
            s.catalog()
                .cards
                .iter()
                .all(|c| !s.filter().admits(c))
        })
    };

    view! {
        <div class="spice-list">
            <FilterPanel
                options=filter_options(&categories)
                active=active
                on_select=on_select
                on_search=on_search
                placeholder="ابحث عن نوع التوابل... / Search spices"
            />

            <div class="pricing-grid">
                {cards
                    .into_iter()
                    .enumerate()
                    .map(|(index, card)| view! { <SpiceTile index=index card=card motion=motion /> })
                    .collect_view()}
            </div>

            {move || {
                if nothing_found() {
                    view! { <p class="spice-list__empty">"لا توجد نتائج / Nothing found"</p> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn SpiceTile(
    index: usize,
    card: SpiceCard,
    motion: MotionConfig,
) -> impl IntoView {
    let ctx = use_context::<StoreContext>().expect("StoreContext should be provided");
    let id = card.id;

    let phase = Memo::new(move |_| ctx.store.with(|s| s.phase(id)));
    let on_click = Callback::new(move |_| ctx.dispatch(StoreCommand::PickSpice(id)));

    view! {
        <CardAnimated index=index phase=phase motion=motion category=card.category.clone() on_click=on_click>
            <h3 class="spice-name">{card.title}</h3>
            <p class="spice-name-en">{card.title_en}</p>
            <p class="description">{card.description}</p>
            <span class="price-card__cta">"أضف إلى السلة"</span>
        </CardAnimated>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_options_start_with_all() {
        let categories = vec![CategoryInfo {
            tag: "herbs".to_string(),
            label: "أعشاب".to_string(),
            label_en: "Herbs".to_string(),
        }];
        let options = filter_options(&categories);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].token, "all");
        assert_eq!(options[1].token, "herbs");
        assert_eq!(options[1].label, "أعشاب");
    }
}
