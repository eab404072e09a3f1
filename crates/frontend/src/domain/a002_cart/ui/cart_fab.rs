use crate::layout::global_context::StoreContext;
use crate::shared::icons::icon;
use contracts::usecases::u002_storefront::StoreCommand;
use leptos::prelude::*;

/// Floating cart button with the item counter
#[component]
pub fn CartFab() -> impl IntoView {
    let ctx = use_context::<StoreContext>().expect("StoreContext should be provided");

    let count = move || ctx.store.with(|s| s.cart().render().count());

    view! {
        <button
            id="cart-fab"
            class=move || if ctx.cart_bump.get() { "cart-fab cart-bump" } else { "cart-fab" }
            aria-label="السلة"
            on:click=move |_| ctx.dispatch(StoreCommand::OpenCart)
        >
            {icon("cart")}
            <span id="cart-count" class="cart-fab__count">{count}</span>
        </button>
    }
}
