use crate::layout::global_context::StoreContext;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a002_cart::{CartLine, CartView};
use contracts::usecases::u002_storefront::StoreCommand;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Cart contents dialog: item list, clear and send
#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_context::<StoreContext>().expect("StoreContext should be provided");
    let is_open = Memo::new(move |_| ctx.store.with(|s| s.cart_open()));

    view! {
        {move || {
            if is_open.get() {
                view! { <CartPanelDialog /> }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}

#[component]
fn CartPanelDialog() -> impl IntoView {
    let ctx = use_context::<StoreContext>().expect("StoreContext should be provided");
    let unit = ctx.config().order.weight_unit;

    let cart_view = move || ctx.store.with(|s| s.cart().render());
    let is_empty = move || ctx.store.with(|s| s.cart().cart().is_empty());

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| ctx.dispatch(StoreCommand::ClearCart)
                disabled=Signal::derive(is_empty)
            >
                {icon("trash")}
                " إفراغ السلة"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| ctx.dispatch(StoreCommand::SendOrder)
                disabled=Signal::derive(is_empty)
            >
                {icon("send")}
                " إرسال عبر واتساب"
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal
            title="سلة المشتريات".to_string()
            class="cart-modal"
            on_close=Callback::new(move |_| ctx.dispatch(StoreCommand::CloseModals))
            footer=footer
        >
            {move || match cart_view() {
                CartView::Empty => view! {
                    <p id="empty-cart-msg" class="cart-empty">"السلة فارغة"</p>
                }.into_any(),
                CartView::Items(lines) => {
                    let unit = unit.clone();
                    view! {
                        <ul id="cart-items" class="cart-items">
                            {lines
                                .into_iter()
                                .map(|line| view! { <CartRow line=line unit=unit.clone() /> })
                                .collect_view()}
                        </ul>
                    }.into_any()
                }
            }}
        </Modal>
    }
}

#[component]
fn CartRow(line: CartLine, unit: String) -> impl IntoView {
    let ctx = use_context::<StoreContext>().expect("StoreContext should be provided");
    let id = line.id;

    view! {
        <li class="cart-item">
            <div class="cart-item-details">
                <span class="cart-item-name">{line.name}</span>
                <span class="cart-item-weight">{format!("{} {}", line.weight, unit)}</span>
            </div>
            <span
                class="cart-item-remove"
                role="button"
                on:click=move |_| ctx.dispatch(StoreCommand::RemoveItem(id))
            >
                "×"
            </span>
        </li>
    }
}
