use crate::layout::global_context::StoreContext;
use crate::shared::modal::Modal;
use contracts::usecases::u002_storefront::StoreCommand;
use leptos::html;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Weight selection dialog, open while the cart manager is staging a spice
#[component]
pub fn WeightPicker() -> impl IntoView {
    let ctx = use_context::<StoreContext>().expect("StoreContext should be provided");
    let is_open = Memo::new(move |_| ctx.store.with(|s| s.weight_modal_open()));

    view! {
        {move || {
            if is_open.get() {
                view! { <WeightPickerDialog /> }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}

#[component]
fn WeightPickerDialog() -> impl IntoView {
    let ctx = use_context::<StoreContext>().expect("StoreContext should be provided");
    let config = ctx.config();

    let staged_weight = move || {
        ctx.store.with(|s| {
            s.cart()
                .selection()
                .and_then(|sel| sel.weight.clone())
        })
    };

    let title = Signal::derive(move || {
        ctx.store.with(|s| {
            s.cart()
                .selection()
                .and_then(|sel| sel.spice_name.clone())
                .unwrap_or_default()
        })
    });

    // Поле не связано со store: диалог монтируется заново при каждом открытии,
    // а клик по пресету очищает его вручную.
    let custom_input = NodeRef::<html::Input>::new();

    let unit = config.order.weight_unit.clone();
    let presets = config
        .weights
        .presets
        .into_iter()
        .map(|token| {
            let label = format!("{} {}", token, unit);
            let data_weight = token.clone();
            let selected = {
                let token = token.clone();
                move || staged_weight().is_some_and(|w| w.is_preset(&token))
            };
            view! {
                <button
                    class=move || if selected() { "weight-btn selected" } else { "weight-btn" }
                    data-weight=data_weight
                    on:click=move |_| {
                        if let Some(input) = custom_input.get() {
                            input.set_value("");
                        }
                        ctx.dispatch(StoreCommand::ChoosePreset(token.clone()))
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| ctx.dispatch(StoreCommand::ConfirmSelection)
            >
                "أضف إلى السلة"
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal
            title=title
            class="weight-modal"
            on_close=Callback::new(move |_| ctx.dispatch(StoreCommand::CloseModals))
            footer=footer
        >
            <p class="weight-modal__hint">"اختر الوزن"</p>
            <div class="weight-options">{presets}</div>
            <div class="custom-weight">
                <label>
                    <span>{format!("وزن مخصص ({})", unit)}</span>
                    <input
                        node_ref=custom_input
                        id="custom-weight-input"
                        type="text"
                        inputmode="numeric"
                        placeholder="مثال: 750"
                        on:input=move |ev| {
                            ctx.dispatch(StoreCommand::EnterCustomWeight(event_target_value(&ev)))
                        }
                    />
                </label>
            </div>
        </Modal>
    }
}
