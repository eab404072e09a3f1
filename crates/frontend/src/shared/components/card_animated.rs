//! CardAnimated — карточка витрины с появлением при прокрутке, наклоном за
//! курсором и «пульсом» при клике.
//!
//! Три слоя:
//! - внешний — фаза фильтра (`CardPhase::style`), показ/скрытие;
//! - средний — fade-in при первом попадании во viewport, с каскадной задержкой;
//! - внутренний — transform от курсора и клика.
//!
//! # Пример
//! ```ignore
//! <CardAnimated index=2 phase=phase motion=motion on_click=Callback::new(move |_| pick())>
//!     <h3 class="spice-name">"كمون"</h3>
//! </CardAnimated>
//! ```

use crate::shared::dom;
use contracts::projections::p001_catalog_visibility::CardPhase;
use contracts::shared::config::MotionConfig;
use contracts::shared::motion::{
    fade_in_style, Tilt, CARD_PULSE_SETTLE_TRANSFORM, CARD_PULSE_TRANSFORM,
    CARD_REST_TRANSFORM,
};
use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CardAnimated(
    /// Position on the page, drives the fade-in stagger
    index: usize,
    /// Filter phase of this card
    #[prop(into)]
    phase: Signal<CardPhase>,
    motion: MotionConfig,
    /// Category tag, exposed as `data-category`
    #[prop(optional, into)]
    category: String,
    on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = RwSignal::new(false);
    let transform = RwSignal::new(CARD_REST_TRANSFORM.to_string());

    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            dom::reveal_when_visible(&el, move || revealed.set(true));
        }
    });

    let stagger_ms = motion.fade_stagger_ms;
    let layer_style = move || fade_in_style(index, stagger_ms, revealed.get());

    let handle_move = move |ev: MouseEvent| {
        let Some(el) = node_ref.get() else { return };
        let rect = el.get_bounding_client_rect();
        let tilt = Tilt::from_pointer(
            rect.width(),
            rect.height(),
            ev.client_x() as f64 - rect.left(),
            ev.client_y() as f64 - rect.top(),
        );
        transform.set(tilt.transform());
    };

    let handle_leave = move |_| transform.set(CARD_REST_TRANSFORM.to_string());

    let pulse_ms = motion.pulse_ms;
    let handle_click = move |_| {
        transform.set(CARD_PULSE_TRANSFORM.to_string());
        spawn_local(async move {
            TimeoutFuture::new(pulse_ms).await;
            transform.set(CARD_PULSE_SETTLE_TRANSFORM.to_string());
        });
        on_click.run(());
    };

    view! {
        <div class="price-card-slot" data-category=category style=move || phase.get().style()>
            <div node_ref=node_ref class="price-card-reveal" style=layer_style>
                <div
                    class="price-card"
                    style=move || format!("transform: {};", transform.get())
                    on:mousemove=handle_move
                    on:mouseleave=handle_leave
                    on:click=handle_click
                >
                    {children()}
                </div>
            </div>
        </div>
    }
}
