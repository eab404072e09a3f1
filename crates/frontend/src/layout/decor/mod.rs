//! Decorative layers: parallax spices behind the content and the film grain.

use crate::layout::global_context::StoreContext;
use crate::shared::dom;
use contracts::shared::motion::{grain_opacity, parallax_transform, parse_speed};
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// (glyph, css modifier, data-speed)
const FLOATING_SPICES: &[(&str, &str, Option<&str>)] = &[
    ("🌶️", "floating-spice--a", Some("2")),
    ("🧄", "floating-spice--b", Some("1.5")),
    ("🌿", "floating-spice--c", None),
    ("⭐", "floating-spice--d", Some("3")),
    ("🫚", "floating-spice--e", Some("0.5")),
];

#[component]
pub fn FloatingSpices() -> impl IntoView {
    let ctx = use_context::<StoreContext>().expect("StoreContext should be provided");

    view! {
        <div class="floating-spices" aria-hidden="true">
            {FLOATING_SPICES
                .iter()
                .map(|(glyph, modifier, speed_attr)| {
                    let speed = parse_speed(*speed_attr);
                    view! {
                        <span
                            class=format!("floating-spice {}", modifier)
                            data-speed=speed.to_string()
                            style=move || format!("transform: {};", parallax_transform(ctx.scroll_y.get(), speed))
                        >
                            {*glyph}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn GrainOverlay() -> impl IntoView {
    let ctx = use_context::<StoreContext>().expect("StoreContext should be provided");
    let interval_ms = ctx.store.with_untracked(|s| s.config().motion.grain_interval_ms);

    let opacity = RwSignal::new(grain_opacity(0.5));
    let interval = Interval::new(interval_ms, move || {
        opacity.set(grain_opacity(dom::random()));
    });
    // runs for the whole page session
    interval.forget();

    view! {
        <div class="grain-overlay" style=move || format!("opacity: {};", opacity.get())></div>
    }
}
