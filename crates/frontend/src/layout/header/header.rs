use crate::layout::global_context::StoreContext;
use crate::shared::dom;
use contracts::shared::motion::{anchor_target, HeaderTone};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "الرئيسية"),
    ("#catalog", "التوابل"),
    ("#about", "من نحن"),
    ("#contact", "تواصل معنا"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<StoreContext>().expect("StoreContext should be provided");
    let motion = ctx.store.with_untracked(|s| s.config().motion);

    let tone_style = move || {
        HeaderTone::for_scroll(ctx.scroll_y.get(), motion.header_threshold_px).style()
    };

    view! {
        <header class="main-header" style=tone_style>
            <div class="header__content">
                <a class="header__logo" href="#home">"🌶️ Spicy Blends"</a>
                <nav class="header__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! { <NavLink href=*href label=*label offset=motion.nav_offset_px /> })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

/// In-page anchors scroll smoothly below the fixed header; other links navigate
#[component]
fn NavLink(href: &'static str, label: &'static str, offset: f64) -> impl IntoView {
    let handle_click = move |ev: MouseEvent| {
        if let Some(id) = anchor_target(href) {
            ev.prevent_default();
            dom::smooth_scroll_to_id(id, offset);
        }
    };

    view! {
        <a class="nav-link" href=href on:click=handle_click>{label}</a>
    }
}
