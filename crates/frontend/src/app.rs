use crate::domain::a001_spice::ui::list::SpiceList;
use crate::domain::a002_cart::ui::cart_fab::CartFab;
use crate::domain::a002_cart::ui::cart_panel::CartPanel;
use crate::domain::a002_cart::ui::weight_picker::WeightPicker;
use crate::layout::global_context::StoreContext;
use crate::layout::Shell;
use crate::shared::dom;
use contracts::usecases::u002_storefront::StoreCommand;
use leptos::prelude::*;
use thaw::ConfigProvider;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

#[component]
pub fn App() -> impl IntoView {
    // Provide the StoreContext to the whole page via context.
    let ctx = StoreContext::new();
    provide_context(ctx);
    ctx.init_scroll_tracking();

    // Escape closes whichever modal is open
    dom::add_window_listener("keydown", move |event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" {
                ctx.dispatch(StoreCommand::CloseModals);
            }
        }
    });

    view! {
        <ConfigProvider>
            <Shell>
                <section id="home" class="hero">
                    <h1 class="hero__title">"Spicy Blends"</h1>
                    <p class="hero__subtitle">"اكتشف النكهة - Explore the Flavor"</p>
                    <a class="hero__cta" href="#catalog">"تصفح التوابل"</a>
                </section>

                <section id="catalog" class="pricing-section">
                    <h2 class="section-title">"التوابل"</h2>
                    <SpiceList />
                </section>

                <section id="about" class="about-section">
                    <h2 class="section-title">"من نحن"</h2>
                    <p>"توابل مطحونة طازجة ومختارة بعناية. اختر الوزن، أضف إلى السلة، وأرسل طلبك عبر واتساب."</p>
                </section>
            </Shell>

            <CartFab />
            <WeightPicker />
            <CartPanel />
        </ConfigProvider>
    }
}
