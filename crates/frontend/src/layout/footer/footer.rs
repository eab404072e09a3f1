use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="footer__content">
                <span class="footer__brand">"Spicy Blends"</span>
                <span class="footer__tagline">"اكتشف النكهة - Explore the Flavor"</span>
                <span class="footer__contact">"واتساب: +961 81 079 758"</span>
            </div>
        </footer>
    }
}
