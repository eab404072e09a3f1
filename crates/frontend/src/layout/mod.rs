pub mod decor;
pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Page shell: decoration layers, header, content, footer.
///
/// ```text
/// +------------------------------------------+
/// |   GrainOverlay / FloatingSpices (fixed)  |
/// |              Header (fixed)              |
/// +------------------------------------------+
/// |                 content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <decor::GrainOverlay />
        <decor::FloatingSpices />
        <header::Header />
        <main class="main-content">
            {children()}
        </main>
        <footer::Footer />
    }
}
