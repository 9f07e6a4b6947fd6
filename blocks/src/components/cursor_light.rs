use leptos::prelude::*;

/// Fixed decorative glow behind the page content.
#[component]
pub fn CursorLight() -> impl IntoView {
    view! {
        <div class="cursor-light" aria-hidden="true">
            <div class="cursor-light-glow"></div>
        </div>
    }
}
