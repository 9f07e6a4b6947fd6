use leptos::prelude::*;

use crate::types::FooterBlock;

#[component]
pub fn FooterSection(block: FooterBlock) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{block.copyright}</p>
            </div>
        </footer>
    }
}
