//! Closing call-to-action block

use leptos::prelude::*;

use crate::types::CtaBlock;

#[component]
pub fn CtaSection(block: CtaBlock) -> impl IntoView {
    let CtaBlock {
        title,
        description,
        button_text,
        button_link,
    } = block;

    view! {
        <section class="cta">
            <div class="cta-dots"></div>
            <div class="glow"></div>

            <div class="container">
                <h2 class="heading-xl cta-title reveal">{title}</h2>
                <p class="cta-description reveal delay-1">{description}</p>
                <div class="reveal delay-2">
                    <a href=button_link class="btn btn-primary btn-large">
                        <span class="shimmer"></span>
                        <span class="btn-label">{button_text}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}
