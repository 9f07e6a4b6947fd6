//! Standalone section heading

use leptos::prelude::*;

use crate::styles::classes;
use crate::types::{non_empty, Align, SectionTitleBlock};

#[component]
pub fn SectionTitleSection(block: SectionTitleBlock) -> impl IntoView {
    let align = match block.align {
        Align::Left => "align-left",
        Align::Center => "align-center",
        Align::Right => "align-right",
    };
    let SectionTitleBlock {
        title, subtitle, ..
    } = block;

    view! {
        <section class=classes(&["section-title", align])>
            <div class="container">
                <h2 class="section-heading reveal">{title}</h2>
                {non_empty(subtitle).map(|subtitle| view! {
                    <p class="section-subtitle reveal delay-1">{subtitle}</p>
                })}
            </div>
        </section>
    }
}
