//! Parallax content - glass text panel over a full-bleed background image

use leptos::prelude::*;

use crate::styles::{classes, PARALLAX_CONTENT_OVERLAY, PARALLAX_CONTENT_SCALE};
use crate::types::{Orientation, ParallaxContentBlock};

#[component]
pub fn ParallaxContentSection(block: ParallaxContentBlock) -> impl IntoView {
    let ParallaxContentBlock {
        title,
        description,
        image_url,
        orientation,
    } = block;

    let image_style = format!(
        "background-image:url({image_url});background-position:center center;transform:scale({PARALLAX_CONTENT_SCALE})"
    );
    let overlay_style = format!("opacity:{PARALLAX_CONTENT_OVERLAY}");

    view! {
        <section class="parallax">
            <div class="parallax-bg">
                <div class="parallax-image" style=image_style></div>
                <div class="parallax-overlay" style=overlay_style></div>
            </div>
            <div class="container">
                <GlassPanel title=title description=description orientation=orientation />
            </div>
        </section>
    }
}

/// Glass text panel, pushed to one side of its row.
#[component]
pub fn GlassPanel(title: String, description: String, orientation: Orientation) -> impl IntoView {
    let side = match orientation {
        Orientation::Left => "side-left",
        Orientation::Right => "side-right",
    };

    view! {
        <div class=classes(&["parallax-row", side])>
            <div class="glass-panel reveal">
                <h2 class="heading-xl">{title}</h2>
                <div class="accent-bar"></div>
                <p class="body-light">{description}</p>
            </div>
        </div>
    }
}
