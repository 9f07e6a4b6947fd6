//! Content section - parallax or featured layout chosen by `variant`

use leptos::prelude::*;

use super::GlassPanel;
use crate::styles::{classes, CONTENT_BOX_LARGE};
use crate::types::{ContentSectionBlock, ContentVariant, Orientation};

#[component]
pub fn ContentSectionView(block: ContentSectionBlock) -> impl IntoView {
    match block.variant {
        ContentVariant::Parallax => view! { <ParallaxLayout block=block /> }.into_any(),
        ContentVariant::Featured => view! { <FeaturedLayout block=block /> }.into_any(),
    }
}

#[component]
fn ParallaxLayout(block: ContentSectionBlock) -> impl IntoView {
    let image_style = format!(
        "background-image:url({});background-position:center {};transform:scale({})",
        block.image_url,
        block.image_position_y,
        block.parallax_scale()
    );
    let overlay_style = format!("opacity:{}", block.overlay_opacity());

    view! {
        <section class="parallax">
            <div class="parallax-bg">
                <div class="parallax-image" style=image_style></div>
                <div class="parallax-overlay" style=overlay_style></div>
            </div>
            <div class="container">
                <GlassPanel
                    title=block.title
                    description=block.description
                    orientation=block.orientation
                />
            </div>
        </section>
    }
}

#[component]
fn FeaturedLayout(block: ContentSectionBlock) -> impl IntoView {
    let reversed = match block.orientation {
        Orientation::Left => "",
        Orientation::Right => "reversed",
    };
    let bleed_style = block.bleed_style();
    let image_style = format!(
        "object-position:center {};opacity:{}",
        block.image_position_y,
        block.image_opacity()
    );
    let alt = block.alt_text().to_owned();
    let text_style = format!("max-width:{CONTENT_BOX_LARGE}");

    view! {
        <section class="featured">
            <div class="container">
                <div class=classes(&["featured-row", reversed])>
                    <div class="featured-text reveal" style=text_style>
                        <h3 class="heading-xl uppercase">{block.title}</h3>
                        <div class="accent-bar"></div>
                        <p class="body-muted">{block.description}</p>
                    </div>
                    <div class="featured-media reveal delay-1">
                        <div class="media-frame">
                            <div class="media-bleed" style=bleed_style>
                                <img src=block.image_url alt=alt style=image_style loading="lazy" />
                            </div>
                            <div class="media-shine"></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
