//! Feature rows - alternating text/image rows

use leptos::prelude::*;

use crate::styles::classes;
use crate::types::{non_empty, FeatureRowItem, FeatureRowsBlock};

/// Label shown in place of a missing row image.
const PLACEHOLDER_LABEL: &str = "Placeholder";

#[component]
pub fn FeatureRowsSection(block: FeatureRowsBlock) -> impl IntoView {
    let FeatureRowsBlock { title, features } = block;

    view! {
        <section class="feature-rows">
            <div class="container">
                {non_empty(title).map(|title| view! {
                    <h2 class="heading-xl feature-rows-title reveal">{title}</h2>
                })}
                <div class="feature-row-list">
                    {features.into_iter().enumerate().map(|(index, feature)| {
                        view! { <FeatureRow feature=feature index=index /> }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// A single row. Odd rows put the image on the left.
#[component]
pub fn FeatureRow(feature: FeatureRowItem, index: usize) -> impl IntoView {
    let reversed = if index % 2 == 0 { "" } else { "reversed" };
    let FeatureRowItem {
        title,
        description,
        image_url,
        image_alt,
    } = feature;

    let image_alt = non_empty(image_alt);
    let media = match non_empty(image_url) {
        Some(src) => {
            let alt = image_alt.unwrap_or_else(|| title.clone());
            view! {
                <div class="media-bleed" style="inset:-10%;width:120%;height:120%">
                    <img src=src alt=alt loading="lazy" />
                </div>
            }
            .into_any()
        }
        None => {
            let label = image_alt.unwrap_or_else(|| PLACEHOLDER_LABEL.to_string());
            view! {
                <div class="media-placeholder">
                    <span>{label}</span>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class=classes(&["feature-row", reversed])>
            <div class="feature-text reveal">
                <h3 class="heading-xl uppercase">{title}</h3>
                <p class="body-muted">{description}</p>
            </div>
            <div class="feature-media reveal delay-1">
                <div class="media-frame">
                    {media}
                    <div class="media-shine"></div>
                </div>
            </div>
        </div>
    }
}
