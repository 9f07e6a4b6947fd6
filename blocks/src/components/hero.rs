//! Hero block - the full-height opening section

use leptos::prelude::*;

use crate::types::{non_empty, HeroBlock};

/// Headline, tagline, optional logo, description lines and primary CTA.
#[component]
pub fn HeroSection(block: HeroBlock) -> impl IntoView {
    let lines: Vec<String> = block
        .description_lines()
        .into_iter()
        .map(str::to_owned)
        .collect();
    let cta = block
        .cta()
        .map(|(text, link)| (text.to_owned(), link.to_owned()));
    let HeroBlock {
        title,
        subtitle,
        logo_url,
        logo_alt,
        background_url,
        ..
    } = block;

    let photo_style = non_empty(background_url)
        .map(|url| format!("background-image:url({url})"))
        .unwrap_or_default();
    let logo_alt = non_empty(logo_alt).unwrap_or_else(|| title.clone());

    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <div class="hero-photo" style=photo_style></div>
                <div class="hero-vignette"></div>
            </div>

            <div class="container hero-content">
                <h1 class="hero-title reveal">{title}</h1>

                {non_empty(subtitle).map(|subtitle| view! {
                    <p class="hero-subtitle reveal delay-1">{subtitle}</p>
                })}

                {non_empty(logo_url).map(|src| view! {
                    <div class="hero-logo reveal delay-2">
                        <img src=src alt=logo_alt />
                    </div>
                })}

                {(!lines.is_empty()).then(|| view! {
                    <div class="hero-description reveal delay-3">
                        {lines.into_iter().enumerate().map(|(i, line)| {
                            let class = if i > 0 { "line-gap" } else { "" };
                            view! { <p class=class>{line}</p> }
                        }).collect::<Vec<_>>()}
                    </div>
                })}

                {cta.map(|(text, link)| view! {
                    <div class="hero-actions reveal delay-4">
                        <a href=link class="btn btn-primary">
                            <span class="shimmer"></span>
                            <span class="btn-label">{text}</span>
                        </a>
                    </div>
                })}
            </div>
        </section>
    }
}
