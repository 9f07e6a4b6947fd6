//! Pricing block - plan cards in a row, centre card raised

use leptos::prelude::*;

use crate::styles::{classes, CARD_STAGGER_SECS};
use crate::types::{non_empty, PricingBlock, PricingPlan};

/// Index of the card drawn taller than its neighbours.
const CENTER_CARD: usize = 1;

#[component]
pub fn PricingSection(block: PricingBlock) -> impl IntoView {
    let PricingBlock {
        title,
        subtitle,
        plans,
    } = block;

    view! {
        <section class="pricing">
            <div class="glow"></div>
            <div class="container">
                <div class="pricing-head">
                    <h2 class="heading-xl reveal">{title}</h2>
                    {non_empty(subtitle).map(|subtitle| view! {
                        <p class="section-subtitle reveal delay-1">{subtitle}</p>
                    })}
                </div>
                <div class="pricing-grid">
                    {plans.into_iter().enumerate().map(|(index, plan)| {
                        view! { <PricingCard plan=plan index=index /> }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One plan card.
#[component]
pub fn PricingCard(plan: PricingPlan, index: usize) -> impl IntoView {
    let card_class = classes(&[
        "pricing-card reveal",
        if index == CENTER_CARD { "tall" } else { "" },
        if plan.highlight { "highlight" } else { "" },
    ]);
    let action_class = if plan.highlight {
        "btn btn-primary plan-action"
    } else {
        "btn btn-outline plan-action"
    };
    let delay = format!("animation-delay:{:.1}s", index as f64 * CARD_STAGGER_SECS);
    let PricingPlan {
        name,
        price,
        period,
        description,
        features,
        cta_text,
        cta_link,
        ..
    } = plan;

    view! {
        <div class=card_class style=delay>
            <div class="plan-header">
                <h3 class="plan-name">{name}</h3>
                <div class="plan-price">{price}</div>
                {non_empty(period).map(|period| view! { <p class="plan-period">{period}</p> })}
                {non_empty(description).map(|description| view! {
                    <div class="plan-badge">{description}</div>
                })}
            </div>

            <ul class="plan-features">
                {features.into_iter().map(|feature| view! {
                    <li class="plan-feature">
                        <span class="plan-dot"></span>
                        <span>{feature}</span>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>

            <a href=cta_link class=action_class>
                <span class="shimmer"></span>
                <span class="btn-label">{cta_text}</span>
            </a>
        </div>
    }
}
