//! Leptos components for the landing page blocks.
//!
//! One component per renderable block variant, plus the document shell.
//! Everything renders server-side to static HTML; scroll and pointer effects
//! are reduced to CSS.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! ├── CursorLight (optional)
//! └── main.page
//!     └── div.block[data-block-id] (per rendered block, in page order)
//!         ├── HeroSection
//!         ├── SectionTitleSection
//!         ├── FeatureRowsSection
//!         │   └── FeatureRow
//!         ├── ParallaxContentSection
//!         │   └── GlassPanel
//!         ├── ContentSectionView (parallax | featured)
//!         ├── PricingSection
//!         │   └── PricingCard
//!         ├── CtaSection
//!         └── FooterSection
//! ```
//!
//! [`HtmlRenderer`] plugs these into the dispatcher.

mod content_section;
mod cta;
mod cursor_light;
mod document;
mod feature_rows;
mod footer;
mod hero;
mod parallax_content;
mod pricing;
mod section_title;

pub use content_section::ContentSectionView;
pub use cta::CtaSection;
pub use cursor_light::CursorLight;
pub use document::LandingDocument;
pub use feature_rows::{FeatureRow, FeatureRowsSection};
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use parallax_content::{GlassPanel, ParallaxContentSection};
pub use pricing::{PricingCard, PricingSection};
pub use section_title::SectionTitleSection;

use leptos::prelude::*;

use crate::dispatch::BlockRenderer;
use crate::types::{
    ContentSectionBlock, CtaBlock, FeatureRowsBlock, FooterBlock, HeroBlock,
    ParallaxContentBlock, PricingBlock, SectionTitleBlock,
};

/// Renders blocks into Leptos views.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlRenderer;

impl BlockRenderer for HtmlRenderer {
    type Output = AnyView;

    fn hero(&mut self, block: &HeroBlock) -> AnyView {
        view! { <HeroSection block=block.clone() /> }.into_any()
    }

    fn section_title(&mut self, block: &SectionTitleBlock) -> AnyView {
        view! { <SectionTitleSection block=block.clone() /> }.into_any()
    }

    fn feature_rows(&mut self, block: &FeatureRowsBlock) -> AnyView {
        view! { <FeatureRowsSection block=block.clone() /> }.into_any()
    }

    fn parallax_content(&mut self, block: &ParallaxContentBlock) -> AnyView {
        view! { <ParallaxContentSection block=block.clone() /> }.into_any()
    }

    fn content_section(&mut self, block: &ContentSectionBlock) -> AnyView {
        view! { <ContentSectionView block=block.clone() /> }.into_any()
    }

    fn pricing(&mut self, block: &PricingBlock) -> AnyView {
        view! { <PricingSection block=block.clone() /> }.into_any()
    }

    fn cta(&mut self, block: &CtaBlock) -> AnyView {
        view! { <CtaSection block=block.clone() /> }.into_any()
    }

    fn footer(&mut self, block: &FooterBlock) -> AnyView {
        view! { <FooterSection block=block.clone() /> }.into_any()
    }
}
