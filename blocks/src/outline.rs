//! Plain-text renderer: one summary line per block.

use crate::dispatch::BlockRenderer;
use crate::types::{
    Align, ContentSectionBlock, ContentVariant, CtaBlock, FeatureRowsBlock, FooterBlock,
    HeroBlock, Orientation, ParallaxContentBlock, PricingBlock, SectionTitleBlock,
};

/// Summarizes each block as `Variant "headline" (details)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutlineRenderer;

fn side(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Left => "left",
        Orientation::Right => "right",
    }
}

impl BlockRenderer for OutlineRenderer {
    type Output = String;

    fn hero(&mut self, block: &HeroBlock) -> String {
        match block.cta() {
            Some((text, link)) => format!("Hero {:?} (cta: {} -> {})", block.title, text, link),
            None => format!("Hero {:?}", block.title),
        }
    }

    fn section_title(&mut self, block: &SectionTitleBlock) -> String {
        let align = match block.align {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        };
        format!("SectionTitle {:?} ({})", block.title, align)
    }

    fn feature_rows(&mut self, block: &FeatureRowsBlock) -> String {
        format!(
            "FeatureRows {:?} ({} rows)",
            block.title.as_deref().unwrap_or_default(),
            block.features.len()
        )
    }

    fn parallax_content(&mut self, block: &ParallaxContentBlock) -> String {
        format!(
            "ParallaxContent {:?} ({}, {})",
            block.title,
            side(block.orientation),
            block.image_url
        )
    }

    fn content_section(&mut self, block: &ContentSectionBlock) -> String {
        let variant = match block.variant {
            ContentVariant::Parallax => "parallax",
            ContentVariant::Featured => "featured",
        };
        format!(
            "ContentSection {:?} ({}, {}, {})",
            block.title,
            variant,
            side(block.orientation),
            block.image_url
        )
    }

    fn pricing(&mut self, block: &PricingBlock) -> String {
        let names: Vec<&str> = block.plans.iter().map(|plan| plan.name.as_str()).collect();
        format!(
            "Pricing {:?} ({} plans: {})",
            block.title,
            block.plans.len(),
            names.join(", ")
        )
    }

    fn cta(&mut self, block: &CtaBlock) -> String {
        format!(
            "CTA {:?} ({} -> {})",
            block.title, block.button_text, block.button_link
        )
    }

    fn footer(&mut self, block: &FooterBlock) -> String {
        format!("Footer {:?}", block.copyright)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::render_blocks;
    use crate::types::{BlockDescriptor, PricingPlan};
    use pretty_assertions::assert_eq;

    #[test]
    fn summarizes_blocks_in_order() {
        let blocks = vec![
            BlockDescriptor::new(
                "hero-1",
                HeroBlock {
                    title: "MAP".into(),
                    cta_text: Some("Start".into()),
                    cta_link: Some("/post".into()),
                    ..Default::default()
                },
            ),
            BlockDescriptor::new(
                "pricing-1",
                PricingBlock {
                    title: "Pricing".into(),
                    plans: vec![
                        PricingPlan {
                            name: "INDIVIDUAL".into(),
                            ..Default::default()
                        },
                        PricingPlan {
                            name: "10-PACK".into(),
                            ..Default::default()
                        },
                    ],
                    ..Default::default()
                },
            ),
            BlockDescriptor::placeholder("gap"),
        ];

        let traversal = render_blocks(&mut OutlineRenderer, &blocks);

        let lines: Vec<_> = traversal.outputs().cloned().collect();
        assert_eq!(
            lines,
            vec![
                "Hero \"MAP\" (cta: Start -> /post)".to_string(),
                "Pricing \"Pricing\" (2 plans: INDIVIDUAL, 10-PACK)".to_string(),
            ]
        );
    }

    #[test]
    fn content_section_line_names_layout() {
        let line = OutlineRenderer.content_section(&ContentSectionBlock {
            variant: ContentVariant::Parallax,
            title: "YOU OWN THE LEADS".into(),
            image_url: "/images/ux-leads.png".into(),
            orientation: Orientation::Right,
            ..Default::default()
        });
        assert_eq!(
            line,
            "ContentSection \"YOU OWN THE LEADS\" (parallax, right, /images/ux-leads.png)"
        );
    }
}
