//! Block dispatch and page traversal.
//!
//! [`BlockRenderer`] is the registry: one method per renderable variant.
//! [`dispatch`] matches a descriptor against it exhaustively, so a new
//! variant cannot be added without every renderer handling it.
//!
//! Resolution failures stop here. An unknown or unreadable block produces
//! no output plus one [`Diagnostic`] (also logged at WARN), and traversal
//! moves on to the next sibling.
//!
//! ```rust
//! use landio_blocks::dispatch::render_blocks;
//! use landio_blocks::outline::OutlineRenderer;
//! use landio_blocks::types::{BlockDescriptor, FooterBlock};
//!
//! let blocks = vec![BlockDescriptor::new("f", FooterBlock { copyright: "Y".into() })];
//! let traversal = render_blocks(&mut OutlineRenderer, &blocks);
//! assert_eq!(traversal.units.len(), 1);
//! assert!(traversal.diagnostics.is_empty());
//! ```

use tracing::warn;

use crate::error::Diagnostic;
use crate::types::{
    Block, BlockDescriptor, ContentSectionBlock, CtaBlock, FeatureRowsBlock, FooterBlock,
    HeroBlock, PageModel, ParallaxContentBlock, PricingBlock, SectionTitleBlock,
};

/// Rendering implementation for every renderable variant.
pub trait BlockRenderer {
    type Output;

    fn hero(&mut self, block: &HeroBlock) -> Self::Output;
    fn section_title(&mut self, block: &SectionTitleBlock) -> Self::Output;
    fn feature_rows(&mut self, block: &FeatureRowsBlock) -> Self::Output;
    fn parallax_content(&mut self, block: &ParallaxContentBlock) -> Self::Output;
    fn content_section(&mut self, block: &ContentSectionBlock) -> Self::Output;
    fn pricing(&mut self, block: &PricingBlock) -> Self::Output;
    fn cta(&mut self, block: &CtaBlock) -> Self::Output;
    fn footer(&mut self, block: &FooterBlock) -> Self::Output;
}

/// Result of dispatching one descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct Dispatched<O> {
    pub output: Option<O>,
    pub diagnostic: Option<Diagnostic>,
}

impl<O> Dispatched<O> {
    fn rendered(output: O) -> Self {
        Self {
            output: Some(output),
            diagnostic: None,
        }
    }

    fn empty() -> Self {
        Self {
            output: None,
            diagnostic: None,
        }
    }

    fn skipped(diagnostic: Option<Diagnostic>) -> Self {
        Self {
            output: None,
            diagnostic,
        }
    }
}

/// Resolve one descriptor and invoke the matching renderer method.
pub fn dispatch<R>(renderer: &mut R, descriptor: &BlockDescriptor) -> Dispatched<R::Output>
where
    R: BlockRenderer + ?Sized,
{
    match &descriptor.block {
        Block::Hero(block) => Dispatched::rendered(renderer.hero(block)),
        Block::SectionTitle(block) => Dispatched::rendered(renderer.section_title(block)),
        Block::FeatureRows(block) => Dispatched::rendered(renderer.feature_rows(block)),
        Block::ParallaxContent(block) => Dispatched::rendered(renderer.parallax_content(block)),
        Block::ContentSection(block) => Dispatched::rendered(renderer.content_section(block)),
        Block::Pricing(block) => Dispatched::rendered(renderer.pricing(block)),
        Block::Cta(block) => Dispatched::rendered(renderer.cta(block)),
        Block::Footer(block) => Dispatched::rendered(renderer.footer(block)),
        Block::Content => Dispatched::empty(),
        Block::Unknown { .. } | Block::Invalid { .. } => {
            let diagnostic = descriptor.diagnostic();
            if let Some(diagnostic) = &diagnostic {
                warn!(
                    block_id = %descriptor.id,
                    block_type = descriptor.block.type_name(),
                    "{diagnostic}"
                );
            }
            Dispatched::skipped(diagnostic)
        }
    }
}

/// Output for one descriptor, keyed by its id.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedUnit<O> {
    pub id: String,
    pub output: Option<O>,
}

/// Ordered result of rendering a block sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Traversal<O> {
    /// One unit per descriptor, in input order.
    pub units: Vec<RenderedUnit<O>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<O> Traversal<O> {
    /// Produced outputs in order, skipping empty units.
    pub fn outputs(&self) -> impl Iterator<Item = &O> {
        self.units.iter().filter_map(|unit| unit.output.as_ref())
    }

    pub fn rendered_count(&self) -> usize {
        self.outputs().count()
    }
}

/// Dispatch every descriptor in order. Never exits early.
pub fn render_blocks<R>(renderer: &mut R, blocks: &[BlockDescriptor]) -> Traversal<R::Output>
where
    R: BlockRenderer + ?Sized,
{
    let mut units = Vec::with_capacity(blocks.len());
    let mut diagnostics = Vec::new();

    for descriptor in blocks {
        let Dispatched { output, diagnostic } = dispatch(renderer, descriptor);
        diagnostics.extend(diagnostic);
        units.push(RenderedUnit {
            id: descriptor.id.clone(),
            output,
        });
    }

    Traversal { units, diagnostics }
}

impl PageModel {
    /// Render this page's blocks with `renderer`.
    pub fn render_with<R>(&self, renderer: &mut R) -> Traversal<R::Output>
    where
        R: BlockRenderer + ?Sized,
    {
        render_blocks(renderer, &self.blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlockType, PricingPlan};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Records every call as a short string.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Recorder {
        fn record(&mut self, call: String) -> String {
            self.calls.push(call.clone());
            call
        }
    }

    impl BlockRenderer for Recorder {
        type Output = String;

        fn hero(&mut self, block: &HeroBlock) -> String {
            self.record(format!("Hero(title:{:?})", block.title))
        }
        fn section_title(&mut self, block: &SectionTitleBlock) -> String {
            self.record(format!("SectionTitle(title:{:?})", block.title))
        }
        fn feature_rows(&mut self, block: &FeatureRowsBlock) -> String {
            self.record(format!("FeatureRows({})", block.features.len()))
        }
        fn parallax_content(&mut self, block: &ParallaxContentBlock) -> String {
            self.record(format!("ParallaxContent(title:{:?})", block.title))
        }
        fn content_section(&mut self, block: &ContentSectionBlock) -> String {
            self.record(format!("ContentSection(title:{:?})", block.title))
        }
        fn pricing(&mut self, block: &PricingBlock) -> String {
            self.record(format!("Pricing({})", block.plans.len()))
        }
        fn cta(&mut self, block: &CtaBlock) -> String {
            self.record(format!("CTA(title:{:?})", block.title))
        }
        fn footer(&mut self, block: &FooterBlock) -> String {
            self.record(format!("Footer(copyright:{:?})", block.copyright))
        }
    }

    /// Hands back the plans it was given.
    struct PlanCapture;

    impl BlockRenderer for PlanCapture {
        type Output = Vec<PricingPlan>;

        fn hero(&mut self, _: &HeroBlock) -> Vec<PricingPlan> {
            Vec::new()
        }
        fn section_title(&mut self, _: &SectionTitleBlock) -> Vec<PricingPlan> {
            Vec::new()
        }
        fn feature_rows(&mut self, _: &FeatureRowsBlock) -> Vec<PricingPlan> {
            Vec::new()
        }
        fn parallax_content(&mut self, _: &ParallaxContentBlock) -> Vec<PricingPlan> {
            Vec::new()
        }
        fn content_section(&mut self, _: &ContentSectionBlock) -> Vec<PricingPlan> {
            Vec::new()
        }
        fn pricing(&mut self, block: &PricingBlock) -> Vec<PricingPlan> {
            block.plans.clone()
        }
        fn cta(&mut self, _: &CtaBlock) -> Vec<PricingPlan> {
            Vec::new()
        }
        fn footer(&mut self, _: &FooterBlock) -> Vec<PricingPlan> {
            Vec::new()
        }
    }

    fn page(value: serde_json::Value) -> PageModel {
        serde_json::from_value(value).expect("page model")
    }

    #[test]
    fn unknown_block_is_skipped_and_siblings_render() {
        let page = page(json!({
            "title": "t",
            "description": "d",
            "blocks": [
                {"id": "a", "type": "Hero", "props": {"title": "X"}},
                {"id": "b", "type": "Bogus", "props": {}},
                {"id": "c", "type": "Footer", "props": {"copyright": "Y"}}
            ]
        }));

        let traversal = page.render_with(&mut Recorder::default());

        let outputs: Vec<_> = traversal
            .units
            .iter()
            .map(|unit| (unit.id.as_str(), unit.output.as_deref()))
            .collect();
        assert_eq!(
            outputs,
            vec![
                ("a", Some("Hero(title:\"X\")")),
                ("b", None),
                ("c", Some("Footer(copyright:\"Y\")")),
            ]
        );
        assert_eq!(
            traversal.diagnostics,
            vec![Diagnostic::UnknownBlockType {
                id: "b".into(),
                type_name: "Bogus".into(),
            }]
        );
    }

    #[test]
    fn block_without_usable_type_is_skipped_and_siblings_render() {
        let page = page(json!({
            "blocks": [
                {"id": "a", "type": "Hero", "props": {"title": "X"}},
                {"id": "b", "props": {}},
                {"id": 7, "type": 42},
                {"id": "c", "type": "Footer", "props": {"copyright": "Y"}}
            ]
        }));

        let mut recorder = Recorder::default();
        let traversal = page.render_with(&mut recorder);

        assert_eq!(
            recorder.calls,
            vec!["Hero(title:\"X\")", "Footer(copyright:\"Y\")"]
        );
        assert_eq!(traversal.units.len(), 4);
        assert_eq!(traversal.rendered_count(), 2);
        assert_eq!(
            traversal.diagnostics,
            vec![
                Diagnostic::UnknownBlockType {
                    id: "b".into(),
                    type_name: "undefined".into(),
                },
                Diagnostic::UnknownBlockType {
                    id: "7".into(),
                    type_name: "42".into(),
                },
            ]
        );
    }

    #[test]
    fn empty_page_yields_nothing() {
        let traversal = PageModel::default().render_with(&mut Recorder::default());
        assert!(traversal.units.is_empty());
        assert!(traversal.diagnostics.is_empty());
    }

    #[test]
    fn each_pricing_block_gets_its_own_plans() {
        let plans_a = json!([
            {"name": "INDIVIDUAL", "price": "$497", "features": ["1 Property Listing"], "ctaText": "GET STARTED", "ctaLink": "/a"},
            {"name": "10-PACK", "price": "$397", "features": [], "ctaText": "GET STARTED", "ctaLink": "/b", "highlight": true},
            {"name": "ENTERPRISE", "price": "LET'S TALK", "features": ["Custom Services"], "ctaText": "TALK TO SALES", "ctaLink": "/c"}
        ]);
        let plans_b = json!([
            {"name": "one", "price": "1", "features": ["x"], "ctaText": "go", "ctaLink": "/1"},
            {"name": "two", "price": "2", "features": ["y", "z"], "ctaText": "go", "ctaLink": "/2"},
            {"name": "three", "price": "3", "features": [], "ctaText": "go", "ctaLink": "/3"}
        ]);
        let page = page(json!({
            "blocks": [
                {"id": "p1", "type": "Pricing", "props": {"title": "A", "plans": plans_a}},
                {"id": "p2", "type": "Pricing", "props": {"title": "B", "plans": plans_b}}
            ]
        }));

        let traversal = page.render_with(&mut PlanCapture);

        let expected_a: Vec<PricingPlan> = serde_json::from_value(plans_a).expect("plans");
        let expected_b: Vec<PricingPlan> = serde_json::from_value(plans_b).expect("plans");
        let outputs: Vec<_> = traversal.outputs().cloned().collect();
        assert_eq!(outputs, vec![expected_a, expected_b]);
        assert_eq!(outputs[0].len(), 3);
        assert!(outputs[0][1].highlight);
    }

    #[test]
    fn invocation_order_matches_block_order() {
        let blocks = vec![
            BlockDescriptor::new("f", FooterBlock::default()),
            BlockDescriptor::new("h", HeroBlock::default()),
            BlockDescriptor::new("c", CtaBlock::default()),
            BlockDescriptor::new("s", SectionTitleBlock::default()),
        ];
        let mut recorder = Recorder::default();

        render_blocks(&mut recorder, &blocks);

        let names: Vec<_> = recorder
            .calls
            .iter()
            .map(|call| call.split('(').next().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["Footer", "Hero", "CTA", "SectionTitle"]);
    }

    #[test]
    fn placeholder_renders_nothing_without_diagnostic() {
        let blocks = vec![BlockDescriptor::placeholder("x")];
        let mut recorder = Recorder::default();

        let traversal = render_blocks(&mut recorder, &blocks);

        assert_eq!(traversal.units.len(), 1);
        assert_eq!(traversal.units[0].output, None);
        assert!(traversal.diagnostics.is_empty());
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn invalid_props_are_skipped_with_one_diagnostic() {
        let page = page(json!({
            "blocks": [
                {"id": "p", "type": "Pricing", "props": {"plans": 3}},
                {"id": "f", "type": "Footer", "props": {"copyright": "Y"}}
            ]
        }));

        let traversal = page.render_with(&mut Recorder::default());

        assert_eq!(traversal.rendered_count(), 1);
        assert_eq!(traversal.diagnostics.len(), 1);
        assert!(matches!(
            &traversal.diagnostics[0],
            Diagnostic::InvalidProps { id, block_type: BlockType::Pricing, .. } if id == "p"
        ));
    }

    #[test]
    fn rendering_twice_gives_identical_results() {
        let page = page(json!({
            "blocks": [
                {"id": "a", "type": "Hero", "props": {"title": "X"}},
                {"id": "b", "type": "Nope"},
                {"id": "c", "type": "CTA", "props": {"title": "Go"}}
            ]
        }));

        let first = page.render_with(&mut Recorder::default());
        let second = page.render_with(&mut Recorder::default());
        assert_eq!(first, second);
    }

    #[test]
    fn every_renderable_variant_reaches_its_method() {
        let blocks: Vec<BlockDescriptor> = BlockType::ALL
            .into_iter()
            .filter(|kind| !kind.is_inert())
            .map(|kind| {
                serde_json::from_value(json!({"id": kind.as_str(), "type": kind.as_str()}))
                    .expect("descriptor")
            })
            .collect();
        let mut recorder = Recorder::default();

        let traversal = render_blocks(&mut recorder, &blocks);

        assert_eq!(traversal.rendered_count(), 8);
        assert!(traversal.diagnostics.is_empty());
        for (unit, call) in traversal.units.iter().zip(&recorder.calls) {
            assert!(call.starts_with(&unit.id), "{} dispatched to {}", unit.id, call);
        }
    }
}
