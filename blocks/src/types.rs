//! Page data types: the closed block vocabulary and its typed payloads.
//!
//! A page is an ordered list of [`BlockDescriptor`]s. On the wire each one is
//! `{ "id", "type", "props" }`, with `props` shaped by `type`. Reading a page
//! never fails because of a single block:
//!
//! - a `type` outside [`BlockType::ALL`], missing or not a string, becomes
//!   [`Block::Unknown`]
//! - a known `type` whose `props` cannot be read becomes [`Block::Invalid`]
//!
//! Both are kept in place so the dispatcher can skip them and report a
//! diagnostic while their siblings render normally.
//!
//! Every payload applies its own defaults; an absent optional field means the
//! feature is off (no subtitle, no CTA button, no image).
//!
//! # Example
//!
//! ```rust
//! use landio_blocks::types::{BlockDescriptor, FooterBlock, HeroBlock, PageModel};
//!
//! let page = PageModel::new(
//!     "LANDIO",
//!     "Flat-fee property marketing.",
//!     vec![
//!         BlockDescriptor::new("hero-1", HeroBlock {
//!             title: "GET YOUR PROPERTIES ON THE MAP".into(),
//!             ..Default::default()
//!         }),
//!         BlockDescriptor::new("footer-1", FooterBlock {
//!             copyright: "(c) 2024 LANDIO".into(),
//!         }),
//!     ],
//! );
//! assert_eq!(page.blocks.len(), 2);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Diagnostic, PageError};

/// The closed set of block variants a page may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    Hero,
    SectionTitle,
    FeatureRows,
    ParallaxContent,
    ContentSection,
    Pricing,
    /// Inert placeholder: resolves, renders nothing.
    Content,
    #[serde(rename = "CTA")]
    Cta,
    Footer,
}

impl BlockType {
    /// Every variant, in declaration order.
    pub const ALL: [BlockType; 9] = [
        BlockType::Hero,
        BlockType::SectionTitle,
        BlockType::FeatureRows,
        BlockType::ParallaxContent,
        BlockType::ContentSection,
        BlockType::Pricing,
        BlockType::Content,
        BlockType::Cta,
        BlockType::Footer,
    ];

    /// The discriminant as it appears in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Hero => "Hero",
            BlockType::SectionTitle => "SectionTitle",
            BlockType::FeatureRows => "FeatureRows",
            BlockType::ParallaxContent => "ParallaxContent",
            BlockType::ContentSection => "ContentSection",
            BlockType::Pricing => "Pricing",
            BlockType::Content => "Content",
            BlockType::Cta => "CTA",
            BlockType::Footer => "Footer",
        }
    }

    /// Exact, case-sensitive lookup of a wire discriminant.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// True for variants that resolve but never produce output.
    pub fn is_inert(self) -> bool {
        matches!(self, BlockType::Content)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal text alignment for section titles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// Which side of the section the text panel sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Left,
    Right,
}

/// Layout of a [`ContentSectionBlock`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentVariant {
    /// Full-bleed background image behind a glass text panel.
    Parallax,
    /// Text beside a framed image.
    #[default]
    Featured,
}

/// An optional text field that is switched on: present and not empty.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

fn non_empty_str(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

/// Opening section: headline, tagline, logo and primary call to action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroBlock {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Rendered one paragraph per `\n`-separated line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_url: Option<String>,
}

impl HeroBlock {
    /// Description split into display lines.
    pub fn description_lines(&self) -> Vec<&str> {
        non_empty_str(&self.description)
            .map(|text| text.split('\n').collect())
            .unwrap_or_default()
    }

    /// The call to action, only when both label and target are non-empty.
    pub fn cta(&self) -> Option<(&str, &str)> {
        non_empty_str(&self.cta_text).zip(non_empty_str(&self.cta_link))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionTitleBlock {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub align: Align,
}

/// One row of a [`FeatureRowsBlock`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureRowItem {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
}

/// Alternating text/image rows under an optional heading.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureRowsBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub features: Vec<FeatureRowItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParallaxContentBlock {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub orientation: Orientation,
}

/// Default for [`ContentSectionBlock::image_brightness`].
pub const DEFAULT_IMAGE_BRIGHTNESS: f64 = 80.0;

/// Image + text section in either the parallax or the featured layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentSectionBlock {
    pub variant: ContentVariant,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    pub orientation: Orientation,
    /// Percentage the image overflows its frame on every side.
    pub image_bleed: f64,
    /// CSS vertical position (`"center"`, `"top"`, `"60%"`, ...).
    pub image_position_y: String,
    /// 0 (dark) to 100 (full brightness).
    pub image_brightness: f64,
}

impl Default for ContentSectionBlock {
    fn default() -> Self {
        Self {
            variant: ContentVariant::default(),
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            image_alt: None,
            orientation: Orientation::default(),
            image_bleed: 0.0,
            image_position_y: "center".into(),
            image_brightness: DEFAULT_IMAGE_BRIGHTNESS,
        }
    }
}

impl ContentSectionBlock {
    /// Brightness clamped to `0..=100`; NaN falls back to the default.
    pub fn brightness(&self) -> f64 {
        if self.image_brightness.is_nan() {
            DEFAULT_IMAGE_BRIGHTNESS
        } else {
            self.image_brightness.clamp(0.0, 100.0)
        }
    }

    /// Bleed percentage, never negative.
    pub fn bleed(&self) -> f64 {
        if self.image_bleed.is_nan() {
            0.0
        } else {
            self.image_bleed.max(0.0)
        }
    }

    /// Background scale needed so a bled parallax image still covers the frame.
    pub fn parallax_scale(&self) -> f64 {
        1.0 + (self.bleed() / 100.0) * 2.0
    }

    /// Opacity of the black overlay over a parallax background.
    pub fn overlay_opacity(&self) -> f64 {
        (100.0 - self.brightness()) / 100.0
    }

    /// Opacity of the framed image in the featured layout.
    pub fn image_opacity(&self) -> f64 {
        self.brightness() / 100.0
    }

    /// Inline style for the featured image wrapper.
    pub fn bleed_style(&self) -> String {
        let bleed = self.bleed();
        if bleed > 0.0 {
            let size = 100.0 + bleed * 2.0;
            format!("inset:-{bleed}%;width:{size}%;height:{size}%")
        } else {
            "inset:0".to_string()
        }
    }

    pub fn alt_text(&self) -> &str {
        non_empty_str(&self.image_alt).unwrap_or(&self.title)
    }
}

/// One pricing tier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub features: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
    pub highlight: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingBlock {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub plans: Vec<PricingPlan>,
}

/// Closing call to action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaBlock {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterBlock {
    pub copyright: String,
}

/// A block resolved against the closed variant set.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Hero(HeroBlock),
    SectionTitle(SectionTitleBlock),
    FeatureRows(FeatureRowsBlock),
    ParallaxContent(ParallaxContentBlock),
    ContentSection(ContentSectionBlock),
    Pricing(PricingBlock),
    Content,
    Cta(CtaBlock),
    Footer(FooterBlock),
    /// `type` is not part of the vocabulary.
    Unknown { type_name: String, props: Value },
    /// `type` is known but `props` does not fit its payload.
    Invalid {
        kind: BlockType,
        props: Value,
        reason: String,
    },
}

impl Block {
    /// Variant for a resolved block; `None` for [`Block::Unknown`].
    pub fn kind(&self) -> Option<BlockType> {
        match self {
            Block::Hero(_) => Some(BlockType::Hero),
            Block::SectionTitle(_) => Some(BlockType::SectionTitle),
            Block::FeatureRows(_) => Some(BlockType::FeatureRows),
            Block::ParallaxContent(_) => Some(BlockType::ParallaxContent),
            Block::ContentSection(_) => Some(BlockType::ContentSection),
            Block::Pricing(_) => Some(BlockType::Pricing),
            Block::Content => Some(BlockType::Content),
            Block::Cta(_) => Some(BlockType::Cta),
            Block::Footer(_) => Some(BlockType::Footer),
            Block::Unknown { .. } => None,
            Block::Invalid { kind, .. } => Some(*kind),
        }
    }

    /// The `type` string this block was read from (or would be written as).
    pub fn type_name(&self) -> &str {
        match self {
            Block::Unknown { type_name, .. } => type_name,
            other => other.kind().map(BlockType::as_str).unwrap_or_default(),
        }
    }

    fn from_props(kind: BlockType, props: Value) -> Self {
        let parsed = match kind {
            BlockType::Hero => read(&props).map(Block::Hero),
            BlockType::SectionTitle => read(&props).map(Block::SectionTitle),
            BlockType::FeatureRows => read(&props).map(Block::FeatureRows),
            BlockType::ParallaxContent => read(&props).map(Block::ParallaxContent),
            BlockType::ContentSection => read(&props).map(Block::ContentSection),
            BlockType::Pricing => read(&props).map(Block::Pricing),
            BlockType::Content => Ok(Block::Content),
            BlockType::Cta => read(&props).map(Block::Cta),
            BlockType::Footer => read(&props).map(Block::Footer),
        };
        parsed.unwrap_or_else(|err| Block::Invalid {
            kind,
            props,
            reason: err.to_string(),
        })
    }

    fn to_props(&self) -> Value {
        let value = match self {
            Block::Hero(b) => serde_json::to_value(b),
            Block::SectionTitle(b) => serde_json::to_value(b),
            Block::FeatureRows(b) => serde_json::to_value(b),
            Block::ParallaxContent(b) => serde_json::to_value(b),
            Block::ContentSection(b) => serde_json::to_value(b),
            Block::Pricing(b) => serde_json::to_value(b),
            Block::Cta(b) => serde_json::to_value(b),
            Block::Footer(b) => serde_json::to_value(b),
            Block::Content => Ok(Value::Object(Map::new())),
            Block::Unknown { props, .. } | Block::Invalid { props, .. } => Ok(props.clone()),
        };
        value.unwrap_or_default()
    }
}

fn read<T: DeserializeOwned>(props: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(props)
}

macro_rules! block_from_payload {
    ($($payload:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$payload> for Block {
                fn from(payload: $payload) -> Self {
                    Block::$variant(payload)
                }
            }
        )*
    };
}

block_from_payload! {
    HeroBlock => Hero,
    SectionTitleBlock => SectionTitle,
    FeatureRowsBlock => FeatureRows,
    ParallaxContentBlock => ParallaxContent,
    ContentSectionBlock => ContentSection,
    PricingBlock => Pricing,
    CtaBlock => Cta,
    FooterBlock => Footer,
}

/// `type` value reported for a descriptor that has none.
pub const MISSING_TYPE: &str = "undefined";

/// Wire shape of a block. Read from any JSON value so that one malformed
/// entry cannot fail the whole page.
#[derive(Serialize, Deserialize)]
#[serde(from = "Value")]
struct WireBlock {
    id: Value,
    #[serde(rename = "type")]
    type_name: Value,
    props: Value,
}

impl From<Value> for WireBlock {
    fn from(value: Value) -> Self {
        let mut fields = match value {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        WireBlock {
            id: fields.remove("id").unwrap_or_default(),
            type_name: fields.remove("type").unwrap_or_default(),
            props: fields.remove("props").unwrap_or_default(),
        }
    }
}

/// String fields pass through; `null` becomes `missing`; anything else is
/// kept as its JSON text.
fn wire_text(value: Value, missing: &str) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => missing.to_string(),
        other => other.to_string(),
    }
}

/// One content unit on the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireBlock", into = "WireBlock")]
pub struct BlockDescriptor {
    /// Key for the rendered unit. Expected unique within a page; not enforced.
    pub id: String,
    pub block: Block,
}

impl BlockDescriptor {
    pub fn new(id: impl Into<String>, block: impl Into<Block>) -> Self {
        Self {
            id: id.into(),
            block: block.into(),
        }
    }

    /// Inert placeholder block.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self::new(id, Block::Content)
    }

    /// Diagnostic the dispatcher reports for this block, if any.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match &self.block {
            Block::Unknown { type_name, .. } => Some(Diagnostic::UnknownBlockType {
                id: self.id.clone(),
                type_name: type_name.clone(),
            }),
            Block::Invalid { kind, reason, .. } => Some(Diagnostic::InvalidProps {
                id: self.id.clone(),
                block_type: *kind,
                reason: reason.clone(),
            }),
            _ => None,
        }
    }
}

impl From<WireBlock> for BlockDescriptor {
    fn from(wire: WireBlock) -> Self {
        let props = match wire.props {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        let type_name = wire_text(wire.type_name, MISSING_TYPE);
        let block = match BlockType::parse(&type_name) {
            Some(kind) => Block::from_props(kind, props),
            None => Block::Unknown { type_name, props },
        };
        Self {
            id: wire_text(wire.id, ""),
            block,
        }
    }
}

impl From<BlockDescriptor> for WireBlock {
    fn from(descriptor: BlockDescriptor) -> Self {
        WireBlock {
            type_name: Value::String(descriptor.block.type_name().to_string()),
            props: descriptor.block.to_props(),
            id: Value::String(descriptor.id),
        }
    }
}

/// A complete page: metadata plus blocks in top-to-bottom order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageModel {
    /// Document title (goes to `<title>`, not into the block flow).
    pub title: String,
    /// Meta description.
    pub description: String,
    pub blocks: Vec<BlockDescriptor>,
}

impl PageModel {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        blocks: Vec<BlockDescriptor>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            blocks,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a page model from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, PageError> {
        let content = std::fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String, PageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Diagnostics rendering this page would produce, without rendering it.
    pub fn validate(&self) -> Vec<Diagnostic> {
        self.blocks
            .iter()
            .filter_map(BlockDescriptor::diagnostic)
            .collect()
    }

    /// Ids used by more than one block, each listed once, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for descriptor in &self.blocks {
            let id = descriptor.id.as_str();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id);
            }
        }
        duplicates
    }
}
