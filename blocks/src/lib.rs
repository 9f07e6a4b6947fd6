//! # landio-blocks
//!
//! Block-based landing page model with a Leptos SSR renderer.
//!
//! A page is an ordered list of typed blocks drawn from a closed vocabulary
//! (hero, section title, feature rows, parallax and featured content,
//! pricing, call to action, footer, plus an inert placeholder). Each block is
//! dispatched to its renderer in order and the results are stitched into one
//! static HTML document.
//!
//! ## Features
//!
//! - **Closed vocabulary** - adding a block variant is a compile-time change
//! - **Fail-open dispatch** - an unknown or unreadable block is skipped with a
//!   diagnostic; the rest of the page still renders
//! - **Typed props** - each variant reads its own payload with its own defaults
//! - **Zero JavaScript runtime** - pure SSR, no hydration needed
//!
//! ## Quick Start
//!
//! ```rust
//! use landio_blocks::{render_page, RenderOptions};
//! use landio_blocks::types::PageModel;
//!
//! let page = PageModel::from_json_str(r#"{
//!     "title": "LANDIO",
//!     "description": "Flat-fee property marketing.",
//!     "blocks": [
//!         {"id": "hero-1", "type": "Hero", "props": {"title": "GET ON THE MAP"}},
//!         {"id": "footer-1", "type": "Footer", "props": {"copyright": "LANDIO"}}
//!     ]
//! }"#).unwrap();
//!
//! let rendered = render_page(&page, &RenderOptions::default());
//! assert!(rendered.html.starts_with("<!DOCTYPE html>"));
//! assert!(rendered.diagnostics.is_empty());
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - page model and per-variant payloads
//! - [`dispatch`] - the block registry trait, dispatcher and traversal
//! - [`components`] - Leptos components and [`components::HtmlRenderer`]
//! - [`outline`] - plain-text renderer
//! - [`styles`] - design tokens and CSS
//! - [`error`] - load errors and per-block diagnostics

pub mod components;
pub mod dispatch;
pub mod error;
pub mod outline;
pub mod styles;
pub mod types;

use components::{HtmlRenderer, LandingDocument};
use dispatch::Traversal;
use error::Diagnostic;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::PageModel;

/// Document-level rendering settings.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Value of `<html lang>`.
    pub lang: String,
    /// Draw the fixed background glow.
    pub cursor_light: bool,
    /// Appended verbatim after the built-in stylesheet. Must not contain
    /// `</style`; see [`styles::closes_style_element`].
    pub extra_css: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            cursor_light: true,
            extra_css: None,
        }
    }
}

/// A rendered document plus whatever was skipped on the way.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    /// Complete HTML document, including `<!DOCTYPE html>`.
    pub html: String,
    /// One entry per skipped block, in page order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Render a page model to a complete HTML document.
///
/// Blocks are dispatched in order; unknown or unreadable blocks are left out
/// of the markup and reported in [`RenderedPage::diagnostics`]. The same page
/// and options always produce the same HTML.
pub fn render_page(page: &PageModel, options: &RenderOptions) -> RenderedPage {
    let Traversal { units, diagnostics } = page.render_with(&mut HtmlRenderer);

    let doc = view! {
        <LandingDocument
            title=page.title.clone()
            description=page.description.clone()
            lang=options.lang.clone()
            cursor_light=options.cursor_light
            extra_css=options.extra_css.clone()
            units=units
        />
    };

    // Leptos doesn't include DOCTYPE, so we add it
    let html = format!("<!DOCTYPE html>\n{}", doc.to_html());

    RenderedPage { html, diagnostics }
}
