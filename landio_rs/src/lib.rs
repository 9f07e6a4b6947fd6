//! # landio
//!
//! Command-line front end for [`landio_blocks`]: loads a page model (or the
//! built-in LANDIO page), applies `.landio/config.toml`, and renders static
//! HTML.
//!
//! ```bash
//! landio render --out index.html       # built-in page to a file
//! landio render --page page.json       # custom page to stdout
//! landio check --page page.json        # report skipped blocks and id clashes
//! landio outline                       # one line per block
//! landio blocks                        # the block vocabulary
//! ```
//!
//! ## Library Usage
//!
//! ```rust
//! use landio::content::default_page;
//! use landio_blocks::{render_page, RenderOptions};
//!
//! let rendered = render_page(&default_page(), &RenderOptions::default());
//! assert!(rendered.diagnostics.is_empty());
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
