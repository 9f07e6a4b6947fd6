//! Configuration file support for landio.
//!
//! Loads optional `.landio/config.toml` from the working directory.
//! Command-line flags win over anything set here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use landio_blocks::RenderOptions;
use landio_blocks::styles::closes_style_element;
use serde::Deserialize;
use tracing::warn;

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct LandioConfig {
    /// Page model JSON used when `--page` is not given.
    pub page: Option<PathBuf>,
    /// Output file used when `--out` is not given.
    pub output: Option<PathBuf>,
    /// Refuse to render pages that contain unknown or unreadable blocks.
    pub strict: bool,
    pub render: RenderConfig,
}

/// Document shell settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub lang: String,
    pub cursor_light: bool,
    /// Stylesheet appended after the built-in CSS.
    pub extra_css: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            cursor_light: true,
            extra_css: None,
        }
    }
}

impl LandioConfig {
    /// Load config from `.landio/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".landio").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Render options from the `[render]` table. Reads the extra stylesheet
    /// and refuses one that would close the inline `<style>` element.
    pub fn render_options(&self) -> Result<RenderOptions> {
        let extra_css = match &self.render.extra_css {
            Some(path) => {
                let css = std::fs::read_to_string(path)
                    .with_context(|| format!("reading stylesheet {}", path.display()))?;
                if closes_style_element(&css) {
                    bail!("stylesheet {} contains `</style`", path.display());
                }
                Some(css)
            }
            None => None,
        };

        Ok(RenderOptions {
            lang: self.render.lang.clone(),
            cursor_light: self.render.cursor_light,
            extra_css,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(root: &Path, body: &str) {
        let dir = root.join(".landio");
        std::fs::create_dir_all(&dir).expect("create .landio");
        let mut file = std::fs::File::create(dir.join("config.toml")).expect("create config");
        writeln!(file, "{}", body).expect("write config");
    }

    #[test]
    fn test_default_config() {
        let config = LandioConfig::default();
        assert!(config.page.is_none());
        assert!(config.output.is_none());
        assert!(!config.strict);
        assert_eq!(config.render.lang, "en");
        assert!(config.render.cursor_light);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = LandioConfig::load(temp.path());
        assert!(!config.strict);
        assert!(config.page.is_none());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            temp.path(),
            r#"
page = "content/page.json"
output = "dist/index.html"
strict = true

[render]
lang = "pl"
cursor_light = false
"#,
        );

        let config = LandioConfig::load(temp.path());
        assert_eq!(config.page, Some(PathBuf::from("content/page.json")));
        assert_eq!(config.output, Some(PathBuf::from("dist/index.html")));
        assert!(config.strict);
        assert_eq!(config.render.lang, "pl");
        assert!(!config.render.cursor_light);
    }

    #[test]
    fn test_partial_render_table_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        write_config(temp.path(), "[render]\nlang = \"de\"\n");

        let config = LandioConfig::load(temp.path());
        assert_eq!(config.render.lang, "de");
        assert!(config.render.cursor_light);
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        write_config(temp.path(), "strict = \"very\"\n[[[");

        let config = LandioConfig::load(temp.path());
        assert!(!config.strict);
    }

    #[test]
    fn test_render_options_reads_extra_css() {
        let temp = TempDir::new().expect("temp dir");
        let css_path = temp.path().join("extra.css");
        std::fs::write(&css_path, ".hero-title { color: teal; }").expect("write css");

        let config = LandioConfig {
            render: RenderConfig {
                extra_css: Some(css_path),
                ..Default::default()
            },
            ..Default::default()
        };

        let options = config.render_options().expect("options");
        assert_eq!(
            options.extra_css.as_deref(),
            Some(".hero-title { color: teal; }")
        );
        assert_eq!(options.lang, "en");
    }

    #[test]
    fn test_render_options_rejects_style_terminator() {
        let temp = TempDir::new().expect("temp dir");
        let css_path = temp.path().join("evil.css");
        std::fs::write(&css_path, "a{}</style><script>alert(1)</script>").expect("write css");

        let config = LandioConfig {
            render: RenderConfig {
                extra_css: Some(css_path),
                ..Default::default()
            },
            ..Default::default()
        };

        let err = config.render_options().expect_err("should fail");
        assert!(format!("{:#}", err).contains("evil.css"));
    }

    #[test]
    fn test_render_options_keeps_child_combinators() {
        let temp = TempDir::new().expect("temp dir");
        let css_path = temp.path().join("extra.css");
        std::fs::write(&css_path, ".a > .b { color: red; }").expect("write css");

        let config = LandioConfig {
            render: RenderConfig {
                extra_css: Some(css_path),
                ..Default::default()
            },
            ..Default::default()
        };

        let options = config.render_options().expect("options");
        assert_eq!(options.extra_css.as_deref(), Some(".a > .b { color: red; }"));
    }

    #[test]
    fn test_render_options_missing_css_is_an_error() {
        let config = LandioConfig {
            render: RenderConfig {
                extra_css: Some(PathBuf::from("/definitely/not/here.css")),
                ..Default::default()
            },
            ..Default::default()
        };

        let err = config.render_options().expect_err("should fail");
        assert!(format!("{:#}", err).contains("here.css"));
    }
}
