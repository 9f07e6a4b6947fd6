//! Subcommand implementations.
//!
//! Command output goes to stdout; logs go to stderr.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use landio_blocks::dispatch::RenderedUnit;
use landio_blocks::outline::OutlineRenderer;
use landio_blocks::render_page;
use landio_blocks::types::{BlockType, PageModel};
use serde_json::json;
use tracing::{debug, error, info};

use crate::cli::{CheckArgs, Cli, Command, PageArgs, RenderArgs};
use crate::config::LandioConfig;
use crate::content::default_page;

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => LandioConfig::load_from_path(path),
        None => LandioConfig::load(Path::new(".")),
    };
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Render(args) => render(&config, args),
        Command::Check(args) => check(&config, &args),
        Command::Outline(args) => outline(&config, &args),
        Command::Blocks => blocks(),
        Command::DefaultPage => print_default_page(),
    }
}

/// `--page`, then `page` from config, then the built-in page.
fn load_page(args: &PageArgs, config: &LandioConfig) -> Result<PageModel> {
    match args.page.as_deref().or(config.page.as_deref()) {
        Some(path) => {
            let page = PageModel::from_path(path)
                .with_context(|| format!("loading page model {}", path.display()))?;
            info!(path = %path.display(), blocks = page.blocks.len(), "page model loaded");
            Ok(page)
        }
        None => {
            debug!("no page model given, using built-in content");
            Ok(default_page())
        }
    }
}

fn render(config: &LandioConfig, args: RenderArgs) -> Result<ExitCode> {
    let page = load_page(&args.source, config)?;

    if args.strict || config.strict {
        let diagnostics = page.validate();
        if !diagnostics.is_empty() {
            for diagnostic in &diagnostics {
                error!("{diagnostic}");
            }
            bail!(
                "strict mode: {} block(s) cannot be rendered",
                diagnostics.len()
            );
        }
    }

    let mut options = config.render_options()?;
    if args.no_cursor_light {
        options.cursor_light = false;
    }

    let rendered = render_page(&page, &options);
    if !rendered.diagnostics.is_empty() {
        info!(
            skipped = rendered.diagnostics.len(),
            "rendered with skipped blocks"
        );
    }

    let mut stdout = std::io::stdout().lock();
    match args.out.or_else(|| config.output.clone()) {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(&path, &rendered.html)
                .with_context(|| format!("writing {}", path.display()))?;
            writeln!(stdout, "Page written to: {}", path.display())?;
            writeln!(stdout, "HTML size: {} bytes", rendered.html.len())?;
        }
        None => stdout.write_all(rendered.html.as_bytes())?,
    }

    Ok(ExitCode::SUCCESS)
}

fn check(config: &LandioConfig, args: &CheckArgs) -> Result<ExitCode> {
    let page = load_page(&args.source, config)?;
    let diagnostics = page.validate();
    let duplicates = page.duplicate_ids();
    let clean = diagnostics.is_empty() && duplicates.is_empty();

    let mut stdout = std::io::stdout().lock();
    if args.json {
        let report = json!({
            "blocks": page.blocks.len(),
            "diagnostics": diagnostics,
            "duplicate_ids": duplicates,
        });
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        for diagnostic in &diagnostics {
            writeln!(stdout, "warn: {diagnostic}")?;
        }
        for id in &duplicates {
            writeln!(stdout, "warn: block id \"{id}\" is used more than once")?;
        }
        if clean {
            writeln!(stdout, "ok: {} blocks, no issues", page.blocks.len())?;
        }
    }

    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn outline(config: &LandioConfig, args: &PageArgs) -> Result<ExitCode> {
    let page = load_page(args, config)?;
    let traversal = page.render_with(&mut OutlineRenderer);
    let width = page
        .blocks
        .iter()
        .map(|block| block.id.len())
        .max()
        .unwrap_or_default();

    let mut stdout = std::io::stdout().lock();
    for (index, RenderedUnit { id, output }) in traversal.units.iter().enumerate() {
        let line = output.as_deref().unwrap_or("(skipped)");
        writeln!(stdout, "{:>3}. {:<width$}  {}", index + 1, id, line)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn blocks() -> Result<ExitCode> {
    let mut stdout = std::io::stdout().lock();
    for kind in BlockType::ALL {
        if kind.is_inert() {
            writeln!(stdout, "{kind} (placeholder, renders nothing)")?;
        } else {
            writeln!(stdout, "{kind}")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_default_page() -> Result<ExitCode> {
    let json = default_page().to_json_pretty()?;
    writeln!(std::io::stdout().lock(), "{json}")?;
    Ok(ExitCode::SUCCESS)
}
