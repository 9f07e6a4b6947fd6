//! Design tokens and the page stylesheet.
//!
//! The stylesheet is inlined into the document head, so the rendered page
//! is a single self-contained file. Dark theme, teal accent.
//!
//! # Customization
//!
//! Extra rules can be appended through
//! [`RenderOptions::extra_css`](crate::RenderOptions::extra_css):
//!
//! ```rust
//! use landio_blocks::RenderOptions;
//!
//! let options = RenderOptions {
//!     extra_css: Some(".hero-title { letter-spacing: 0; }".into()),
//!     ..Default::default()
//! };
//! assert!(options.cursor_light);
//! ```

/// Width shared by text panels in content sections.
pub const CONTENT_BOX_LARGE: &str = "482px";

/// Entrance animation delay between neighbouring pricing cards, in seconds.
pub const CARD_STAGGER_SECS: f64 = 0.1;

/// Background zoom for `ParallaxContent` blocks.
pub const PARALLAX_CONTENT_SCALE: f64 = 1.2;

/// Overlay opacity for `ParallaxContent` blocks.
pub const PARALLAX_CONTENT_OVERLAY: f64 = 0.4;

/// Join class fragments, dropping empty ones.
///
/// ```rust
/// use landio_blocks::styles::classes;
///
/// assert_eq!(classes(&["card", "", "highlight"]), "card highlight");
/// ```
pub fn classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when `css` would end the `<style>` element it is inlined into.
pub fn closes_style_element(css: &str) -> bool {
    css.to_ascii_lowercase().contains("</style")
}

/// Complete CSS for the landing page.
pub const LANDING_CSS: &str = r#"
:root {
    --bg: #000000;
    --bg-card: #0a0a0a;
    --bg-card-highlight: #001111;
    --border: #333333;
    --border-soft: rgba(255, 255, 255, 0.1);
    --text: #ffffff;
    --text-muted: #9ca3af;
    --text-dim: #6b7280;
    --accent: #14b8a6;
    --accent-light: #2dd4bf;
    --accent-soft: rgba(20, 184, 166, 0.3);
    --radius-lg: 16px;
    --radius-xl: 24px;
    --content-box: 482px;
    --card-width: 320px;
    --speed-fast: 0.3s;
    --speed-slow: 0.8s;
    --font: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, sans-serif;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
    line-height: 1.5;
    overflow-x: hidden;
}

::selection { background: var(--accent); color: var(--text); }

img { display: block; max-width: 100%; }

a { color: inherit; text-decoration: none; }

.page { position: relative; min-height: 100vh; }

.block { display: contents; }

.container {
    width: 100%;
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 16px;
    position: relative;
    z-index: 1;
}

/* Entrance animation */
@keyframes rise {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: none; }
}

@keyframes shimmer {
    from { transform: translateX(-100%); }
    to { transform: translateX(100%); }
}

.reveal { animation: rise 0.6s ease-out both; }
.delay-1 { animation-delay: 0.3s; }
.delay-2 { animation-delay: 0.6s; }
.delay-3 { animation-delay: 1s; }
.delay-4 { animation-delay: 1.4s; }

@media (prefers-reduced-motion: reduce) {
    .reveal, .shimmer { animation: none; }
    html { scroll-behavior: auto; }
}

/* Buttons */
.btn {
    position: relative;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    border-radius: 9999px;
    font-weight: 700;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    transition: all var(--speed-fast);
}

.btn-primary {
    height: 56px;
    padding: 0 32px;
    background: var(--accent);
    color: #000000;
    box-shadow: 0 0 20px var(--accent-soft);
}

.btn-primary:hover {
    background: var(--accent-light);
    box-shadow: 0 10px 40px rgba(20, 184, 166, 0.5);
    transform: scale(1.05);
}

.btn-large { height: 64px; padding: 0 40px; font-size: 18px; }

.btn-outline {
    background: transparent;
    border: 1px solid rgba(255, 255, 255, 0.2);
    color: var(--text);
}

.btn-outline:hover { border-color: var(--accent); color: var(--accent-light); }

.shimmer {
    position: absolute;
    inset: 0;
    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.4), transparent);
    transform: translateX(-100%);
}

.btn:hover .shimmer { animation: shimmer 2s infinite; }

.btn-label { position: relative; }

/* Shared typography */
.heading-xl {
    font-size: clamp(30px, 4vw, 48px);
    font-weight: 700;
    letter-spacing: -0.02em;
    line-height: 1.15;
}

.uppercase { text-transform: uppercase; }

.body-muted { color: var(--text-muted); font-size: 18px; line-height: 1.7; }

.body-light { color: #e5e7eb; font-size: 18px; line-height: 1.7; font-weight: 300; }

.accent-bar {
    width: 80px;
    height: 4px;
    margin: 24px 0 32px;
    border-radius: 9999px;
    background: var(--accent);
}

.glass-panel {
    width: 100%;
    max-width: var(--content-box);
    padding: 48px;
    border-radius: var(--radius-xl);
    border: 1px solid var(--border-soft);
    background: rgba(0, 0, 0, 0.3);
    backdrop-filter: blur(24px);
    box-shadow: 0 0 40px rgba(0, 0, 0, 0.3);
}

.glow {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 500px;
    height: 500px;
    transform: translate(-50%, -50%);
    border-radius: 9999px;
    background: rgba(20, 184, 166, 0.05);
    filter: blur(120px);
    pointer-events: none;
}

/* Cursor light */
.cursor-light {
    position: fixed;
    left: 50%;
    bottom: 15%;
    width: 1200px;
    height: 1200px;
    transform: translate(-50%, 50%);
    pointer-events: none;
    mix-blend-mode: screen;
    z-index: 0;
}

.cursor-light-glow {
    width: 100%;
    height: 100%;
    background: radial-gradient(circle, rgba(150, 180, 255, 0.15) 0%, rgba(150, 180, 255, 0.1) 25%, rgba(150, 180, 255, 0.08) 50%, transparent 75%);
}

/* Hero */
.hero {
    position: relative;
    min-height: 90vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 80px 16px;
    overflow: hidden;
    text-align: center;
}

.hero-backdrop { position: absolute; inset: 0; z-index: 0; }

.hero-photo {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
    opacity: 0.4;
    mix-blend-mode: overlay;
}

.hero-vignette {
    position: absolute;
    inset: 0;
    background: radial-gradient(circle at center, transparent, #000000 60%);
    opacity: 0.9;
}

.hero-content { max-width: 1024px; }

.hero-title {
    font-size: clamp(24px, 5vw, 48px);
    font-weight: 700;
    letter-spacing: -0.02em;
    line-height: 1.1;
    margin-bottom: 24px;
}

.hero-subtitle,
.hero-description {
    color: var(--text-muted);
    font-size: 16px;
    font-weight: 500;
    letter-spacing: 0.2em;
    text-transform: uppercase;
}

.hero-subtitle { margin-bottom: 32px; }

.hero-logo { margin: 32px auto 48px; width: min(800px, 80vw); }

.hero-logo img { width: 100%; filter: invert(1) brightness(2); }

.hero-description { max-width: 672px; margin: 0 auto 48px; }

.line-gap { margin-top: 8px; }

/* Section title */
.section-title { padding: 50px 0; }
.section-title.align-left { text-align: left; }
.section-title.align-center { text-align: center; }
.section-title.align-right { text-align: right; }

.section-heading {
    font-size: clamp(36px, 6vw, 72px);
    font-weight: 700;
    letter-spacing: 0.05em;
    text-transform: uppercase;
}

.section-subtitle {
    color: var(--text-muted);
    font-size: 18px;
    max-width: 672px;
    margin: 16px auto 0;
}

/* Framed media */
.media-frame {
    position: relative;
    width: 100%;
    aspect-ratio: 4 / 3;
    overflow: hidden;
    border-radius: var(--radius-lg);
    border: 1px solid var(--border);
    background: var(--bg-card);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    transition: transform 0.5s;
}

.media-frame:hover { transform: translateY(-8px); }

.media-bleed { position: absolute; }

.media-bleed img { width: 100%; height: 100%; object-fit: cover; }

.media-placeholder {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: linear-gradient(45deg, #111111, #0a0a0a);
    color: #4b5563;
    font-weight: 700;
    letter-spacing: 0.1em;
    text-transform: uppercase;
}

.media-shine {
    position: absolute;
    inset: 0;
    background: linear-gradient(45deg, transparent, rgba(255, 255, 255, 0.05), transparent);
    opacity: 0;
    transition: opacity 0.7s;
    pointer-events: none;
}

.media-frame:hover .media-shine { opacity: 1; }

/* Feature rows */
.feature-rows { padding: 128px 0; overflow: hidden; }

.feature-rows-title {
    text-align: center;
    margin-bottom: 128px;
    letter-spacing: 0.05em;
    text-transform: uppercase;
}

.feature-row {
    display: flex;
    align-items: center;
    gap: 96px;
    margin-bottom: 96px;
}

.feature-row.reversed { flex-direction: row-reverse; }

.feature-text, .feature-media { flex: 1; }

/* Parallax panels */
.parallax {
    position: relative;
    min-height: 80vh;
    display: flex;
    align-items: center;
    padding: 96px 0;
    overflow: hidden;
}

.parallax-bg { position: absolute; inset: 0; z-index: 0; }

.parallax-image {
    position: absolute;
    inset: 0;
    background-size: cover;
}

.parallax-overlay { position: absolute; inset: 0; background: #000000; }

.parallax-row { display: flex; padding: 0 96px; }
.parallax-row.side-left { justify-content: flex-start; }
.parallax-row.side-right { justify-content: flex-end; }

/* Featured content */
.featured { padding: 128px 0; overflow: hidden; }

.featured-row {
    display: flex;
    align-items: center;
    gap: 96px;
    padding-left: 96px;
}

.featured-row.reversed { flex-direction: row-reverse; padding-left: 0; padding-right: 96px; }

.featured-text { width: 100%; max-width: var(--content-box); }

.featured-media { flex: 1; }

/* Pricing */
.pricing { position: relative; padding: 64px 0; }

.pricing-head { text-align: center; margin-bottom: 80px; }

.pricing-head h2 { margin-bottom: 24px; letter-spacing: 0.05em; text-transform: uppercase; }

.pricing-grid {
    display: flex;
    align-items: flex-end;
    justify-content: center;
    gap: 8px;
}

.pricing-card {
    position: relative;
    flex: none;
    width: var(--card-width);
    height: 480px;
    display: flex;
    flex-direction: column;
    padding: 32px;
    border-radius: var(--radius-xl);
    border: 1px solid var(--border);
    background: linear-gradient(180deg, #050505, #000000);
    transition: border-color var(--speed-fast), background-color var(--speed-fast);
}

.pricing-card:hover { border-color: rgba(20, 184, 166, 0.2); }

.pricing-card.tall { height: 540px; }

.pricing-card.highlight { background: var(--bg-card-highlight); border-color: var(--accent-soft); }

.plan-header { text-align: center; margin-bottom: 40px; }

.plan-name {
    color: var(--text-dim);
    font-size: 14px;
    font-weight: 700;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    margin-bottom: 24px;
}

.highlight .plan-name { color: var(--accent-light); }

.plan-price { font-size: 48px; font-weight: 700; letter-spacing: -0.02em; margin-bottom: 16px; }

.plan-period { color: var(--text-dim); font-size: 12px; letter-spacing: 0.1em; text-transform: uppercase; }

.plan-badge {
    display: inline-block;
    margin-top: 16px;
    padding: 4px 12px;
    border-radius: 9999px;
    border: 1px solid var(--border-soft);
    background: rgba(255, 255, 255, 0.05);
    color: var(--text-muted);
    font-size: 12px;
}

.highlight .plan-badge { border-color: var(--accent-soft); color: #5eead4; }

.plan-features { flex: 1; list-style: none; margin-bottom: 40px; }

.plan-feature {
    display: flex;
    align-items: center;
    gap: 16px;
    margin-bottom: 24px;
    color: #d1d5db;
    font-size: 14px;
    letter-spacing: 0.03em;
}

.plan-dot { width: 6px; height: 6px; flex: none; border-radius: 9999px; background: #4b5563; }

.highlight .plan-dot { background: var(--accent-light); }

.plan-action { width: 100%; height: auto; padding: 16px 24px; font-size: 12px; letter-spacing: 0.2em; }

/* Call to action */
.cta {
    position: relative;
    padding: 128px 0;
    overflow: hidden;
    text-align: center;
    border-top: 1px solid var(--border);
}

.cta-dots {
    position: absolute;
    inset: 0;
    background-image: radial-gradient(rgba(255, 255, 255, 0.05) 1px, transparent 1px);
    background-size: 24px 24px;
    opacity: 0.3;
}

.cta .glow { width: 600px; height: 600px; background: rgba(20, 184, 166, 0.1); }

.cta-title { margin-bottom: 32px; text-transform: uppercase; }

.cta-description { color: var(--text-muted); font-size: 20px; max-width: 672px; margin: 0 auto 48px; line-height: 1.7; }

/* Footer */
.footer { padding: 48px 0; border-top: 1px solid var(--border); }

.footer-copyright {
    text-align: center;
    color: var(--text-dim);
    font-size: 14px;
    letter-spacing: 0.1em;
    text-transform: uppercase;
}

/* Stack on narrow screens */
@media (max-width: 1023px) {
    .feature-row, .feature-row.reversed,
    .featured-row, .featured-row.reversed,
    .pricing-grid {
        flex-direction: column;
        align-items: center;
        gap: 48px;
        padding: 0;
    }
    .parallax-row { padding: 0; }
    .glass-panel { padding: 32px; }
}
"#;
