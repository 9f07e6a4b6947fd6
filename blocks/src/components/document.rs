//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::CursorLight;
use crate::dispatch::RenderedUnit;
use crate::styles::LANDING_CSS;

/// The complete HTML document. Empty units leave no trace in the markup.
#[component]
pub fn LandingDocument(
    title: String,
    description: String,
    lang: String,
    cursor_light: bool,
    extra_css: Option<String>,
    units: Vec<RenderedUnit<AnyView>>,
) -> impl IntoView {
    let blocks = units
        .into_iter()
        .filter_map(|unit| unit.output.map(|output| (unit.id, output)))
        .map(|(id, output)| {
            view! {
                <div class="block" data-block-id=id>
                    {output}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <meta name="description" content=description />
                <style>{LANDING_CSS}</style>
                {extra_css.map(|css| view! { <style>{css}</style> })}
            </head>
            <body>
                {cursor_light.then(|| view! { <CursorLight /> })}
                <main class="page">{blocks}</main>
            </body>
        </html>
    }
}
