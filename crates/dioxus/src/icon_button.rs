//! Icon button — a sprite-sheet icon inside an unstyled button.

use dioxus::prelude::*;
use toolbar_search_core::{class_names, IconButtonRenderer, IconButtonSpec};
use tracing::trace;

/// App-wide sprite sheet used when a button has no `spritemap` of its own.
#[derive(Clone, PartialEq)]
pub struct Spritemap(pub String);

/// `<sheet>#<symbol>`; without a sheet the symbol is looked up in the current document.
pub fn sprite_href(spritemap: Option<&str>, symbol: &str) -> String {
    format!("{}#{symbol}", spritemap.unwrap_or_default())
}

#[component]
pub fn IconButton(spec: IconButtonSpec, #[props(default)] onclick: EventHandler<MouseEvent>) -> Element {
    let fallback = try_use_context::<Spritemap>();
    let spritemap = spec.spritemap.as_deref().or(fallback.as_ref().map(|s| s.0.as_str()));
    let href = sprite_href(spritemap, spec.symbol);

    let base = format!("btn btn-{}", spec.display_type.as_str());
    let class = class_names(&base, spec.class_name);
    let disabled = spec.disabled;
    let symbol = spec.symbol;

    rsx! {
        button {
            class: "{class}",
            r#type: spec.button_type.as_str(),
            disabled,
            onclick: move |evt: MouseEvent| {
                if disabled {
                    trace!(symbol, "click ignored on disabled icon button");
                    return;
                }
                onclick.call(evt);
            },
            svg {
                class: "lexicon-icon lexicon-icon-{spec.symbol}",
                role: "presentation",
                r#use { href: "{href}" }
            }
        }
    }
}

/// Renders [`IconButtonSpec`]s as [`IconButton`] components.
pub struct ClayIconButton;

impl IconButtonRenderer for ClayIconButton {
    type Handler = EventHandler<MouseEvent>;
    type Output = Element;

    fn render(&self, spec: &IconButtonSpec, on_click: Option<EventHandler<MouseEvent>>) -> Element {
        match on_click {
            Some(handler) => rsx! { IconButton { spec: spec.clone(), onclick: handler } },
            None => rsx! { IconButton { spec: spec.clone() } },
        }
    }
}
