//! Root application component — toolbar on top, status line below.

use dioxus::prelude::*;
use toolbar_search_dioxus::Spritemap;

use crate::state::*;
use crate::toolbar::ManagementToolbar;

static APP_CSS: Asset = asset!("/assets/styles/app.css");
static ICONS: Asset = asset!("/assets/icons.svg");

#[component]
pub fn App() -> Element {
    // Icon buttons without an explicit spritemap fall back to the bundled sheet.
    use_context_provider(|| Spritemap(ICONS.to_string()));

    rsx! {
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",
            ManagementToolbar {}
            StatusLine {}
        }
    }
}

/// Status line under the toolbar
#[component]
fn StatusLine() -> Element {
    let query = QUERY.read();
    let submitted = SUBMITTED.read();

    rsx! {
        div {
            class: "statusline",
            span { class: "statusline-query", "{query.chars().count()} chars" }
            if let Some(ref last) = *submitted {
                span { class: "statusline-sep", "|" }
                span { class: "statusline-submitted", "searched for \u{201C}{last}\u{201D}" }
            }
        }
    }
}
