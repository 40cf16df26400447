//! Management toolbar — search form plus option toggles.

mod option_toggles;

use dioxus::prelude::*;
use toolbar_search_dioxus::SearchInput;
use tracing::info;

use crate::state::*;
use option_toggles::OptionToggles;

#[component]
pub fn ManagementToolbar() -> Element {
    let options = OPTIONS.read().clone();
    let query = QUERY.read().clone();

    rsx! {
        nav {
            class: "management-bar management-bar-light navbar navbar-expand-md",
            div {
                class: "container-fluid container-fluid-max-xl",

                div {
                    class: "navbar-form navbar-form-autofit",
                    form {
                        role: "search",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            let submitted = QUERY.read().clone();
                            info!(query = submitted.as_str(), "search submitted");
                            *SUBMITTED.write() = Some(submitted);
                        },
                        SearchInput {
                            value: query,
                            on_value_change: move |value: String| {
                                *QUERY.write() = value;
                            },
                            on_close_button_click: move |_: MouseEvent| {
                                QUERY.write().clear();
                                *SUBMITTED.write() = None;
                            },
                            options,
                        }
                    }
                }

                OptionToggles {}
            }
        }
    }
}
