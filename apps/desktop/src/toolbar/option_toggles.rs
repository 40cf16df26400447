//! Checkboxes that flip the search field's boolean options at runtime.

use dioxus::prelude::*;
use crate::state::*;

#[component]
pub fn OptionToggles() -> Element {
    let (disabled, only_search) = {
        let options = OPTIONS.read();
        (options.disabled, options.only_search)
    };

    rsx! {
        div {
            class: "option-toggles",
            label {
                class: "option-toggle",
                input {
                    r#type: "checkbox",
                    checked: disabled,
                    onchange: move |evt: FormEvent| {
                        OPTIONS.write().disabled = evt.checked();
                    },
                }
                "Disabled"
            }
            label {
                class: "option-toggle",
                input {
                    r#type: "checkbox",
                    checked: only_search,
                    onchange: move |evt: FormEvent| {
                        OPTIONS.write().only_search = evt.checked();
                    },
                }
                "Search only"
            }
        }
    }
}
