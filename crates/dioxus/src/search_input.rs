//! Controlled search input with inline clear and submit buttons.

use dioxus::prelude::*;
use toolbar_search_core::{SearchInputOptions, SearchInputView};

use crate::icon_button::ClayIconButton;

/// The caller owns `value`; every edit is handed back through
/// `on_value_change` and the field shows whatever it is given next render.
#[component]
pub fn SearchInput(
    value: String,
    on_value_change: EventHandler<String>,
    on_close_button_click: EventHandler<MouseEvent>,
    #[props(default)] options: SearchInputOptions,
) -> Element {
    let view = SearchInputView::new(&value, &options);
    let inset = view.inset.render(&ClayIconButton, on_close_button_click);
    let field = view.field.clone();

    rsx! {
        div {
            class: "{view.container_class}",
            div {
                class: view.item_class,
                input {
                    aria_label: view.field.aria_label,
                    class: view.field.class,
                    disabled: view.field.disabled,
                    r#type: view.field.input_type,
                    value: "{view.field.value}",
                    oninput: move |evt: FormEvent| {
                        field.edit(evt.value(), |text| on_value_change.call(text));
                    },
                }
                span {
                    class: view.inset.class,
                    if let Some(clear) = inset.clear {
                        {clear}
                    }
                    {inset.submit}
                }
            }
        }
    }
}
