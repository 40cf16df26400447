//! Structural description of one search field render.
//!
//! A [`SearchInputView`] is a plain value: building it twice from the same
//! inputs yields equal views, and nothing in it survives between renders.

use serde::Serialize;
use tracing::{debug, trace};

use crate::classes::class_names;
use crate::icon::{ButtonType, DisplayType, IconButtonRenderer, IconButtonSpec};
use crate::search_input::SearchInputOptions;

pub const CONTAINER_CLASS: &str = "input-group";
pub const ITEM_CLASS: &str = "input-group-item";
pub const FIELD_CLASS: &str = "form-control input-group-inset input-group-inset-after";
pub const INSET_CLASS: &str = "input-group-inset-item input-group-inset-item-after";
pub const CLEAR_BUTTON_CLASS: &str = "navbar-breakpoint-d-none";

/// Accessible label of the text field. Not configurable.
pub const ARIA_LABEL: &str = "Search";

pub const CLEAR_SYMBOL: &str = "times";
pub const SUBMIT_SYMBOL: &str = "search";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchInputView {
    pub container_class: String,
    pub item_class: &'static str,
    pub field: TextField,
    pub inset: InsetRegion,
}

/// The controlled text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextField {
    pub value: String,
    pub input_type: &'static str,
    pub aria_label: &'static str,
    pub class: &'static str,
    pub disabled: bool,
}

/// Button area overlaid on the end of the text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsetRegion {
    pub class: &'static str,
    /// `None` in search-only mode.
    pub clear: Option<IconButtonSpec>,
    pub submit: IconButtonSpec,
}

/// Inset buttons after they went through an [`IconButtonRenderer`].
pub struct RenderedInset<T> {
    pub clear: Option<T>,
    pub submit: T,
}

impl SearchInputView {
    pub fn new(value: &str, options: &SearchInputOptions) -> Self {
        trace!(
            disabled = options.disabled,
            only_search = options.only_search,
            "building search input view"
        );

        let spritemap = options.spritemap.clone();

        // The clear button deliberately ignores `disabled`.
        let clear = (!options.only_search).then(|| IconButtonSpec {
            symbol: CLEAR_SYMBOL,
            display_type: DisplayType::Unstyled,
            disabled: false,
            spritemap: spritemap.clone(),
            button_type: ButtonType::Button,
            class_name: Some(CLEAR_BUTTON_CLASS),
        });

        let submit = IconButtonSpec {
            symbol: SUBMIT_SYMBOL,
            display_type: DisplayType::Unstyled,
            disabled: options.disabled,
            spritemap,
            button_type: ButtonType::Submit,
            class_name: None,
        };

        Self {
            container_class: class_names(CONTAINER_CLASS, options.class_name.as_deref()),
            item_class: ITEM_CLASS,
            field: TextField {
                value: value.to_string(),
                input_type: "text",
                aria_label: ARIA_LABEL,
                class: FIELD_CLASS,
                disabled: options.disabled,
            },
            inset: InsetRegion {
                class: INSET_CLASS,
                clear,
                submit,
            },
        }
    }

    /// Individual class tags of the outer container.
    pub fn container_classes(&self) -> impl Iterator<Item = &str> {
        self.container_class.split_whitespace()
    }

    /// Number of clear controls in this render (0 or 1).
    pub fn clear_count(&self) -> usize {
        usize::from(self.inset.clear.is_some())
    }
}

impl TextField {
    /// Route an edit to the caller. Disabled fields swallow it.
    ///
    /// Returns whether `on_change` was invoked.
    pub fn edit(&self, text: String, on_change: impl FnOnce(String)) -> bool {
        if self.disabled {
            trace!("edit ignored on disabled search field");
            return false;
        }
        debug!(len = text.len(), "search value changed");
        on_change(text);
        true
    }
}

impl InsetRegion {
    /// Render both inset buttons. `on_clear` is only attached when the clear
    /// button exists; the submit button gets no handler of its own.
    pub fn render<R: IconButtonRenderer>(
        &self,
        renderer: &R,
        on_clear: R::Handler,
    ) -> RenderedInset<R::Output> {
        RenderedInset {
            clear: self.clear.as_ref().map(|spec| renderer.render(spec, Some(on_clear))),
            submit: renderer.render(&self.submit, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_has_both_buttons() {
        let view = SearchInputView::new("", &SearchInputOptions::default());
        assert_eq!(view.container_class, "input-group");
        assert_eq!(view.item_class, "input-group-item");
        assert_eq!(view.field.input_type, "text");
        assert_eq!(view.field.aria_label, "Search");
        assert!(!view.field.disabled);

        let clear = view.inset.clear.as_ref().expect("clear button by default");
        assert_eq!(clear.symbol, "times");
        assert_eq!(clear.button_type, ButtonType::Button);
        assert_eq!(clear.class_name, Some("navbar-breakpoint-d-none"));

        assert_eq!(view.inset.submit.symbol, "search");
        assert_eq!(view.inset.submit.button_type, ButtonType::Submit);
        assert_eq!(view.inset.submit.display_type, DisplayType::Unstyled);
    }

    #[test]
    fn only_search_drops_clear_button() {
        let options = SearchInputOptions { only_search: true, ..Default::default() };
        let view = SearchInputView::new("q", &options);
        assert!(view.inset.clear.is_none());
        assert_eq!(view.clear_count(), 0);
    }

    #[test]
    fn disabled_field_swallows_edits() {
        let options = SearchInputOptions { disabled: true, ..Default::default() };
        let view = SearchInputView::new("q", &options);
        let mut fired = false;
        assert!(!view.field.edit("qq".into(), |_| fired = true));
        assert!(!fired);
    }

    #[test]
    fn view_serializes_for_preview() {
        let view = SearchInputView::new("abc", &SearchInputOptions::default());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["field"]["value"], "abc");
        assert_eq!(json["inset"]["submit"]["button_type"], "submit");
        assert_eq!(json["inset"]["clear"]["display_type"], "unstyled");
    }
}
