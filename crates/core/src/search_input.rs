//! Search input props: the optional configuration record and a borrowed props
//! bundle for hosts that drive the render model directly.

use serde::{Deserialize, Serialize};

use crate::icon::IconButtonRenderer;
use crate::view::{RenderedInset, SearchInputView};

/// Optional knobs of the search field. All default to off/absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchInputOptions {
    /// Disables the text field and the submit button. The clear button stays live.
    pub disabled: bool,
    /// Omit the clear button entirely.
    pub only_search: bool,
    /// Sprite sheet URI forwarded to both icon buttons.
    pub spritemap: Option<String>,
    /// Extra class for the outer container.
    pub class_name: Option<String>,
}

/// A search field bound to its value and callbacks.
///
/// `V` receives the full text after every edit, `C` receives the clear
/// button's click event. Both are required at construction.
pub struct SearchInput<'a, V, C> {
    value: &'a str,
    on_value_change: V,
    on_close_button_click: C,
    options: SearchInputOptions,
}

impl<'a, V, C> SearchInput<'a, V, C>
where
    V: Fn(String),
{
    pub fn new(value: &'a str, on_value_change: V, on_close_button_click: C) -> Self {
        Self {
            value,
            on_value_change,
            on_close_button_click,
            options: SearchInputOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchInputOptions) -> Self {
        self.options = options;
        self
    }

    pub fn view(&self) -> SearchInputView {
        SearchInputView::new(self.value, &self.options)
    }

    /// Simulate the user typing so the field now reads `text`.
    pub fn edit(&self, text: impl Into<String>) -> bool {
        self.view().field.edit(text.into(), |t| (self.on_value_change)(t))
    }

    /// Build the view and render its inset buttons, wiring the clear callback
    /// into the clear button.
    pub fn render<R>(&self, renderer: &R) -> (SearchInputView, RenderedInset<R::Output>)
    where
        R: IconButtonRenderer<Handler = C>,
        C: Clone,
    {
        let view = self.view();
        let inset = view.inset.render(renderer, self.on_close_button_click.clone());
        (view, inset)
    }
}
