//! Toolbar search core — the framework-independent render model of the
//! management toolbar search field.
//!
//! The field is a controlled input: the caller owns the text, this crate only
//! describes what one render looks like and where user interaction goes.
//! UI frontends (see `toolbar-search-dioxus`) map [`SearchInputView`] onto
//! their own element tree and plug in an [`IconButtonRenderer`].

pub mod classes;
pub mod config;
pub mod icon;
pub mod search_input;
pub mod view;

pub use classes::class_names;
pub use config::{
    check_search_config, load_search_config, parse_search_config, ConfigCheck, UnknownKey,
    CONFIG_FILE_NAME,
};
pub use icon::{ButtonType, DisplayType, IconButtonRenderer, IconButtonSpec};
pub use search_input::{SearchInput, SearchInputOptions};
pub use view::{InsetRegion, RenderedInset, SearchInputView, TextField};
