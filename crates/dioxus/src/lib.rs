//! Dioxus frontend for the toolbar search field.

mod icon_button;
mod search_input;

pub use icon_button::{sprite_href, ClayIconButton, IconButton, Spritemap};
pub use search_input::SearchInput;
pub use toolbar_search_core::SearchInputOptions;
