//! Global application state using Dioxus signals.
//!
//! The toolbar owns the search value; the search field only ever reads it.

use dioxus::prelude::*;
use toolbar_search_core::SearchInputOptions;

/// Search field options — seeded from `.toolbar-search.toml` on first render.
pub static OPTIONS: GlobalSignal<SearchInputOptions> = Signal::global(|| {
    crate::INITIAL_OPTIONS
        .lock()
        .ok()
        .and_then(|mut initial| initial.take())
        .unwrap_or_default()
});

/// Current search text
pub static QUERY: GlobalSignal<String> = Signal::global(String::new);

/// Last submitted search, shown in the status line
pub static SUBMITTED: GlobalSignal<Option<String>> = Signal::global(|| None);
