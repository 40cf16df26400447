//! Toolbar Search Desktop — Dioxus demo of the management toolbar search field.

use std::sync::Mutex;

use dioxus::prelude::*;
use toolbar_search_core::{load_search_config, SearchInputOptions};

mod app;
mod state;
mod toolbar;

use app::App;

/// Pre-runtime storage — loaded before Dioxus launches, consumed on first render.
pub static INITIAL_OPTIONS: Mutex<Option<SearchInputOptions>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("toolbar_search=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let options = match std::env::current_dir() {
        Ok(cwd) => load_search_config(&cwd),
        Err(e) => {
            tracing::warn!("Could not determine current directory: {e}");
            SearchInputOptions::default()
        }
    };
    *INITIAL_OPTIONS.lock().unwrap() = Some(options);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Toolbar Search")
                            .with_inner_size(LogicalSize::new(900.0, 320.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 200.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
