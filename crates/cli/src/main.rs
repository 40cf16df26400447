//! tsearch — preview the toolbar search input from the terminal.
//!
//! Renders the component to static HTML (or its view structure to JSON) and
//! validates `.toolbar-search.toml` files.

use clap::{Parser, Subcommand};
use dioxus::prelude::*;
use std::path::{Path, PathBuf};

use toolbar_search_core::{
    check_search_config, load_search_config, parse_search_config, SearchInputOptions,
    SearchInputView, CONFIG_FILE_NAME,
};
use toolbar_search_dioxus::SearchInput;

/// Toolbar search preview tool.
#[derive(Parser)]
#[command(name = "tsearch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the search input with the given value and options
    Render {
        /// Current field contents
        #[arg(long, default_value = "")]
        value: String,

        /// Disable the text field and the submit button
        #[arg(long)]
        disabled: bool,

        /// Leave out the clear button
        #[arg(long)]
        only_search: bool,

        /// Icon sprite sheet URI
        #[arg(long)]
        spritemap: Option<String>,

        /// Extra container class
        #[arg(long)]
        class_name: Option<String>,

        /// Options file (default: .toolbar-search.toml in the current directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the view structure as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Validate an options file
    Check {
        /// File to check (default: .toolbar-search.toml in the current directory)
        path: Option<PathBuf>,
    },
}

/// Command-line overrides layered on top of the options file.
struct Overrides {
    disabled: bool,
    only_search: bool,
    spritemap: Option<String>,
    class_name: Option<String>,
}

impl Overrides {
    fn apply(self, mut options: SearchInputOptions) -> SearchInputOptions {
        options.disabled |= self.disabled;
        options.only_search |= self.only_search;
        if self.spritemap.is_some() {
            options.spritemap = self.spritemap;
        }
        if self.class_name.is_some() {
            options.class_name = self.class_name;
        }
        options
    }
}

fn base_options(config: Option<&Path>) -> Result<SearchInputOptions, String> {
    match config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            parse_search_config(&content)
        }
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| format!("Could not determine current directory: {e}"))?;
            Ok(load_search_config(&cwd))
        }
    }
}

#[component]
fn Preview(value: String, options: SearchInputOptions) -> Element {
    rsx! {
        SearchInput {
            value,
            on_value_change: move |_: String| {},
            on_close_button_click: move |_: MouseEvent| {},
            options,
        }
    }
}

fn render_html(value: &str, options: SearchInputOptions) -> String {
    let mut dom =
        VirtualDom::new_with_props(Preview, PreviewProps { value: value.to_string(), options });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_json(value: &str, options: &SearchInputOptions) -> Result<String, String> {
    let view = SearchInputView::new(value, options);
    serde_json::to_string_pretty(&view).map_err(|e| e.to_string())
}

fn run_check(path: Option<PathBuf>) -> Result<(), String> {
    let path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let content = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;

    let check = check_search_config(&content)?;
    eprintln!("  [PASS] {} is valid", path.display());
    for unknown in &check.unknown_keys {
        match unknown.suggestion {
            Some(s) => eprintln!("  [WARN] unknown key '{}' (did you mean '{s}'?)", unknown.key),
            None => eprintln!("  [WARN] unknown key '{}'", unknown.key),
        }
    }
    println!("{}", render_json("", &check.options)?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("toolbar_search=warn".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render { value, disabled, only_search, spritemap, class_name, config, json } => {
            base_options(config.as_deref()).and_then(|base| {
                let options = Overrides { disabled, only_search, spritemap, class_name }.apply(base);
                tracing::debug!(?options, "rendering search input");
                let out = if json { render_json(&value, &options)? } else { render_html(&value, options) };
                println!("{out}");
                Ok(())
            })
        }
        Commands::Check { path } => run_check(path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
