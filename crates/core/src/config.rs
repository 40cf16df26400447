//! `.toolbar-search.toml` loading.
//!
//! ```toml
//! disabled = false
//! only_search = true
//! spritemap = "/o/admin-theme/images/clay/icons.svg"
//! class_name = "my-search"
//! ```

use std::path::Path;

use tracing::{debug, warn};

use crate::search_input::SearchInputOptions;

pub const CONFIG_FILE_NAME: &str = ".toolbar-search.toml";

/// Known keys in `.toolbar-search.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["disabled", "only_search", "spritemap", "class_name"];

/// A key the options record does not know about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey {
    pub key: String,
    /// Closest known key, when it is within typo distance.
    pub suggestion: Option<&'static str>,
}

/// Result of validating a config document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigCheck {
    pub options: SearchInputOptions,
    pub unknown_keys: Vec<UnknownKey>,
}

/// Levenshtein distance over chars, one rolling row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb { diag } else { 1 + diag.min(above).min(row[j]) };
            diag = above;
        }
    }
    row[b.len()]
}

/// Closest known key within typo distance (3 edits).
fn suggest(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .map(|known| (edit_distance(key, known), *known))
        .min()
        .filter(|(distance, _)| *distance <= 3)
        .map(|(_, known)| known)
}

/// Validate a config document without logging anything.
pub fn check_search_config(content: &str) -> Result<ConfigCheck, String> {
    let table: toml::Table = content.parse().map_err(|e| format!("invalid TOML: {e}"))?;

    let unknown_keys = table
        .keys()
        .filter(|k| !KNOWN_CONFIG_KEYS.contains(&k.as_str()))
        .map(|k| UnknownKey { key: k.clone(), suggestion: suggest(k) })
        .collect();

    let options: SearchInputOptions = toml::Value::Table(table)
        .try_into()
        .map_err(|e| format!("invalid search input config: {e}"))?;

    Ok(ConfigCheck { options, unknown_keys })
}

/// Parse a config document, warning about unknown keys.
pub fn parse_search_config(content: &str) -> Result<SearchInputOptions, String> {
    let check = check_search_config(content)?;
    for unknown in &check.unknown_keys {
        match unknown.suggestion {
            Some(suggestion) => warn!(
                key = unknown.key.as_str(),
                suggestion,
                "Unknown key in {CONFIG_FILE_NAME} — did you mean '{suggestion}'?"
            ),
            None => warn!(
                key = unknown.key.as_str(),
                "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            ),
        }
    }
    Ok(check.options)
}

/// Load search input options from `.toolbar-search.toml` in the given root.
///
/// A missing or broken file yields defaults; problems are logged, not returned.
pub fn load_search_config(project_root: &Path) -> SearchInputOptions {
    let config_path = project_root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return SearchInputOptions::default();
    }

    debug!("Loading {CONFIG_FILE_NAME}");
    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %config_path.display(), "Failed to read {CONFIG_FILE_NAME}: {e}");
            return SearchInputOptions::default();
        }
    };

    parse_search_config(&content).unwrap_or_else(|e| {
        warn!("Failed to parse {CONFIG_FILE_NAME}: {e}");
        SearchInputOptions::default()
    })
}
