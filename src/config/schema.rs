use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/taggrid/config.toml` or
/// `~/.config/taggrid/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TAGGRID__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub loader: LoaderSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Whether to render the controls footer.
    pub show_controls: bool,

    /// Whether rows with unsaved changes get a background tint.
    pub highlight_dirty: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ taggrid: tag it all at once ~ ".to_string(),
            show_controls: true,
            highlight_dirty: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// Whether directory inputs are expanded recursively.
    pub recursive: bool,
    /// Whether to follow symlinks while expanding directories.
    pub follow_links: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            recursive: true,
            follow_links: true,
            max_depth: None,
        }
    }
}
