//! Behavioral options for the selection controller.

/// Options controlling titles and which optional actions are offered.
///
/// # Examples
///
/// ```
/// use selectable_list::selection::Config;
///
/// let config = Config::default()
///     .with_idle_title("Fruit")
///     .with_extension_actions(false);
/// assert_eq!(config.idle_title, "Fruit");
/// assert!(!config.extension_actions);
/// assert!(config.row_delete);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Title shown while nothing is selected.
    pub idle_title: String,
    /// Word following the count while something is selected (`"2 selected"`).
    pub selected_suffix: String,
    /// Offer "Select All" after "Delete" while some items remain unselected.
    pub extension_actions: bool,
    /// Include a per-row "Delete" entry in row context menus.
    pub row_delete: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            idle_title: "Items".to_string(),
            selected_suffix: "selected".to_string(),
            extension_actions: true,
            row_delete: true,
        }
    }
}

impl Config {
    /// Sets the idle title.
    pub fn with_idle_title(mut self, title: impl Into<String>) -> Self {
        self.idle_title = title.into();
        self
    }

    /// Sets the word following the selection count.
    pub fn with_selected_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.selected_suffix = suffix.into();
        self
    }

    /// Enables or disables the "Select All" bar action.
    pub fn with_extension_actions(mut self, enabled: bool) -> Self {
        self.extension_actions = enabled;
        self
    }

    /// Enables or disables the per-row context menu "Delete" entry.
    pub fn with_row_delete(mut self, enabled: bool) -> Self {
        self.row_delete = enabled;
        self
    }
}
