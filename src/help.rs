//! Key binding help footer.
//!
//! The help model renders the bindings a component exposes through [`KeyMap`],
//! either as a compact single line or as aligned columns when `show_all` is
//! set. Disabled bindings are skipped, and output is truncated with an
//! ellipsis when a width limit is configured.
//!
//! ```rust
//! use selectable_list::help::{KeyMap, Model};
//! use selectable_list::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! struct Keys {
//!     toggle: Binding,
//!     quit: Binding,
//! }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.toggle, &self.quit]
//!     }
//!
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.toggle], vec![&self.quit]]
//!     }
//! }
//!
//! let keys = Keys {
//!     toggle: Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "toggle"),
//!     quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
//! };
//! let help = Model::new();
//! let line = strip_ansi_escapes::strip_str(help.view(&keys));
//! assert_eq!(line, "space toggle • q quit");
//! ```

use crate::key;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Implemented by anything that can describe its key bindings for help output.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&key::Binding>;

    /// Bindings for the expanded view. Each inner `Vec` is one column.
    fn full_help(&self) -> Vec<Vec<&key::Binding>>;
}

/// Styles for the help footer.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the truncation ellipsis.
    pub ellipsis: Style,
    /// Key label in the short view.
    pub short_key: Style,
    /// Description in the short view.
    pub short_desc: Style,
    /// Separator between short view entries.
    pub short_separator: Style,
    /// Key label in the full view.
    pub full_key: Style,
    /// Description in the full view.
    pub full_desc: Style,
    /// Separator between full view columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// The help footer model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Render the full, multi-column view instead of the short line.
    pub show_all: bool,
    /// Maximum width in columns; `0` disables truncation.
    pub width: usize,
    /// Separator between short view entries.
    pub short_separator: String,
    /// Separator between full view columns.
    pub full_separator: String,
    /// Marker appended when output is truncated.
    pub ellipsis: String,
    /// Visual styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default styles and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders either the short or the full view depending on `show_all`.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders enabled bindings on one line as `key desc` pairs.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let mut builder = String::new();
        let mut total_width = 0;
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        for kb in bindings.into_iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
            let key_part = self.styles.short_key.clone().inline(true).render(&help.key);
            let desc_part = self
                .styles
                .short_desc
                .clone()
                .inline(true)
                .render(&help.desc);
            let item = format!("{}{} {}", sep, key_part, desc_part);
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.should_add_item(total_width, item_width) {
                builder.push_str(&tail);
                break;
            }

            total_width += item_width;
            builder.push_str(&item);
        }
        builder
    }

    /// Renders each group as a column of `key desc` rows.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        let mut columns = Vec::new();
        let mut total_width = 0;
        for group in groups.iter().filter(|g| should_render_column(g)) {
            let column = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    format!(
                        "{} {}",
                        self.styles.full_key.clone().inline(true).render(&help.key),
                        self.styles.full_desc.clone().inline(true).render(&help.desc)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            let column_width = lipgloss::width_visible(&column);

            if let Some(tail) = self.should_add_item(total_width, column_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }

            total_width += column_width;
            columns.push(column);
        }

        let mut parts = Vec::new();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(column.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    fn should_add_item(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width == 0 || total_width + item_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles
                .ellipsis
                .clone()
                .inline(true)
                .render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) < self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

/// Returns true if at least one binding in the column is enabled.
pub fn should_render_column(bindings: &[&key::Binding]) -> bool {
    bindings.iter().any(|b| b.enabled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    struct Keys {
        up: key::Binding,
        toggle: key::Binding,
        hidden: key::Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&key::Binding> {
            vec![&self.up, &self.hidden, &self.toggle]
        }

        fn full_help(&self) -> Vec<Vec<&key::Binding>> {
            vec![vec![&self.up], vec![&self.hidden], vec![&self.toggle]]
        }
    }

    fn keys() -> Keys {
        Keys {
            up: key::Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            toggle: key::Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "toggle"),
            hidden: key::Binding::new(vec![KeyCode::Delete])
                .with_help("del", "delete")
                .with_disabled(),
        }
    }

    #[test]
    fn test_short_view_skips_disabled() {
        let out = strip_ansi_escapes::strip_str(Model::new().view(&keys()));
        assert_eq!(out, "↑ up • space toggle");
    }

    #[test]
    fn test_short_view_truncates_with_ellipsis() {
        let out = strip_ansi_escapes::strip_str(Model::new().with_width(8).view(&keys()));
        assert!(out.starts_with("↑ up"));
        assert!(out.ends_with('…'));
        assert!(!out.contains("toggle"));
    }

    #[test]
    fn test_full_view_renders_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let out = strip_ansi_escapes::strip_str(help.view(&keys()));
        assert!(out.contains("↑ up"));
        assert!(out.contains("space toggle"));
        assert!(!out.contains("delete"));
    }

    #[test]
    fn test_empty_column_is_hidden() {
        assert!(!should_render_column(&[]));
    }
}
