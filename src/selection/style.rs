//! Styling for the selection component.
//!
//! All colors are adaptive so the component reads well on light and dark
//! terminals.
//!
//! ```rust
//! use selectable_list::selection::style::{SelectionStyles, CHECKMARK};
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = SelectionStyles::default();
//! styles.title = Style::new().bold(true);
//! assert_eq!(CHECKMARK, "✓");
//! ```

use lipgloss_extras::prelude::*;

/// Mark drawn next to selected rows.
pub const CHECKMARK: &str = "✓";

/// Marker drawn in front of the row or menu entry under the cursor.
pub const CURSOR: &str = ">";

/// Appended to labels that are cut to fit the width.
pub const ELLIPSIS: &str = "…";

/// Styles for every visual element of the selection component.
#[derive(Debug, Clone)]
pub struct SelectionStyles {
    /// Wrapper around the whole navigation bar line.
    pub title_bar: Style,
    /// The navigation title.
    pub title: Style,
    /// The hint shown when bar actions are available.
    pub actions_hint: Style,
    /// Unselected row label.
    pub row: Style,
    /// Selected row label.
    pub selected_row: Style,
    /// The checkmark next to selected rows.
    pub checkmark: Style,
    /// The cursor marker.
    pub cursor: Style,
    /// Non-destructive menu entry.
    pub menu_item: Style,
    /// Destructive menu entry.
    pub destructive_item: Style,
    /// Header line of an open menu.
    pub menu_title: Style,
    /// Message shown when there are no rows.
    pub no_items: Style,
    /// Wrapper around the help footer.
    pub help: Style,
}

impl Default for SelectionStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let normal = AdaptiveColor {
            Light: "#1A1A1A",
            Dark: "#DDDDDD",
        };

        Self {
            title_bar: Style::new().padding(0, 0, 1, 2),
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            actions_hint: Style::new().foreground(subdued.clone()),
            row: Style::new().foreground(normal.clone()),
            selected_row: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            checkmark: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#04B575",
            }),
            cursor: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            menu_item: Style::new().foreground(normal),
            destructive_item: Style::new().foreground(AdaptiveColor {
                Light: "#D7263D",
                Dark: "#FF5F87",
            }),
            menu_title: Style::new().foreground(subdued.clone()).italic(true),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            help: Style::new().padding(1, 0, 0, 2),
        }
    }
}
