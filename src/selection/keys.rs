//! Key bindings for the selection component.
//!
//! ## Row Keys
//!
//! - **Cursor**: `↑/k`, `↓/j`
//! - **Tap** (toggle selection): `space/enter`
//! - **Long press** (row menu): `m`
//! - **Actions menu**: `a` (only while something is selected)
//! - **Delete selected**: `d/delete`
//! - **Select all**: `ctrl+a`
//! - **Clear selection**: `esc`
//!
//! ## Menu Keys
//!
//! - **Move**: `↑/k`, `↓/j`
//! - **Choose**: `enter/space`
//! - **Close**: `esc/m/a`
//!
//! ## Help and Quit
//!
//! - **Help**: `?`
//! - **Quit**: `q`, `ctrl+c`

use crate::key;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for row navigation, selection, menus, help and quitting.
#[derive(Debug, Clone)]
pub struct SelectionKeyMap {
    /// Move the row cursor up.
    pub cursor_up: key::Binding,
    /// Move the row cursor down.
    pub cursor_down: key::Binding,
    /// Toggle the row under the cursor.
    pub toggle: key::Binding,
    /// Open the long-press menu for the row under the cursor.
    pub context_menu: key::Binding,
    /// Open the bar's actions menu.
    pub actions_menu: key::Binding,
    /// Delete every selected row.
    pub delete: key::Binding,
    /// Select every row.
    pub select_all: key::Binding,
    /// Clear the selection.
    pub clear: key::Binding,
    /// Move up inside an open menu.
    pub menu_up: key::Binding,
    /// Move down inside an open menu.
    pub menu_down: key::Binding,
    /// Run the highlighted menu entry.
    pub menu_choose: key::Binding,
    /// Close the open menu.
    pub menu_close: key::Binding,
    /// Toggle the full help view.
    pub show_full_help: key::Binding,
    /// Quit.
    pub quit: key::Binding,
    /// Force quit.
    pub force_quit: key::Binding,
}

impl Default for SelectionKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            toggle: key::Binding::new(vec![KeyCode::Char(' '), KeyCode::Enter])
                .with_help("space", "select"),
            context_menu: key::Binding::new(vec![KeyCode::Char('m')]).with_help("m", "row menu"),
            actions_menu: key::Binding::new(vec![KeyCode::Char('a')]).with_help("a", "actions"),
            delete: key::Binding::new(vec![KeyCode::Char('d'), KeyCode::Delete])
                .with_help("d", "delete selected"),
            select_all: key::Binding::new(vec![(KeyCode::Char('a'), KeyModifiers::CONTROL)])
                .with_help("ctrl+a", "select all"),
            clear: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear selection"),
            menu_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            menu_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            menu_choose: key::Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
                .with_help("enter", "choose"),
            menu_close: key::Binding::new(vec![
                KeyCode::Esc,
                KeyCode::Char('m'),
                KeyCode::Char('a'),
            ])
            .with_help("esc", "close menu"),
            show_full_help: key::Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
            quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: key::Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "force quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::KeyMsg;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_select_all_needs_control() {
        let keys = SelectionKeyMap::default();
        let ctrl_a = press(KeyCode::Char('a'), KeyModifiers::CONTROL);
        let plain_a = press(KeyCode::Char('a'), KeyModifiers::NONE);

        assert!(keys.select_all.matches(&ctrl_a));
        assert!(!keys.actions_menu.matches(&ctrl_a));
        assert!(keys.actions_menu.matches(&plain_a));
        assert!(!keys.select_all.matches(&plain_a));
    }

    #[test]
    fn test_quit_bindings() {
        let keys = SelectionKeyMap::default();
        assert!(keys.quit.matches(&press(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(keys
            .force_quit
            .matches(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!keys.quit.matches(&press(KeyCode::Esc, KeyModifiers::NONE)));
    }
}
