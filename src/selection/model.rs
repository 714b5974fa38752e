//! The interactive selection widget.
//!
//! `Model` wraps a [`Controller`] and plays the role of the presentation layer:
//! it turns key presses into row taps, long presses and bar actions, and draws
//! the rows and navigation bar from the controller's read state on every
//! frame.

use super::controller::Controller;
use super::keys::SelectionKeyMap;
use super::menu::OpenMenu;
use super::style::SelectionStyles;
use super::types::ItemId;
use crate::help;

/// A multi-select list with a selection-aware navigation bar.
///
/// # Navigation
///
/// - **Up/Down**: Move the row cursor
/// - **Space/Enter**: Toggle the row under the cursor
/// - **m**: Open the row menu (Select/Deselect, Delete)
/// - **a**: Open the Actions menu while something is selected
/// - **d**: Delete every selected row
/// - **Ctrl+A**: Select every row
/// - **Esc**: Close the open menu, or clear the selection
///
/// # Examples
///
/// ```
/// use selectable_list::selection::{Controller, Model};
///
/// let list = Model::new(Controller::seeded(), 40);
/// assert_eq!(list.cursor(), 0);
/// assert_eq!(list.controller().len(), 3);
/// assert!(!list.is_menu_open());
/// ```
#[derive(Debug)]
pub struct Model {
    pub(super) controller: Controller,
    pub(super) cursor: usize,
    pub(super) menu: Option<OpenMenu>,
    pub(super) width: usize,
    pub(super) styles: SelectionStyles,
    pub(super) keymap: SelectionKeyMap,
    pub(super) help: help::Model,
    pub(super) show_help: bool,
}

impl Model {
    /// Creates a widget around `controller`, `width` columns wide.
    pub fn new(controller: Controller, width: usize) -> Self {
        Self {
            controller,
            cursor: 0,
            menu: None,
            width,
            styles: SelectionStyles::default(),
            keymap: SelectionKeyMap::default(),
            help: help::Model::new().with_width(width),
            show_help: true,
        }
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: SelectionStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: SelectionKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Shows or hides the help footer.
    pub fn with_show_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Sets the render width.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.help.width = width;
    }

    /// The underlying controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Mutable access to the controller. The row cursor is re-clamped on the
    /// next update or render.
    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Index of the row under the cursor, clamped to the current rows.
    pub fn cursor(&self) -> usize {
        self.cursor.min(self.controller.len().saturating_sub(1))
    }

    /// Identity of the row under the cursor.
    pub fn current_id(&self) -> Option<ItemId> {
        self.controller.items().get(self.cursor()).map(|i| i.id())
    }

    /// Returns true if a row menu or the actions menu is open.
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_some()
    }

    /// Moves the row cursor up one row.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor().saturating_sub(1);
    }

    /// Moves the row cursor down one row.
    pub fn cursor_down(&mut self) {
        let last = self.controller.len().saturating_sub(1);
        self.cursor = (self.cursor() + 1).min(last);
    }

    /// Toggles the row under the cursor.
    pub fn tap(&mut self) -> bool {
        match self.current_id() {
            Some(id) => self.controller.tap_row(id),
            None => false,
        }
    }

    /// Opens the long-press menu for the row under the cursor.
    ///
    /// Returns false if there is no row to open it for.
    pub fn open_context_menu(&mut self) -> bool {
        let Some(id) = self.current_id() else {
            return false;
        };
        let actions = self.controller.long_press_row(id);
        if actions.is_empty() {
            return false;
        }
        tracing::trace!(%id, entries = actions.len(), "opened row menu");
        self.menu = Some(OpenMenu::Context { actions, cursor: 0 });
        true
    }

    /// Opens the bar's actions menu. Returns false if the bar offers nothing.
    pub fn open_actions_menu(&mut self) -> bool {
        let actions = self.controller.bar_descriptor().actions;
        if actions.is_empty() {
            return false;
        }
        tracing::trace!(entries = actions.len(), "opened actions menu");
        self.menu = Some(OpenMenu::Actions { actions, cursor: 0 });
        true
    }

    /// Closes any open menu.
    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    /// Runs the highlighted menu entry and closes the menu.
    pub fn choose_menu_entry(&mut self) -> bool {
        let Some(menu) = self.menu.take() else {
            return false;
        };
        let changed = menu.invoke(&mut self.controller);
        self.clamp_cursor();
        changed
    }

    pub(super) fn clamp_cursor(&mut self) {
        self.cursor = self.cursor();
    }
}
