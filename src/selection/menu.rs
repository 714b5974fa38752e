//! Row context menus and the bar's overflow menu.
//!
//! Menu entries hold the identity of the row they were built for, never its
//! index. When an entry fires, it checks that the row still exists; if it was
//! deleted in the meantime the entry does nothing.

use super::controller::Controller;
use super::types::{BarAction, ItemId};

/// What a context menu entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextActionKind {
    /// Toggle the row's selection.
    ToggleSelection,
    /// Delete just this row.
    Delete,
}

/// One entry in a row's long-press menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextAction {
    kind: ContextActionKind,
    label: String,
    target: ItemId,
}

impl ContextAction {
    pub(super) fn new(kind: ContextActionKind, label: impl Into<String>, target: ItemId) -> Self {
        Self {
            kind,
            label: label.into(),
            target,
        }
    }

    /// What the entry does.
    pub fn kind(&self) -> ContextActionKind {
        self.kind
    }

    /// The label shown in the menu.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the entry destroys data.
    pub fn is_destructive(&self) -> bool {
        self.kind == ContextActionKind::Delete
    }

    /// The row this entry acts on.
    pub fn target(&self) -> ItemId {
        self.target
    }

    /// Runs the entry against `controller`. Returns true if state changed.
    ///
    /// The toggle entry acts on the row's membership at invocation time, not
    /// the membership its label was built from.
    ///
    /// ```
    /// use selectable_list::selection::Controller;
    ///
    /// let mut c = Controller::seeded();
    /// let banana = c.items()[1].id();
    /// let menu = c.long_press_row(banana);
    ///
    /// c.select(banana);
    /// c.delete_selected();
    ///
    /// // The row is gone; the stale entries do nothing.
    /// assert!(!menu[0].invoke(&mut c));
    /// assert!(!menu[1].invoke(&mut c));
    /// assert_eq!(c.len(), 2);
    /// ```
    pub fn invoke(&self, controller: &mut Controller) -> bool {
        if !controller.contains(self.target) {
            tracing::trace!(id = %self.target, label = %self.label, "stale context action ignored");
            return false;
        }
        match self.kind {
            ContextActionKind::ToggleSelection => controller.toggle(self.target),
            ContextActionKind::Delete => controller.delete_item(self.target).is_some(),
        }
    }
}

/// A menu currently open in the widget, with its highlighted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum OpenMenu {
    /// Long-press menu for a single row.
    Context {
        actions: Vec<ContextAction>,
        cursor: usize,
    },
    /// The bar's "Actions" overflow menu.
    Actions {
        actions: Vec<BarAction>,
        cursor: usize,
    },
}

impl OpenMenu {
    pub(super) fn len(&self) -> usize {
        match self {
            OpenMenu::Context { actions, .. } => actions.len(),
            OpenMenu::Actions { actions, .. } => actions.len(),
        }
    }

    pub(super) fn cursor(&self) -> usize {
        match self {
            OpenMenu::Context { cursor, .. } | OpenMenu::Actions { cursor, .. } => *cursor,
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self {
            OpenMenu::Context { cursor, .. } | OpenMenu::Actions { cursor, .. } => cursor,
        }
    }

    pub(super) fn move_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    pub(super) fn move_down(&mut self) {
        let last = self.len().saturating_sub(1);
        let cursor = self.cursor_mut();
        *cursor = (*cursor + 1).min(last);
    }

    /// Entries as `(label, is_destructive)` in display order.
    pub(super) fn entries(&self) -> Vec<(&str, bool)> {
        match self {
            OpenMenu::Context { actions, .. } => actions
                .iter()
                .map(|a| (a.label(), a.is_destructive()))
                .collect(),
            OpenMenu::Actions { actions, .. } => actions
                .iter()
                .map(|a| (a.name(), a.is_destructive()))
                .collect(),
        }
    }

    /// Runs the highlighted entry. Bar actions are re-checked against the
    /// bar at invocation time.
    pub(super) fn invoke(&self, controller: &mut Controller) -> bool {
        match self {
            OpenMenu::Context { actions, cursor } => actions
                .get(*cursor)
                .is_some_and(|a| a.invoke(controller)),
            OpenMenu::Actions { actions, cursor } => actions
                .get(*cursor)
                .is_some_and(|a| controller.invoke_bar_action(*a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_entry_uses_current_membership() {
        let mut c = Controller::seeded();
        let apple = c.items()[0].id();
        let menu = c.long_press_row(apple);
        assert_eq!(menu[0].label(), "Select");

        // Selected through another path after the menu was built.
        c.select(apple);
        assert!(menu[0].invoke(&mut c));
        assert!(!c.is_selected(apple));
    }

    #[test]
    fn test_delete_entry_removes_only_target() {
        let mut c = Controller::seeded();
        let banana = c.items()[1].id();
        let cherry = c.items()[2].id();
        c.select(cherry);

        let menu = c.long_press_row(banana);
        assert_eq!(menu[1].kind(), ContextActionKind::Delete);
        assert!(menu[1].invoke(&mut c));

        let labels: Vec<_> = c.items().iter().map(|i| i.label()).collect();
        assert_eq!(labels, ["Apple", "Cherry"]);
        assert!(c.is_selected(cherry));
    }

    #[test]
    fn test_entry_survives_reordering_by_identity() {
        let mut c = Controller::seeded();
        let apple = c.items()[0].id();
        let cherry = c.items()[2].id();
        let menu = c.long_press_row(cherry);

        // Cherry moves from index 2 to index 1.
        c.delete_item(apple);
        assert!(menu[0].invoke(&mut c));
        assert!(c.is_selected(cherry));
        assert_eq!(c.selection_count(), 1);
    }

    #[test]
    fn test_open_menu_cursor_is_clamped() {
        let mut c = Controller::seeded();
        let apple = c.items()[0].id();
        let mut menu = OpenMenu::Context {
            actions: c.long_press_row(apple),
            cursor: 0,
        };
        menu.move_up();
        assert_eq!(menu.cursor(), 0);
        menu.move_down();
        menu.move_down();
        assert_eq!(menu.cursor(), 1);
        assert_eq!(menu.entries(), vec![("Select", false), ("Delete", true)]);

        assert!(menu.invoke(&mut c));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_stale_actions_menu_is_rechecked() {
        let mut c = Controller::seeded();
        let apple = c.items()[0].id();
        c.select(apple);
        let menu = OpenMenu::Actions {
            actions: c.bar_descriptor().actions,
            cursor: 0,
        };
        c.clear_selection();

        assert!(!menu.invoke(&mut c));
        assert_eq!(c.len(), 3);
    }
}
