//! Multi-select list with a navigation bar that follows the selection.
//!
//! The module is split into a headless core and a widget on top of it:
//!
//! - [`Controller`]: owns the ordered items and the set of selected identities.
//!   All mutations go through it, and `selected ⊆ items` holds before and after
//!   every call. Unknown identities are silently ignored.
//! - [`bar_descriptor`]: pure function from items and selection to the
//!   navigation title (`"Items"` / `"N selected"`) and its bulk actions.
//! - [`ContextAction`]: long-press menu entries that capture a row's identity
//!   and re-check it when fired.
//! - [`Model`]: a bubbletea-rs component that draws the rows, the bar and any
//!   open menu, and forwards key presses to the controller.
//!
//! ### Render Contract
//! After any change the presentation layer can read `Controller::rows()` and
//! `Controller::bar_descriptor()`, or subscribe to receive a [`Snapshot`]
//! containing both. Views are rebuilt from scratch each frame.
//!
//! ### Help Integration
//! `Model` implements `help::KeyMap`; the footer changes depending on whether a
//! menu is open and whether anything is selected.

mod bar;
mod config;
mod controller;
mod error;
mod menu;
mod model;
mod rendering;
mod types;

/// Key bindings for the selection widget.
pub mod keys;

/// Visual styling for the selection widget.
pub mod style;

#[cfg(test)]
mod tests;

pub use bar::bar_descriptor;
pub use config::Config;
pub use controller::{Controller, Observer, Subscription};
pub use error::ParseBarActionError;
pub use keys::SelectionKeyMap;
pub use menu::{ContextAction, ContextActionKind};
pub use model::Model;
pub use style::SelectionStyles;
pub use types::{BarAction, BarDescriptor, Item, ItemId, Row, Snapshot};

use crate::{help, key};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};

impl help::KeyMap for Model {
    /// While a menu is open only menu keys are listed. Otherwise the bulk
    /// actions appear once something is selected.
    fn short_help(&self) -> Vec<&key::Binding> {
        if self.menu.is_some() {
            return vec![
                &self.keymap.menu_up,
                &self.keymap.menu_down,
                &self.keymap.menu_choose,
                &self.keymap.menu_close,
            ];
        }

        let mut bindings = vec![
            &self.keymap.cursor_up,
            &self.keymap.cursor_down,
            &self.keymap.toggle,
        ];
        if self.controller.selection_count() > 0 {
            bindings.push(&self.keymap.delete);
            bindings.push(&self.keymap.actions_menu);
        }
        bindings.push(&self.keymap.context_menu);
        bindings.push(&self.keymap.quit);
        bindings.push(&self.keymap.show_full_help);
        bindings
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            // Rows
            vec![
                &self.keymap.cursor_up,
                &self.keymap.cursor_down,
                &self.keymap.toggle,
                &self.keymap.context_menu,
            ],
            // Selection
            vec![
                &self.keymap.actions_menu,
                &self.keymap.delete,
                &self.keymap.select_all,
                &self.keymap.clear,
            ],
            // Help and quit
            vec![
                &self.keymap.show_full_help,
                &self.keymap.quit,
                &self.keymap.force_quit,
            ],
        ]
    }
}

impl Model {
    fn update_menu(&mut self, key_msg: &KeyMsg) {
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        if self.keymap.menu_up.matches(key_msg) {
            menu.move_up();
        } else if self.keymap.menu_down.matches(key_msg) {
            menu.move_down();
        } else if self.keymap.menu_choose.matches(key_msg) {
            self.choose_menu_entry();
        } else if self.keymap.menu_close.matches(key_msg) {
            self.close_menu();
        }
    }
}

impl BubbleTeaModel for Model {
    /// Starts with the reference items (Apple, Banana, Cherry), 80 columns wide.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Controller::seeded(), 80), None)
    }

    /// Handles key presses and window resizes.
    ///
    /// With a menu open, keys move within the menu, choose an entry, or close
    /// it. Otherwise keys move the row cursor, toggle rows, open menus, and run
    /// bulk actions.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.set_width(size.width as usize);
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keymap.force_quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }

        if self.menu.is_some() {
            self.update_menu(key_msg);
            return None;
        }

        if self.keymap.cursor_up.matches(key_msg) {
            self.cursor_up();
        } else if self.keymap.cursor_down.matches(key_msg) {
            self.cursor_down();
        } else if self.keymap.toggle.matches(key_msg) {
            self.tap();
        } else if self.keymap.context_menu.matches(key_msg) {
            self.open_context_menu();
        } else if self.keymap.select_all.matches(key_msg) {
            self.controller.select_all();
        } else if self.keymap.actions_menu.matches(key_msg) {
            self.open_actions_menu();
        } else if self.keymap.delete.matches(key_msg) {
            self.controller.invoke_bar_action(BarAction::Delete);
        } else if self.keymap.clear.matches(key_msg) {
            self.controller.clear_selection();
        } else if self.keymap.show_full_help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
        } else if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }

        self.clamp_cursor();
        None
    }

    /// Renders the bar, the rows, any open menu and the help footer.
    ///
    /// ```
    /// # use selectable_list::selection::{Controller, Model};
    /// # use bubbletea_rs::Model as BubbleTeaModel;
    /// let list = Model::new(Controller::seeded(), 40);
    /// let out = strip_ansi_escapes::strip_str(list.view());
    /// assert!(out.contains("Items"));
    /// assert!(out.contains("Banana"));
    /// ```
    fn view(&self) -> String {
        let sections = [
            self.view_header(),
            self.view_rows(),
            self.view_menu(),
            self.view_footer(),
        ];
        sections
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
