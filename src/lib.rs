#![warn(missing_docs)]

//! # selectable-list
//!
//! A multi-select list component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, with a navigation bar whose title and bulk actions follow the
//! current selection.
//!
//! ## Overview
//!
//! The crate has a headless core and a terminal widget built on it:
//!
//! - **`Controller`**: owns an ordered list of items and the set of selected
//!   identities, and exposes select, deselect, toggle, select-all, clear and
//!   delete-selected. The selection never refers to an item that is gone.
//! - **`bar_descriptor`**: pure derivation of the bar title (`"Items"` or
//!   `"N selected"`) and its actions (`Delete`, optionally `Select All`).
//! - **`Model`**: a bubbletea-rs component with `init()`, `update()` and
//!   `view()` that renders rows with checkmarks, the bar, row context menus and
//!   the bar's actions menu.
//!
//! ## Headless Use
//!
//! ```rust
//! use selectable_list::selection::{BarAction, Controller};
//!
//! let mut controller = Controller::seeded();
//! let banana = controller.items()[1].id();
//!
//! controller.tap_row(banana);
//! let bar = controller.bar_descriptor();
//! assert_eq!(bar.title, "1 selected");
//! assert_eq!(bar.entries()[0], ("Delete", true));
//!
//! controller.invoke_bar_action(BarAction::Delete);
//! assert_eq!(controller.len(), 2);
//! assert_eq!(controller.bar_descriptor().title, "Items");
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use selectable_list::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     list: SelectableList,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { list: SelectableList::new(Controller::seeded(), 80) }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.list.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.list.view()
//!     }
//! }
//! ```

pub mod help;
pub mod key;
pub mod selection;

pub use help::Model as HelpModel;
pub use key::{Binding, Help as KeyHelp, KeyPress};
pub use selection::Model as SelectableList;
pub use selection::{
    bar_descriptor, BarAction, BarDescriptor, Config, ContextAction, ContextActionKind,
    Controller, Item, ItemId, ParseBarActionError, SelectionKeyMap, SelectionStyles, Snapshot,
    Subscription,
};

/// Convenience re-exports of the most commonly used items.
pub mod prelude {
    pub use crate::help::{KeyMap, Model as HelpModel};
    pub use crate::key::{Binding, Help as KeyHelp, KeyPress};
    pub use crate::selection::Model as SelectableList;
    pub use crate::selection::{
        bar_descriptor, BarAction, BarDescriptor, Config, ContextAction, ContextActionKind,
        Controller, Item, ItemId, SelectionKeyMap, SelectionStyles, Snapshot,
    };
}
