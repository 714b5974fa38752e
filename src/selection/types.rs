//! Core value types for the selection component.
//!
//! - `ItemId`: stable, opaque identity of a row
//! - `Item`: one selectable row (identity + label)
//! - `BarAction` and `BarDescriptor`: what the navigation bar offers
//! - `Row` and `Snapshot`: the render contract handed to observers and views

use super::error::ParseBarActionError;
use std::fmt::{self, Display};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identity of an item.
///
/// Generated once when an item is created and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generates a fresh random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ItemId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A selectable row.
///
/// # Examples
///
/// ```
/// use selectable_list::selection::Item;
///
/// let apple = Item::new("Apple");
/// assert_eq!(apple.label(), "Apple");
/// assert_eq!(apple.to_string(), "Apple");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    id: ItemId,
    label: String,
}

impl Item {
    /// Creates an item with a freshly generated identity.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_id(ItemId::new(), label)
    }

    /// Creates an item with a caller-supplied identity.
    pub fn with_id(id: ItemId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// The item's identity.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A bulk action offered by the navigation bar while items are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarAction {
    /// Remove every selected item. Destructive.
    Delete,
    /// Add every remaining item to the selection.
    SelectAll,
}

impl BarAction {
    /// The name shown in the bar menu.
    pub fn name(&self) -> &'static str {
        match self {
            BarAction::Delete => "Delete",
            BarAction::SelectAll => "Select All",
        }
    }

    /// Whether the action destroys data.
    pub fn is_destructive(&self) -> bool {
        matches!(self, BarAction::Delete)
    }
}

impl Display for BarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BarAction {
    type Err = ParseBarActionError;

    /// Parses an action name, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use selectable_list::selection::BarAction;
    ///
    /// assert_eq!("Delete".parse::<BarAction>().unwrap(), BarAction::Delete);
    /// assert_eq!(" select all ".parse::<BarAction>().unwrap(), BarAction::SelectAll);
    /// assert!("Share".parse::<BarAction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delete" => Ok(BarAction::Delete),
            "select all" | "select-all" | "selectall" => Ok(BarAction::SelectAll),
            _ => Err(ParseBarActionError::UnknownAction(s.to_string())),
        }
    }
}

/// Title and actions for the navigation bar.
///
/// Always derived from the current items and selection; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarDescriptor {
    /// Navigation title, e.g. `"Items"` or `"2 selected"`.
    pub title: String,
    /// Available actions in display order.
    pub actions: Vec<BarAction>,
}

impl BarDescriptor {
    /// The actions as `(name, is_destructive)` pairs.
    pub fn entries(&self) -> Vec<(&'static str, bool)> {
        self.actions
            .iter()
            .map(|a| (a.name(), a.is_destructive()))
            .collect()
    }

    /// Returns true if `action` is currently offered.
    pub fn offers(&self, action: BarAction) -> bool {
        self.actions.contains(&action)
    }
}

/// One row of the render contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The item shown in this row.
    pub item: Item,
    /// Whether the item is currently selected.
    pub selected: bool,
}

/// Everything a presentation layer needs to fully redraw the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Rows in display order.
    pub rows: Vec<Row>,
    /// The current navigation bar.
    pub bar: BarDescriptor,
}
