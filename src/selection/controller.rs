//! The selection controller: ordered items plus the set of selected identities.
//!
//! The controller is the only owner of both collections. Every mutation goes
//! through one of its methods, and each method restores the invariant
//! `selected ⊆ ids(items)` before returning or notifying observers. Unknown
//! identities are absorbed as no-ops, never errors.

use super::bar::bar_descriptor;
use super::config::Config;
use super::error::ParseBarActionError;
use super::menu::{ContextAction, ContextActionKind};
use super::types::{BarAction, BarDescriptor, Item, ItemId, Row, Snapshot};
use std::collections::HashSet;
use std::fmt;

/// Callback invoked with the full render state after every change.
pub type Observer = Box<dyn FnMut(&Snapshot) + Send>;

/// Handle returned by [`Controller::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Owns the item collection and the selection set.
///
/// # Examples
///
/// ```
/// use selectable_list::selection::{BarAction, Controller};
///
/// let mut c = Controller::seeded();
/// let banana = c.items()[1].id();
/// let cherry = c.items()[2].id();
///
/// c.select(banana);
/// assert_eq!(c.bar_descriptor().title, "1 selected");
///
/// c.select(cherry);
/// c.delete_selected();
/// let labels: Vec<_> = c.items().iter().map(|i| i.label()).collect();
/// assert_eq!(labels, ["Apple"]);
/// assert_eq!(c.bar_descriptor().title, "Items");
/// ```
pub struct Controller {
    items: Vec<Item>,
    selected: HashSet<ItemId>,
    config: Config,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("items", &self.items)
            .field("selected", &self.selected)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}

impl Controller {
    /// Creates a controller with one new item per label, in order.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_items(labels.into_iter().map(Item::new).collect())
    }

    /// Creates a controller seeded with the reference set: Apple, Banana, Cherry.
    pub fn seeded() -> Self {
        Self::new(["Apple", "Banana", "Cherry"])
    }

    /// Creates a controller from pre-built items.
    ///
    /// If two items share an identity, only the first is kept.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        let items: Vec<Item> = items
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.id());
                if !fresh {
                    tracing::debug!(id = %item.id(), "dropping item with duplicate id");
                }
                fresh
            })
            .collect();

        Self {
            items,
            selected: HashSet::new(),
            config: Config::default(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if an item with `id` is present.
    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    /// The item with `id`, if present.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id() == id)
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id() == id)
    }

    /// Adds `id` to the selection. Returns true if the selection changed.
    ///
    /// Selecting an id that is absent or already selected does nothing.
    pub fn select(&mut self, id: ItemId) -> bool {
        if !self.contains(id) {
            tracing::trace!(%id, "select ignored: unknown id");
            return false;
        }
        if !self.selected.insert(id) {
            return false;
        }
        tracing::debug!(%id, count = self.selected.len(), "selected item");
        self.notify();
        true
    }

    /// Removes `id` from the selection. Returns true if the selection changed.
    pub fn deselect(&mut self, id: ItemId) -> bool {
        if !self.selected.remove(&id) {
            tracing::trace!(%id, "deselect ignored: not selected");
            return false;
        }
        tracing::debug!(%id, count = self.selected.len(), "deselected item");
        self.notify();
        true
    }

    /// Flips the selection state of `id`. Returns true if anything changed.
    ///
    /// A single membership check decides the branch, so two toggles always
    /// cancel out for an item that stays present.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.selected.contains(&id) {
            self.deselect(id)
        } else {
            self.select(id)
        }
    }

    /// Selects every item.
    pub fn select_all(&mut self) -> bool {
        if self.selected.len() == self.items.len() {
            return false;
        }
        self.selected = self.items.iter().map(Item::id).collect();
        tracing::debug!(count = self.selected.len(), "selected all items");
        self.notify();
        true
    }

    /// Empties the selection without touching the items.
    pub fn clear_selection(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        tracing::debug!("cleared selection");
        self.notify();
        true
    }

    /// Removes every selected item, keeping survivors in their original order,
    /// and empties the selection. Returns the number of items removed.
    ///
    /// Observers see only the finished state.
    pub fn delete_selected(&mut self) -> usize {
        if self.selected.is_empty() {
            return 0;
        }
        let before = self.items.len();
        let selected = std::mem::take(&mut self.selected);
        self.items.retain(|item| !selected.contains(&item.id()));
        let removed = before - self.items.len();
        tracing::debug!(removed, remaining = self.items.len(), "deleted selected items");
        self.notify();
        removed
    }

    /// Removes a single item and its selection membership.
    ///
    /// Returns the removed item, or `None` if `id` is not present.
    pub fn delete_item(&mut self, id: ItemId) -> Option<Item> {
        let Some(index) = self.position(id) else {
            tracing::trace!(%id, "delete ignored: unknown id");
            return None;
        };
        let item = self.items.remove(index);
        self.selected.remove(&id);
        tracing::debug!(%id, remaining = self.items.len(), "deleted item");
        self.notify();
        Some(item)
    }

    /// Returns true if `id` is selected.
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    /// Number of selected items.
    pub fn selection_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected identities in display order.
    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.items
            .iter()
            .map(Item::id)
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    /// The navigation bar for the current state.
    pub fn bar_descriptor(&self) -> BarDescriptor {
        bar_descriptor(&self.items, &self.selected, &self.config)
    }

    /// Items paired with their selection state, in display order.
    pub fn rows(&self) -> Vec<(&Item, bool)> {
        self.items
            .iter()
            .map(|item| (item, self.selected.contains(&item.id())))
            .collect()
    }

    /// An owned copy of the full render state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self
                .rows()
                .into_iter()
                .map(|(item, selected)| Row {
                    item: item.clone(),
                    selected,
                })
                .collect(),
            bar: self.bar_descriptor(),
        }
    }

    /// Handles a tap on a row: toggles its selection.
    pub fn tap_row(&mut self, id: ItemId) -> bool {
        self.toggle(id)
    }

    /// Builds the context menu for a long press on a row.
    ///
    /// The actions capture the row's identity, not its position, and check
    /// that the item still exists when invoked. Unknown ids produce an empty
    /// menu.
    pub fn long_press_row(&self, id: ItemId) -> Vec<ContextAction> {
        if !self.contains(id) {
            return Vec::new();
        }
        let label = if self.is_selected(id) { "Deselect" } else { "Select" };
        let mut actions = vec![ContextAction::new(
            ContextActionKind::ToggleSelection,
            label,
            id,
        )];
        if self.config.row_delete {
            actions.push(ContextAction::new(ContextActionKind::Delete, "Delete", id));
        }
        actions
    }

    /// Runs a bar action if it is currently offered. Returns true if state
    /// changed.
    pub fn invoke_bar_action(&mut self, action: BarAction) -> bool {
        if !self.bar_descriptor().offers(action) {
            tracing::trace!(%action, "bar action ignored: not offered");
            return false;
        }
        match action {
            BarAction::Delete => self.delete_selected() > 0,
            BarAction::SelectAll => self.select_all(),
        }
    }

    /// Parses `name` and runs the matching bar action.
    ///
    /// Fails only when `name` is not a known action.
    pub fn invoke_bar_action_named(&mut self, name: &str) -> Result<bool, ParseBarActionError> {
        let action = name.parse::<BarAction>()?;
        Ok(self.invoke_bar_action(action))
    }

    /// Registers an observer called after every state change.
    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        let handle = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((handle, Box::new(observer)));
        handle
    }

    /// Removes an observer. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, handle: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(h, _)| *h != handle);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, observer) in self.observers.iter_mut() {
            observer(&snapshot);
        }
    }
}
