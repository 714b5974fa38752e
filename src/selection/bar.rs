//! Navigation bar derivation.

use super::config::Config;
use super::types::{BarAction, BarDescriptor, Item, ItemId};
use std::collections::HashSet;

/// Computes the navigation bar for the given items and selection.
///
/// With nothing selected the bar shows the idle title and no actions. Otherwise
/// the title is `"<N> selected"` and `Delete` is always the first action;
/// `Select All` follows when enabled in `config` and at least one item is
/// still unselected.
///
/// # Examples
///
/// ```
/// use selectable_list::selection::{bar_descriptor, BarAction, Config, Item};
/// use std::collections::HashSet;
///
/// let items = vec![Item::new("Apple"), Item::new("Banana")];
/// let mut selected = HashSet::new();
///
/// let bar = bar_descriptor(&items, &selected, &Config::default());
/// assert_eq!(bar.title, "Items");
/// assert!(bar.actions.is_empty());
///
/// selected.insert(items[1].id());
/// let bar = bar_descriptor(&items, &selected, &Config::default());
/// assert_eq!(bar.title, "1 selected");
/// assert_eq!(bar.actions, vec![BarAction::Delete, BarAction::SelectAll]);
/// ```
pub fn bar_descriptor(
    items: &[Item],
    selected: &HashSet<ItemId>,
    config: &Config,
) -> BarDescriptor {
    let count = items.iter().filter(|i| selected.contains(&i.id())).count();
    if count == 0 {
        return BarDescriptor {
            title: config.idle_title.clone(),
            actions: Vec::new(),
        };
    }

    let mut actions = vec![BarAction::Delete];
    if config.extension_actions && count < items.len() {
        actions.push(BarAction::SelectAll);
    }

    BarDescriptor {
        title: format!("{} {}", count, config.selected_suffix),
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<Item> {
        vec![Item::new("Apple"), Item::new("Banana"), Item::new("Cherry")]
    }

    #[test]
    fn test_empty_selection_is_idle() {
        let bar = bar_descriptor(&fruit(), &HashSet::new(), &Config::default());
        assert_eq!(bar.title, "Items");
        assert!(bar.actions.is_empty());
    }

    #[test]
    fn test_delete_is_first_and_destructive() {
        let items = fruit();
        let selected: HashSet<_> = [items[0].id(), items[2].id()].into_iter().collect();
        let bar = bar_descriptor(&items, &selected, &Config::default());
        assert_eq!(bar.title, "2 selected");
        assert_eq!(bar.entries()[0], ("Delete", true));
    }

    #[test]
    fn test_select_all_hidden_when_everything_selected() {
        let items = fruit();
        let selected: HashSet<_> = items.iter().map(Item::id).collect();
        let bar = bar_descriptor(&items, &selected, &Config::default());
        assert_eq!(bar.title, "3 selected");
        assert_eq!(bar.actions, vec![BarAction::Delete]);
    }

    #[test]
    fn test_extension_actions_disabled() {
        let items = fruit();
        let selected: HashSet<_> = [items[1].id()].into_iter().collect();
        let config = Config::default().with_extension_actions(false);
        let bar = bar_descriptor(&items, &selected, &config);
        assert_eq!(bar.actions, vec![BarAction::Delete]);
    }

    #[test]
    fn test_custom_titles() {
        let items = fruit();
        let config = Config::default()
            .with_idle_title("Fruit")
            .with_selected_suffix("picked");
        assert_eq!(bar_descriptor(&items, &HashSet::new(), &config).title, "Fruit");

        let selected: HashSet<_> = [items[0].id()].into_iter().collect();
        assert_eq!(bar_descriptor(&items, &selected, &config).title, "1 picked");
    }

    #[test]
    fn test_ids_outside_items_are_not_counted() {
        let items = fruit();
        let selected: HashSet<_> = [ItemId::new()].into_iter().collect();
        let bar = bar_descriptor(&items, &selected, &Config::default());
        assert_eq!(bar.title, "Items");
    }
}
