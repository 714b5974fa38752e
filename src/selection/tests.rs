//! Tests for the selection widget driven through key messages.

use super::*;
use bubbletea_rs::Model as BubbleTeaModel;
use crossterm::event::{KeyCode, KeyModifiers};

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn ctrl(c: char) -> Msg {
    Box::new(KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    }) as Msg
}

fn plain(list: &Model) -> String {
    strip_ansi_escapes::strip_str(list.view())
}

fn labels(list: &Model) -> Vec<String> {
    list.controller()
        .items()
        .iter()
        .map(|i| i.label().to_string())
        .collect()
}

fn seeded() -> Model {
    Model::new(Controller::seeded(), 60)
}

#[test]
fn test_init_uses_reference_items() {
    let (list, cmd) = Model::init();
    assert!(cmd.is_none());
    assert_eq!(labels(&list), ["Apple", "Banana", "Cherry"]);
}

#[test]
fn test_idle_view() {
    let list = seeded();
    let out = plain(&list);
    assert!(out.contains("Items"));
    assert!(!out.contains("Actions"));
    assert!(out.contains("> "));
    assert!(!out.contains(style::CHECKMARK));
}

#[test]
fn test_space_toggles_row_under_cursor() {
    let mut list = seeded();
    list.update(key(KeyCode::Down));
    list.update(key(KeyCode::Char(' ')));

    let banana = list.controller().items()[1].id();
    assert!(list.controller().is_selected(banana));

    let out = plain(&list);
    assert!(out.contains("1 selected"));
    assert!(out.contains("Actions: Delete, Select All"));
    assert!(out.contains(&format!("{} Banana", style::CHECKMARK)));

    list.update(key(KeyCode::Enter));
    assert!(!list.controller().is_selected(banana));
    assert!(plain(&list).contains("Items"));
}

#[test]
fn test_cursor_stays_in_bounds() {
    let mut list = seeded();
    list.update(key(KeyCode::Up));
    assert_eq!(list.cursor(), 0);
    for _ in 0..5 {
        list.update(key(KeyCode::Char('j')));
    }
    assert_eq!(list.cursor(), 2);
}

#[test]
fn test_delete_selected_from_keyboard() {
    let mut list = seeded();
    list.update(key(KeyCode::Down));
    list.update(key(KeyCode::Char(' ')));
    list.update(key(KeyCode::Down));
    list.update(key(KeyCode::Char(' ')));
    assert_eq!(list.controller().selection_count(), 2);

    list.update(key(KeyCode::Char('d')));
    assert_eq!(labels(&list), ["Apple"]);
    assert_eq!(list.controller().selection_count(), 0);
    assert_eq!(list.cursor(), 0);
    assert!(plain(&list).contains("Items"));
}

#[test]
fn test_delete_with_nothing_selected_does_nothing() {
    let mut list = seeded();
    list.update(key(KeyCode::Char('d')));
    assert_eq!(list.controller().len(), 3);
}

#[test]
fn test_actions_menu_select_all_then_delete() {
    let mut list = seeded();
    // Nothing selected: the menu stays closed.
    list.update(key(KeyCode::Char('a')));
    assert!(!list.is_menu_open());

    list.update(key(KeyCode::Char(' ')));
    list.update(key(KeyCode::Char('a')));
    assert!(list.is_menu_open());
    let out = plain(&list);
    assert!(out.contains("Delete"));
    assert!(out.contains("Select All"));

    // Second entry is Select All.
    list.update(key(KeyCode::Down));
    list.update(key(KeyCode::Enter));
    assert!(!list.is_menu_open());
    assert_eq!(list.controller().selection_count(), 3);
    assert!(plain(&list).contains("3 selected"));

    list.update(key(KeyCode::Char('a')));
    list.update(key(KeyCode::Enter));
    assert!(list.controller().is_empty());
    assert!(plain(&list).contains("No items."));
}

#[test]
fn test_row_menu_toggle_and_delete() {
    let mut list = seeded();
    list.update(key(KeyCode::Down));
    list.update(key(KeyCode::Char('m')));
    assert!(list.is_menu_open());
    let out = plain(&list);
    assert!(out.contains("Select"));
    assert!(out.contains("Delete"));

    list.update(key(KeyCode::Enter));
    let banana = list.controller().items()[1].id();
    assert!(list.controller().is_selected(banana));

    list.update(key(KeyCode::Char('m')));
    assert!(plain(&list).contains("Deselect"));
    list.update(key(KeyCode::Down));
    list.update(key(KeyCode::Enter));
    assert_eq!(labels(&list), ["Apple", "Cherry"]);
    assert_eq!(list.controller().selection_count(), 0);
}

#[test]
fn test_menu_keys_do_not_reach_rows() {
    let mut list = seeded();
    list.update(key(KeyCode::Char('m')));
    list.update(key(KeyCode::Char('d')));
    assert_eq!(list.controller().len(), 3);

    list.update(key(KeyCode::Esc));
    assert!(!list.is_menu_open());
    assert_eq!(list.controller().selection_count(), 0);
}

#[test]
fn test_stale_row_menu_after_external_delete() {
    let mut list = seeded();
    list.update(key(KeyCode::Char('m')));

    let apple = list.controller().items()[0].id();
    list.controller_mut().select(apple);
    list.controller_mut().delete_selected();

    list.update(key(KeyCode::Enter));
    assert!(!list.is_menu_open());
    assert_eq!(labels(&list), ["Banana", "Cherry"]);
    assert_eq!(list.controller().selection_count(), 0);
}

#[test]
fn test_ctrl_a_and_esc() {
    let mut list = seeded();
    list.update(ctrl('a'));
    assert_eq!(list.controller().selection_count(), 3);
    list.update(key(KeyCode::Esc));
    assert_eq!(list.controller().selection_count(), 0);
    assert_eq!(list.controller().len(), 3);
}

#[test]
fn test_quit_commands() {
    let mut list = seeded();
    assert!(list.update(key(KeyCode::Char('q'))).is_some());
    assert!(list.update(ctrl('c')).is_some());
    assert!(list.update(key(KeyCode::Char('x'))).is_none());
}

#[test]
fn test_help_follows_state() {
    let mut list = seeded();
    let out = plain(&list);
    assert!(out.contains("space select"));
    assert!(!out.contains("delete selected"));

    list.update(key(KeyCode::Char(' ')));
    assert!(plain(&list).contains("delete selected"));

    list.update(key(KeyCode::Char('m')));
    assert!(plain(&list).contains("close menu"));
}

#[test]
fn test_long_labels_are_truncated() {
    let controller = Controller::new(["An extraordinarily long fruit name"]);
    let list = Model::new(controller, 20).with_show_help(false);
    let out = plain(&list);
    assert!(out.contains(style::ELLIPSIS));
    assert!(!out.contains("fruit name"));
}

#[test]
fn test_observer_sees_keyboard_changes() {
    use std::sync::{Arc, Mutex};

    let mut list = seeded();
    let titles: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = Arc::clone(&titles);
    list.controller_mut()
        .subscribe(move |snap| sink.lock().unwrap().push(snap.bar.title.clone()));

    list.update(key(KeyCode::Char(' ')));
    list.update(key(KeyCode::Char('d')));

    assert_eq!(*titles.lock().unwrap(), ["1 selected", "Items"]);
}
