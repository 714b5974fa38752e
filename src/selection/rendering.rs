//! View rendering for the selection widget.
//!
//! Every frame is rebuilt from the controller's read state:
//! - Header: navigation title plus an actions hint when the bar offers actions
//! - Rows: cursor marker, checkmark for selected rows, label
//! - Menu: entries of the open row or actions menu, destructive ones in red
//! - Footer: key help

use super::menu::OpenMenu;
use super::style::{CHECKMARK, CURSOR, ELLIPSIS};
use super::Model;
use unicode_width::UnicodeWidthChar;

/// Cuts `text` to at most `max` columns, ending with an ellipsis when cut.
pub(super) fn truncate(text: &str, max: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

impl Model {
    pub(super) fn view_header(&self) -> String {
        let bar = self.controller.bar_descriptor();
        let mut header = self.styles.title.clone().render(&bar.title);
        if !bar.actions.is_empty() {
            let names: Vec<&str> = bar.actions.iter().map(|a| a.name()).collect();
            let hint = format!("  Actions: {}", names.join(", "));
            header.push_str(&self.styles.actions_hint.clone().render(&hint));
        }
        self.styles.title_bar.clone().render(&header)
    }

    pub(super) fn view_rows(&self) -> String {
        if self.controller.is_empty() {
            return self.styles.no_items.clone().render("  No items.");
        }

        // cursor (2) + checkmark (2) + left padding (2)
        let label_width = self.width.saturating_sub(6).max(1);
        let cursor = self.cursor();
        let menu_open = self.menu.is_some();

        self.controller
            .rows()
            .into_iter()
            .enumerate()
            .map(|(index, (item, selected))| {
                let marker = if index == cursor && !menu_open {
                    self.styles.cursor.clone().render(CURSOR)
                } else {
                    " ".to_string()
                };
                let check = if selected {
                    self.styles.checkmark.clone().render(CHECKMARK)
                } else {
                    " ".to_string()
                };
                let label = truncate(item.label(), label_width);
                let label = if selected {
                    self.styles.selected_row.clone().render(&label)
                } else {
                    self.styles.row.clone().render(&label)
                };
                format!("  {} {} {}", marker, check, label)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(super) fn view_menu(&self) -> String {
        let Some(menu) = &self.menu else {
            return String::new();
        };
        let title = match menu {
            OpenMenu::Context { actions, .. } => actions
                .first()
                .and_then(|a| self.controller.get(a.target()))
                .map(|item| item.label().to_string())
                .unwrap_or_default(),
            OpenMenu::Actions { .. } => "Actions".to_string(),
        };

        let mut lines = vec![self.styles.menu_title.clone().render(&format!("  {}", title))];
        for (index, (label, destructive)) in menu.entries().into_iter().enumerate() {
            let marker = if index == menu.cursor() {
                self.styles.cursor.clone().render(CURSOR)
            } else {
                " ".to_string()
            };
            let style = if destructive {
                &self.styles.destructive_item
            } else {
                &self.styles.menu_item
            };
            lines.push(format!("    {} {}", marker, style.clone().render(label)));
        }
        lines.join("\n")
    }

    pub(super) fn view_footer(&self) -> String {
        if !self.show_help {
            return String::new();
        }
        let help = self.help.view(self);
        if help.is_empty() {
            return help;
        }
        self.styles.help.clone().render(&help)
    }
}
