//! Type-safe key bindings shared by every component in this crate.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es with the help text shown in
//! the footer. Components match incoming `KeyMsg`s against their bindings
//! instead of comparing raw key codes, which keeps remapping in one place.
//!
//! ```rust
//! use selectable_list::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let toggle = Binding::new(vec![KeyCode::Char(' '), KeyCode::Enter]).with_help("space", "toggle");
//! let msg = KeyMsg { key: KeyCode::Char(' '), modifiers: KeyModifiers::NONE };
//! assert!(toggle.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers required alongside `code`. Shift is ignored when matching.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl KeyPress {
    /// Returns true if `msg` is this key combination.
    ///
    /// Shift is stripped from both sides so that `G` matches whether or not the
    /// terminal reports the shift modifier.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.code == msg.key
            && self.mods.difference(KeyModifiers::SHIFT)
                == msg.modifiers.difference(KeyModifiers::SHIFT)
    }
}

/// Help text for a binding, rendered as `key desc` in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label such as `"↑/k"`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A named set of key presses that trigger the same action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into [`KeyPress`].
    ///
    /// ```rust
    /// use selectable_list::key::Binding;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let quit = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
    /// assert_eq!(quit.keys().len(), 1);
    /// ```
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Marks the binding as disabled. Disabled bindings never match and are
    /// hidden from help output.
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Enables or disables the binding in place.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns whether the binding is active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// The key presses bound to this action.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns true if the binding is enabled and any of its keys match `msg`.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Returns true if `msg` matches any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_plain_binding_matches() {
        let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up");
        assert!(b.matches(&key(KeyCode::Up, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Down, KeyModifiers::NONE)));
        assert_eq!(b.help().key, "↑/k");
    }

    #[test]
    fn test_modifiers_must_match() {
        let b = Binding::new(vec![(KeyCode::Char('a'), KeyModifiers::CONTROL)]);
        assert!(b.matches(&key(KeyCode::Char('a'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('a'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_shift_is_ignored() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]).with_disabled();
        assert!(!b.enabled());
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));

        b.set_enabled(true);
        assert!(matches(&key(KeyCode::Enter, KeyModifiers::NONE), &[&b]));
    }
}
