//! Keybinding definitions
//!
//! Defines all keyboard shortcuts for different contexts. The help dialog
//! is generated from this table.

use crossterm::event::KeyCode;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Keys that trigger the action; the first is the primary one
    pub keys: &'static [KeyCode],
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

impl Keybinding {
    /// Human-readable key names, alternates separated by slashes
    pub fn key_label(&self) -> String {
        self.keys.iter().map(|k| key_name(*k)).collect::<Vec<_>>().join(" / ")
    }

    /// Check if a key triggers this binding
    pub fn matches(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }
}

fn key_name(key: KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        other => format!("{:?}", other),
    }
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active in the Estimates vs Actuals section
    Estimates,
    /// Active in dialogs
    Dialog,
}

impl KeyContext {
    /// Heading used in the help dialog
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Estimates => "Estimates vs Actuals",
            Self::Dialog => "Dialogs",
        }
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        keys: &[KeyCode::Char('q'), KeyCode::Char('Q')],
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: &[KeyCode::Char('?')],
        description: "Help",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: &[KeyCode::Tab, KeyCode::Right, KeyCode::Char('l')],
        description: "Next section",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: &[KeyCode::BackTab, KeyCode::Left, KeyCode::Char('h')],
        description: "Previous section",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: &[KeyCode::Char('1')],
        description: "Overview",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: &[KeyCode::Char('2')],
        description: "Estimates vs Actuals",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: &[KeyCode::Char('3')],
        description: "Cash Flow Graph",
        context: KeyContext::Global,
    },
    // Estimates vs Actuals
    Keybinding {
        keys: &[KeyCode::Char('s')],
        description: "Summary table",
        context: KeyContext::Estimates,
    },
    Keybinding {
        keys: &[KeyCode::Char('e')],
        description: "Estimates only",
        context: KeyContext::Estimates,
    },
    Keybinding {
        keys: &[KeyCode::Char('a')],
        description: "Actuals only",
        context: KeyContext::Estimates,
    },
    Keybinding {
        keys: &[KeyCode::Char('f')],
        description: "Next column filter",
        context: KeyContext::Estimates,
    },
    Keybinding {
        keys: &[KeyCode::Char('F')],
        description: "Previous column filter",
        context: KeyContext::Estimates,
    },
    // Dialog
    Keybinding {
        keys: &[KeyCode::Esc, KeyCode::Enter, KeyCode::Char('?'), KeyCode::Char('q')],
        description: "Close dialog",
        context: KeyContext::Dialog,
    },
];

/// Keybindings for a context, in table order
pub fn bindings_for(context: KeyContext) -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(move |k| k.context == context)
}

/// Check if a key is listed for a context
pub fn is_listed(context: KeyContext, key: KeyCode) -> bool {
    bindings_for(context).any(|b| b.matches(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_keys_per_context() {
        for context in [KeyContext::Global, KeyContext::Estimates, KeyContext::Dialog] {
            let keys: Vec<_> = bindings_for(context)
                .flat_map(|k| k.keys.iter().copied())
                .collect();
            for (i, key) in keys.iter().enumerate() {
                assert!(!keys[i + 1..].contains(key), "{:?} bound twice", key);
            }
        }
    }

    #[test]
    fn test_key_labels() {
        let next = bindings_for(KeyContext::Global)
            .find(|k| k.matches(KeyCode::Tab))
            .unwrap();
        assert_eq!(next.key_label(), "Tab / → / l");

        let quit = bindings_for(KeyContext::Global)
            .find(|k| k.description == "Quit")
            .unwrap();
        assert_eq!(quit.key_label(), "q / Q");
        assert_eq!(bindings_for(KeyContext::Estimates).count(), 5);
    }

    #[test]
    fn test_is_listed() {
        assert!(is_listed(KeyContext::Global, KeyCode::Char('h')));
        assert!(is_listed(KeyContext::Dialog, KeyCode::Enter));
        assert!(!is_listed(KeyContext::Estimates, KeyCode::Tab));
    }
}
