use crate::models::PopupStyle;
use crate::Command;
use serde::{Deserialize, Serialize};

/// A key binding with its modifier and key names still unresolved.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Keybind {
    pub command: Command,
    pub modifier: Vec<String>,
    pub key: String,
}

pub trait Config {
    /// Raise the chosen window when a stacked cycle is committed, and after
    /// each linear step.
    fn cycle_raise(&self) -> bool;

    /// Raise every window visited during a stacked cycle.
    fn stacked_cycle_raise(&self) -> bool;

    /// Show the list of candidates while a stacked cycle is held.
    fn stacked_cycle_popup_list(&self) -> bool;

    /// Focus something when the focused window goes away.
    fn fallback(&self) -> bool;

    fn popup_style(&self) -> PopupStyle;

    fn mapped_bindings(&self) -> Vec<Keybind>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[allow(clippy::module_name_repetitions)]
    #[allow(clippy::struct_excessive_bools)]
    pub struct TestConfig {
        pub cycle_raise: bool,
        pub stacked_cycle_raise: bool,
        pub stacked_cycle_popup_list: bool,
        pub fallback: bool,
        pub keybinds: Vec<Keybind>,
    }

    fn bind(command: Command, modifier: &[&str], key: &str) -> Keybind {
        Keybind {
            command,
            modifier: modifier.iter().map(|m| (*m).to_owned()).collect(),
            key: key.to_owned(),
        }
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                cycle_raise: true,
                stacked_cycle_raise: false,
                stacked_cycle_popup_list: true,
                fallback: false,
                keybinds: vec![
                    bind(Command::FocusNextStacked, &["Alt"], "Tab"),
                    bind(Command::FocusPreviousStacked, &["Alt", "Shift"], "Tab"),
                    bind(Command::FocusNext { count: 1 }, &["Super"], "j"),
                    bind(Command::FocusPrevious { count: 1 }, &["Super"], "k"),
                ],
            }
        }
    }

    impl Config for TestConfig {
        fn cycle_raise(&self) -> bool {
            self.cycle_raise
        }
        fn stacked_cycle_raise(&self) -> bool {
            self.stacked_cycle_raise
        }
        fn stacked_cycle_popup_list(&self) -> bool {
            self.stacked_cycle_popup_list
        }
        fn fallback(&self) -> bool {
            self.fallback
        }
        fn popup_style(&self) -> PopupStyle {
            PopupStyle::default()
        }
        fn mapped_bindings(&self) -> Vec<Keybind> {
            self.keybinds.clone()
        }
    }
}
