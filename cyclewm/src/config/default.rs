use super::{Config, Keybind};
use crate::BaseCommand;
use cyclewm_core::models::PopupStyle;

impl Default for Config {
    fn default() -> Self {
        let commands = vec![
            // Mod + Tab => walk the focus history
            Keybind {
                command: BaseCommand::FocusNextStacked,
                value: String::default(),
                modifier: Some("modkey".into()),
                key: "Tab".to_owned(),
            },
            // Mod + Shift + Tab => walk the focus history backwards
            Keybind {
                command: BaseCommand::FocusPreviousStacked,
                value: String::default(),
                modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
                key: "Tab".to_owned(),
            },
            // Super + j => next window on the screen
            Keybind {
                command: BaseCommand::FocusNext,
                value: "1".to_owned(),
                modifier: Some("Mod4".into()),
                key: "j".to_owned(),
            },
            // Super + k => previous window on the screen
            Keybind {
                command: BaseCommand::FocusPrevious,
                value: "1".to_owned(),
                modifier: Some("Mod4".into()),
                key: "k".to_owned(),
            },
        ];

        Self {
            modkey: "Mod1".to_owned(),
            cycle_raise: true,
            stacked_cycle_raise: false,
            stacked_cycle_popup_list: true,
            fallback: false,
            log_level: "info".to_owned(),
            popup: PopupStyle::default(),
            keybind: commands,
        }
    }
}
