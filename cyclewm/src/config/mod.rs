//! `cyclewm` general configuration

mod checks;
mod default;
mod keybind;

pub use self::keybind::{Keybind, Modifier};

use anyhow::{Context, Result};
use cyclewm_core::models::PopupStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use xdg::BaseDirectories;

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    pub modkey: String,
    /// Raise the window a stacked cycle ends on, and every linear step.
    pub cycle_raise: bool,
    pub stacked_cycle_raise: bool,
    pub stacked_cycle_popup_list: bool,
    pub fallback: bool,
    pub log_level: String,
    pub popup: PopupStyle,
    pub keybind: Vec<Keybind>,
}

#[must_use]
pub fn load() -> Config {
    load_from_file()
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

/// Load `$XDG_CONFIG_HOME/cyclewm/config.toml`, writing the defaults there
/// on first run.
///
/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.toml, if config.toml cannot be read (access writes, malformed file,
/// etc.).
pub fn load_from_file() -> Result<Config> {
    let path = BaseDirectories::with_prefix("cyclewm")?;
    let config_filename = path.place_config_file("config.toml")?;
    if config_filename.exists() {
        load_from_path(&config_filename)
    } else {
        let config = Config::default();
        let toml = toml::to_string(&config).context("could not serialize the default config")?;
        fs::write(&config_filename, toml)
            .with_context(|| format!("could not write {}", config_filename.display()))?;
        Ok(config)
    }
}

/// # Errors
///
/// Fails when the file cannot be read or is not a valid config.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let config = toml::from_str(&contents)
        .with_context(|| format!("could not parse {}", path.display()))?;
    Ok(config)
}

impl cyclewm_core::Config for Config {
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
        self.popup
    }

    fn mapped_bindings(&self) -> Vec<cyclewm_core::config::Keybind> {
        self.keybind
            .iter()
            .filter_map(|keybind| match keybind.try_convert_to_core_keybind(self) {
                Ok(bind) => Some(bind),
                Err(err) => {
                    tracing::warn!("Ignoring keybind {:?}: {}", keybind, err);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclewm_core::Command;
    use cyclewm_core::Config as _;
    use std::io::Write;

    fn from_toml(contents: &str) -> Config {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        load_from_path(file.path()).unwrap()
    }

    #[test]
    fn missing_options_take_their_defaults() {
        let config = from_toml("fallback = true\n");
        assert!(config.fallback);
        assert!(config.cycle_raise);
        assert!(!config.stacked_cycle_raise);
        assert!(config.stacked_cycle_popup_list);
        assert_eq!(config.popup, PopupStyle::default());
        assert!(!config.keybind.is_empty());
    }

    #[test]
    fn keybinds_are_read_with_single_or_listed_modifiers() {
        let config = from_toml(
            r#"
            modkey = "Mod4"
            cycle_raise = false

            [popup]
            row_height = 24

            [[keybind]]
            command = "FocusNextStacked"
            modifier = "modkey"
            key = "Tab"

            [[keybind]]
            command = "FocusPrevious"
            value = "2"
            modifier = ["modkey", "Shift"]
            key = "k"
            "#,
        );
        assert!(!config.cycle_raise);
        assert_eq!(config.popup.row_height, 24);
        assert_eq!(config.popup.char_width, PopupStyle::default().char_width);

        let binds = config.mapped_bindings();
        assert_eq!(binds.len(), 2);
        assert_eq!(binds[0].modifier, vec!["Mod4".to_owned()]);
        assert_eq!(binds[1].command, Command::FocusPrevious { count: 2 });
    }

    #[test]
    fn broken_keybinds_are_left_out_of_the_bindings() {
        let config = from_toml(
            r#"
            [[keybind]]
            command = "FocusNext"
            value = "many"
            modifier = "Mod4"
            key = "j"

            [[keybind]]
            command = "Quit"
            modifier = "Mod4"
            key = "q"
            "#,
        );
        let binds = config.mapped_bindings();
        assert_eq!(binds.len(), 1);
        assert_eq!(binds[0].command, Command::Quit);
    }

    #[test]
    fn the_default_config_survives_a_round_trip_through_toml() {
        let toml = toml::to_string(&Config::default()).unwrap();
        let config: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.keybind.len(), Config::default().keybind.len());
    }

    #[test]
    fn unreadable_files_are_errors() {
        assert!(load_from_path(Path::new("/nonexistent/cyclewm.toml")).is_err());
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"cycle_raise = \"yes\"").unwrap();
        assert!(load_from_path(file.path()).is_err());
    }
}
