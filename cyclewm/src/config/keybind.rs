use crate::BaseCommand;
use crate::Config;
use cyclewm_core::errors::{CycleError, Result};
use cyclewm_core::utils::xkeysym_lookup;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub key: String,
}

impl Keybind {
    /// Resolve the command and the `modkey` placeholder.
    ///
    /// # Errors
    ///
    /// Fails on an unknown key name or a bad command value.
    pub fn try_convert_to_core_keybind(&self, config: &Config) -> Result<cyclewm_core::config::Keybind> {
        if xkeysym_lookup::into_keysym(&self.key).is_none() {
            return Err(CycleError::UnknownKey(self.key.clone()));
        }
        let command = self.command.into_command(&self.value)?;
        Ok(cyclewm_core::config::Keybind {
            command,
            modifier: self.modifiers(config),
            key: self.key.clone(),
        })
    }

    /// Modifier names with `modkey` replaced by the configured one.
    pub fn modifiers(&self, config: &Config) -> Vec<String> {
        self.modifier
            .as_ref()
            .map(Vec::<String>::from)
            .unwrap_or_default()
            .into_iter()
            .map(|m| if m == "modkey" { config.modkey.clone() } else { m })
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl std::convert::From<&Modifier> for Vec<String> {
    fn from(m: &Modifier) -> Self {
        match m {
            Modifier::Single(modifier) => vec![modifier.clone()],
            Modifier::List(modifiers) => modifiers.clone(),
        }
    }
}

impl std::convert::From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl std::convert::From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}
