use crate::config::{Config, Keybind};
use crate::utils::{modmask_lookup, xkeysym_lookup};
use crate::{Command, ModMask, XKeysym};
use std::collections::HashMap;

pub struct CommandBuilder {
    keybinds: HashMap<(ModMask, XKeysym), Keybind>,
}

impl CommandBuilder {
    pub fn new(config: &impl Config) -> Self {
        let binds = config.mapped_bindings();
        let mut lookup = HashMap::new();
        for b in binds {
            match xkeysym_lookup::into_keysym(&b.key) {
                Some(key) => {
                    let id = (modmask_lookup::into_modmask(&b.modifier), key);
                    lookup.insert(id, b);
                }
                None => tracing::warn!("Skipping binding with unknown key {:?}", b.key),
            }
        }
        CommandBuilder { keybinds: lookup }
    }

    pub fn find_keybind_for(&self, m: ModMask, key: XKeysym) -> Option<&Keybind> {
        self.keybinds.get(&(m.cleaned(), key))
    }

    pub fn xkeyevent(&self, mask: ModMask, key: XKeysym) -> Option<Command> {
        self.find_keybind_for(mask, key).map(|bind| bind.command)
    }
}
