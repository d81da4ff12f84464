use super::{Config, Keybind};
use cyclewm_core::utils::modmask_lookup;
use cyclewm_core::ModMask;
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;

impl Config {
    pub fn check_log_level(&self, verbose: bool) -> bool {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => {
                if verbose {
                    println!("Log level is ok.");
                }
                true
            }
            Err(err) => {
                println!("\x1b[1;91mERROR: Log level is invalid: {err}\x1b[0m");
                false
            }
        }
    }

    /// Check all keybinds to ensure that required values are provided
    /// Checks to see if value is provided (if required)
    /// Checks to see if keys are valid against Xkeysym
    /// Returns false if anything was reported.
    pub fn check_keybinds(&self, verbose: bool) -> bool {
        println!("\x1b[0;94m::\x1b[0m Checking keybinds . . .");
        if verbose {
            for keybind in &self.keybind {
                println!(
                    "Keybind: {:?} value field is empty: {}",
                    keybind,
                    keybind.value.is_empty()
                );
            }
        }
        let returns = self.keybind_errors();
        if returns.is_empty() {
            println!("\x1b[0;92m    -> All keybinds OK\x1b[0m");
            return true;
        }
        for error in returns {
            match error.0 {
                Some(binding) => {
                    println!(
                        "\x1b[1;91mERROR: {} for keybind {binding:?}\x1b[0m",
                        error.1
                    );
                }
                None => {
                    println!("\x1b[1;91mERROR: {} \x1b[0m", error.1);
                }
            }
        }
        false
    }

    pub fn keybind_errors(&self) -> Vec<(Option<Keybind>, String)> {
        let mut returns = Vec::new();
        let mut bindings = HashSet::new();
        for keybind in &self.keybind {
            if let Err(err) = keybind.try_convert_to_core_keybind(self) {
                returns.push((Some(keybind.clone()), err.to_string()));
            }

            let mut modifiers = keybind.modifiers(self);
            for m in &modifiers {
                if modmask_lookup::into_mod(m) == ModMask::Zero {
                    returns.push((
                        Some(keybind.clone()),
                        format!("Modifier `{m}` is not valid"),
                    ));
                }
            }

            // a stacked cycle only ends when its modifiers are released
            if keybind.command.is_stacked()
                && modmask_lookup::into_modmask(&modifiers) == ModMask::Zero
            {
                returns.push((
                    Some(keybind.clone()),
                    "Stacked cycling needs at least one modifier".to_owned(),
                ));
            }

            modifiers.sort_unstable();
            let combo = (modifiers.join("+"), keybind.key.clone());
            if !bindings.insert(combo.clone()) {
                returns.push((
                    None,
                    format!(
                        "\x1b[0m\x1b[1mMultiple commands bound to key combination {} + {}:\
                    \n\x1b[1;91m    -> {:?}\
                    \n\x1b[0mHelp: change one of the keybindings to something else.\n",
                        combo.0, combo.1, keybind.command,
                    ),
                ));
            }
        }
        returns
    }
}
