use anyhow::Result;
use clap::{arg, command};
use cyclewm::Config;
use std::path::Path;

fn main() -> Result<()> {
    let matches = command!("cyclewm Check")
        .about("Checks syntax of the configuration file")
        .help_template(cyclewm::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(String::as_str);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m cyclewm version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match load(config_file) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            config
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
            std::process::exit(1);
        }
    };

    let log_ok = config.check_log_level(verbose);
    let keybinds_ok = config.check_keybinds(verbose);
    if !(log_ok && keybinds_ok) {
        std::process::exit(1);
    }
    Ok(())
}

fn load(config_file: Option<&str>) -> Result<Config> {
    match config_file {
        Some(path) => cyclewm::load_from_path(Path::new(path)),
        None => cyclewm::load_from_file(),
    }
}
