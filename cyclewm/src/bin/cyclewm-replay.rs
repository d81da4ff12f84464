use anyhow::{Context, Result};
use clap::{arg, command};
use cyclewm::replay::{ReplayDisplayServer, ReplayManager};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = command!("cyclewm Replay")
        .about("Feeds an event script through the focus core and prints the resulting actions")
        .help_template(cyclewm::utils::get_help_template())
        .args(&[
            arg!(<SCRIPT> "File with one JSON event per line."),
            arg!(-c --config <FILE> "Configuration to use instead of the XDG config file."),
            arg!(--state "Also print the focus history left at the end."),
        ])
        .get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => cyclewm::load_from_path(Path::new(path))?,
        None => cyclewm::load(),
    };
    cyclewm::utils::log::setup_logging(&config.log_level)?;

    let script = matches
        .get_one::<String>("SCRIPT")
        .context("missing script")?;
    let server = ReplayDisplayServer::from_path(Path::new(script))
        .with_context(|| format!("could not load script {script}"))?;

    let mut manager = ReplayManager::with_display_server(config, server);
    tracing::info!("Replaying {}", script);
    manager.start_event_loop().await;

    let transcript = serde_json::to_string_pretty(manager.display_server.transcript())?;
    println!("{transcript}");
    if matches.get_flag("state") {
        let history = serde_json::to_string_pretty(&manager.state.focus_manager.history)?;
        println!("{history}");
    }
    Ok(())
}
