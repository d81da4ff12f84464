use anyhow::{Context, Result};
use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn setup_logging(config_level: &str) -> Result<()> {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| config_level.to_owned());
    let (subscriber, parse_err) = parse_log_level(&level);
    tracing::subscriber::set_global_default(subscriber)
        .context("Couldn't setup global subscriber (logger)")?;
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level {:?}, using info: {}", level, err);
    }
    Ok(())
}

#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::default().add_directive(LevelFilter::INFO.into())
        });
    (get_subscribers(filter), parse_err)
}

pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}
