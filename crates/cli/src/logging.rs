use kitbag_core::config::{AppConfig, LogFormat};
use tracing::Level;

/// Installs the global subscriber. Logs go to stderr; stdout is reserved for
/// the rendered storefront. When a host process embedding `run` has already
/// installed a subscriber, that one is kept and this call does nothing.
pub fn init(config: &AppConfig) {
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use kitbag_core::config::{AppConfig, LogFormat};

    use super::init;

    #[test]
    fn repeated_init_keeps_the_first_subscriber() {
        let mut config = AppConfig::default();
        init(&config);

        config.logging.format = LogFormat::Json;
        init(&config);
        tracing::info!(event_name = "cli.logging.reinit", "still logging after second init");
    }
}
