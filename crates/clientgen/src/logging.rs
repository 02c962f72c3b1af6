const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Install the `tracing` subscriber that also receives the library's `log`
/// records. `-v` wins over the `LOG_LEVEL` environment variable.
pub(crate) fn setup_logger(verbose: bool) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, invalid_env_val) =
        if verbose {
            (tracing::Level::DEBUG, None)
        } else {
            match env_val.as_deref().map(parse_log_level) {
                Some(Ok(level)) => (level, None),
                Some(Err(other)) => (DEFAULT_LOG_LEVEL, Some(other)),
                None => (DEFAULT_LOG_LEVEL, None),
            }
        };

    // stdout is reserved for the catalogue.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(other) = invalid_env_val {
        log::warn!("Invalid `LOG_LEVEL` environment variable value: `{other}`");
    }
}

fn parse_log_level(value: &str) -> Result<tracing::Level, &str> {
    match value.trim().to_ascii_lowercase().as_str() {
        "debug" | "verbose" => Ok(tracing::Level::DEBUG),
        "error" => Ok(tracing::Level::ERROR),
        "info" => Ok(tracing::Level::INFO),
        "trace" => Ok(tracing::Level::TRACE),
        "warn" => Ok(tracing::Level::WARN),
        _ => Err(value.trim()),
    }
}
