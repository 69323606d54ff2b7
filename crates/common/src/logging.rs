//! Provides utilities to initialize logging.
use std::env;

use tracing::*;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    Layer,
};

/// Environment variable name for the service label, which is appended to the
/// whoami string.
pub const SVC_LABEL_ENVVAR: &str = "LEDGER_KEYGEN_SVC_LABEL";

/// Configuration for the logger.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// The whoami string, which is used to identify the service in logs.
    whoami: String,

    /// Whether to print the source file of each event.
    with_file: bool,

    /// Whether to print the source line of each event.
    with_line_number: bool,
}

impl LoggerConfig {
    /// Creates a new instance with whoami set and file/line decoration taken
    /// from the `LOG_FILE` and `LOG_LINE_NUM` envvars.
    pub fn new(whoami: String) -> Self {
        Self {
            whoami,
            with_file: env::var("LOG_FILE").is_ok_and(|v| v == "1"),
            with_line_number: env::var("LOG_LINE_NUM").is_ok_and(|v| v == "1"),
        }
    }

    /// Creates a new instance with the whoami string set to the provided
    /// string.
    pub fn with_base_name(s: &str) -> Self {
        Self::new(get_whoami_string(s))
    }

    /// Returns the whoami string.
    pub fn whoami(&self) -> &str {
        &self.whoami
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::with_base_name("(ledger-keygen)")
    }
}

/// Initializes the logging subsystem with the provided config.
///
/// # Panics
///
/// If a global subscriber has already been installed.
pub fn init(config: LoggerConfig) {
    try_init(config).expect("logging already initialized");
}

/// Initializes the logging subsystem, failing if a global subscriber has
/// already been installed (e.g. by another test in the same binary).
pub fn try_init(config: LoggerConfig) -> Result<(), TryInitError> {
    let filt = tracing_subscriber::EnvFilter::from_default_env();

    // Stdout logging.
    let stdout_sub = tracing_subscriber::fmt::layer()
        .compact()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(config.with_file)
                .with_line_number(config.with_line_number),
        )
        .with_filter(filt);

    tracing_subscriber::registry().with(stdout_sub).try_init()?;

    info!(whoami = %config.whoami, "logging started");
    Ok(())
}

/// Gets the service label from the standard envvar, which should be included
/// in the whoami string.
pub fn get_service_label_from_env() -> Option<String> {
    env::var(SVC_LABEL_ENVVAR).ok()
}

/// Computes a standard whoami string.
pub fn get_whoami_string(base: &str) -> String {
    match get_service_label_from_env() {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        // another test may have won the race for the global subscriber, so only the second
        // attempt has a known outcome
        let _ = try_init(LoggerConfig::new("first".to_string()));
        assert!(try_init(LoggerConfig::new("second".to_string())).is_err());
    }

    #[test]
    fn whoami_without_label() {
        if get_service_label_from_env().is_none() {
            assert_eq!(get_whoami_string("keygen"), "keygen");
            assert_eq!(LoggerConfig::default().whoami(), "(ledger-keygen)");
        }
    }
}
