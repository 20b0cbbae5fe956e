//! Logging initialisation for the sapling CLI.
//!
//! Diagnostics always go to stderr so the GraphML document written to stdout
//! stays well formed. `SAPLING_LOG_FORMAT` selects human or JSON lines and
//! `RUST_LOG` filters events, defaulting to `info`. Records emitted through
//! the `log` facade are forwarded into `tracing`.

use std::{
    env,
    ffi::OsStr,
    str::FromStr,
    sync::OnceLock,
};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt::format::FmtSpan, layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "SAPLING_LOG_FORMAT";

/// Filter directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format of the installed subscriber.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, carrying the current span and its parents.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalised = raw.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnsupportedFormat {
                provided: normalised,
            }),
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `SAPLING_LOG_FORMAT` held bytes that are not UTF-8.
    #[error("`SAPLING_LOG_FORMAT` must be valid UTF-8")]
    InvalidUnicode,
    /// `SAPLING_LOG_FORMAT` named a format other than `human` or `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Normalised value supplied by the user.
        provided: String,
    },
}

/// Logging settings resolved from the environment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LoggingConfig {
    /// Selected output format.
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Reads `SAPLING_LOG_FORMAT`, defaulting to [`LogFormat::Human`] when
    /// it is unset.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when the variable is not UTF-8 or names an
    /// unknown format.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_value(env::var_os(LOG_FORMAT_ENV).as_deref())
    }

    fn from_value(value: Option<&OsStr>) -> Result<Self, LoggingError> {
        let format = match value {
            Some(raw) => raw.to_str().ok_or(LoggingError::InvalidUnicode)?.parse()?,
            None => LogFormat::default(),
        };
        Ok(Self { format })
    }

    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let stderr_lines = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE);
        match self.format {
            LogFormat::Human => stderr_lines.boxed(),
            LogFormat::Json => stderr_lines
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .boxed(),
        }
    }
}

/// Installs the global subscriber described by the environment.
///
/// Repeated calls are no-ops. When another subscriber already owns the
/// global slot it is kept and the failure is only reported as a debug event.
///
/// # Errors
/// Returns [`LoggingError`] when `SAPLING_LOG_FORMAT` is invalid.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }
    let config = LoggingConfig::from_env()?;

    // The log bridge is best-effort: an existing `log` logger stays in place.
    let _bridge = LogTracer::init();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    if let Err(err) = tracing_subscriber::registry()
        .with(config.layer())
        .with(filter)
        .try_init()
    {
        tracing::debug!(error = %err, "keeping previously installed subscriber");
    }

    let _already_set = INITIALISED.set(());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("HUMAN", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    fn log_format_parses_supported_values(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(raw.parse::<LogFormat>().expect("format must parse"), expected);
    }

    #[test]
    fn log_format_rejects_unknown_values() {
        let err = " XML ".parse::<LogFormat>().expect_err("xml is not supported");
        match err {
            LoggingError::UnsupportedFormat { provided } => assert_eq!(provided, "xml"),
            LoggingError::InvalidUnicode => panic!("unexpected error: {err:?}"),
        }
    }

    #[rstest]
    #[case::unset(None, LogFormat::Human)]
    #[case::json(Some("json"), LogFormat::Json)]
    #[case::human(Some("Human"), LogFormat::Human)]
    fn config_resolves_variable_values(#[case] value: Option<&str>, #[case] expected: LogFormat) {
        let config = LoggingConfig::from_value(value.map(OsStr::new)).expect("config must resolve");
        assert_eq!(config.format, expected);
    }

    #[cfg(unix)]
    #[test]
    fn config_rejects_non_unicode_values() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(&[0x6a, 0xff]);
        let err = LoggingConfig::from_value(Some(raw)).expect_err("non-unicode values must be rejected");
        assert!(matches!(err, LoggingError::InvalidUnicode));
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging().expect("logging must initialise");
        init_logging().expect("subsequent calls must be no-ops");
    }
}
