//! Compact `tracing` output for the command line.
//!
//! Lines look like `DEBUG parsed line expr=(+ 1 2)`: no timestamps, no
//! module paths, no colour, written to stderr so results on stdout stay
//! clean.

use tracing_subscriber::{Layer, Registry, filter::LevelFilter, layer::SubscriberExt,
                         util::SubscriberInitExt};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Maps a `-v` count to a level: none is `Warn`, then `Info`, `Debug`
    /// and `Trace`.
    ///
    /// # Example
    /// ```
    /// use lispcalc::logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::from_verbosity(0), LogLevel::Warn);
    /// assert_eq!(LogLevel::from_verbosity(2), LogLevel::Debug);
    /// assert_eq!(LogLevel::from_verbosity(9), LogLevel::Trace);
    /// ```
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Picks the level for the command line flags. `--quiet` wins and keeps
    /// only errors; otherwise the `-v` count decides.
    ///
    /// # Example
    /// ```
    /// use lispcalc::logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::from_flags(0, true), LogLevel::Error);
    /// assert_eq!(LogLevel::from_flags(1, false), LogLevel::Info);
    /// ```
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet { Self::Error } else { Self::from_verbosity(verbose) }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// Installs the global subscriber at `level`.
///
/// Call once, early in `main`. A later call leaves the installed
/// subscriber in place and reports that through it at debug level.
pub fn init_with_level(level: LogLevel) {
    let filter = LevelFilter::from_level(level.into());

    let layer = tracing_subscriber::fmt::layer().without_time()
                                                .with_target(false)
                                                .with_level(true)
                                                .with_ansi(false)
                                                .with_writer(std::io::stderr)
                                                .compact()
                                                .with_filter(filter);

    if let Err(e) = Registry::default().with(layer).try_init() {
        tracing::debug!(error = %e, "global subscriber already set");
    }
}
