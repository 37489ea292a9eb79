use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Log verbosity derived from `-v`/`-q`. Variants are ordered quietest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn directive(self) -> String {
        format!("jestname={}", self.level())
    }

    /// Source locations only help once debug output is on.
    fn shows_source_location(self) -> bool {
        self >= Self::Debug
    }

    fn shows_timestamps(self) -> bool {
        self >= Self::Verbose
    }
}

/// Installs the global subscriber on stderr; stdout carries only the
/// resolved name. `RUST_LOG` overrides the flag-derived filter.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(verbosity.shows_source_location())
        .with_line_number(verbosity.shows_source_location())
        .compact();

    if verbosity.shows_timestamps() {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
