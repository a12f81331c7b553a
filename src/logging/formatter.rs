//! Colorized console line formatting.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use log::{Level, LevelFilter};

use crate::error::CocoPlusError;

/// Escape sequence that ends every formatted line.
pub const RESET: &str = "\x1b[0m";

/// Severity of a console log line.
///
/// Ordered from least to most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl Severity {
    /// The colored label written before the message, including `:: `.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "\x1b[1;32mDEBUG\x1b[0;32;49m:: ",
            Severity::Info => "\x1b[34;1mINFO\x1b[0;34;49m:: ",
            Severity::Warn => "\x1b[1;33mWARNING\x1b[0;33;49m:: ",
            Severity::Error => "\x1b[103;31mERROR\x1b[31;49m:: ",
            Severity::Critical => "\x1b[41;97mCRITICAL\x1b[91;49;1m:: ",
        }
    }

    /// Maps a `log` facade level. `Trace` is shown as debug.
    pub fn from_level(level: Level) -> Self {
        match level {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warn,
            Level::Info => Severity::Info,
            Level::Debug | Level::Trace => Severity::Debug,
        }
    }

    /// The `log` facade filter letting through this severity and above.
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Severity::Debug => LevelFilter::Debug,
            Severity::Info => LevelFilter::Info,
            Severity::Warn => LevelFilter::Warn,
            Severity::Error | Severity::Critical => LevelFilter::Error,
        }
    }
}

impl FromStr for Severity {
    type Err = CocoPlusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" => Ok(Severity::Critical),
            _ => Err(CocoPlusError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        };
        write!(f, "{}", name)
    }
}

/// Formats log lines as `## <time> <file>:<line> <label><message><reset>`.
///
/// Info lines carry only `<label><message><reset>`, without the time and
/// location prefix.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColorFormatter;

impl ColorFormatter {
    /// Timestamp layout, `MM/DD/YYYY HH:MM:SS`.
    pub const TIME_FORMAT: &'static str = "%m/%d/%Y %H:%M:%S";

    pub fn format(
        &self,
        severity: Severity,
        file: &str,
        line: u32,
        message: &dyn fmt::Display,
        timestamp: NaiveDateTime,
    ) -> String {
        if severity == Severity::Info {
            return format!("{}{}{}", severity.label(), message, RESET);
        }
        let file_name = Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file);
        format!(
            "## {} {}:{} {}{}{}",
            timestamp.format(Self::TIME_FORMAT),
            file_name,
            line,
            severity.label(),
            message,
            RESET
        )
    }
}
