//! Named console loggers and the registry that owns them.

use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use log::{Log, Metadata, Record};

use super::formatter::{ColorFormatter, Severity};
use crate::error::CocoPlusError;

type Sink = Box<dyn Write + Send>;

/// A console logger writing colorized lines to its handlers.
///
/// Lines below the logger's level are dropped. Besides the direct
/// `debug`..`critical` methods, a `NamedLogger` implements [`log::Log`] for
/// records whose target falls under its name.
pub struct NamedLogger {
    name: String,
    level: Severity,
    formatter: ColorFormatter,
    handlers: Mutex<Vec<Sink>>,
}

impl NamedLogger {
    fn new(name: &str, level: Severity) -> Self {
        Self {
            name: name.to_string(),
            level,
            formatter: ColorFormatter,
            handlers: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    /// Number of output handlers attached.
    pub fn handler_count(&self) -> usize {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn attach(&self, sink: Sink) {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sink);
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    /// Returns true if `target` is this logger's name or one of its
    /// `::`-separated children. The empty name covers every target.
    fn covers(&self, target: &str) -> bool {
        self.name.is_empty()
            || target == self.name
            || target
                .strip_prefix(self.name.as_str())
                .is_some_and(|rest| rest.starts_with("::"))
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit_at_caller(Severity::Debug, &message);
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit_at_caller(Severity::Info, &message);
    }

    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.emit_at_caller(Severity::Warn, &message);
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit_at_caller(Severity::Error, &message);
    }

    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        self.emit_at_caller(Severity::Critical, &message);
    }

    #[track_caller]
    fn emit_at_caller(&self, severity: Severity, message: &dyn fmt::Display) {
        let location = Location::caller();
        self.emit(severity, location.file(), location.line(), message);
    }

    /// Formats one line and writes it to every handler.
    pub fn emit(&self, severity: Severity, file: &str, line: u32, message: &dyn fmt::Display) {
        if !self.is_enabled(severity) {
            return;
        }
        let text = self
            .formatter
            .format(severity, file, line, message, Local::now().naive_local());
        let mut handlers = self.handlers.lock().unwrap_or_else(PoisonError::into_inner);
        for handler in handlers.iter_mut() {
            let _ = writeln!(handler, "{}", text);
        }
    }
}

impl fmt::Debug for NamedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedLogger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("handlers", &self.handler_count())
            .finish()
    }
}

impl log::Log for NamedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.covers(metadata.target()) && self.is_enabled(Severity::from_level(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.emit(
                Severity::from_level(record.level()),
                record.file().unwrap_or("<unknown>"),
                record.line().unwrap_or(0),
                record.args(),
            );
        }
    }

    fn flush(&self) {
        let mut handlers = self.handlers.lock().unwrap_or_else(PoisonError::into_inner);
        for handler in handlers.iter_mut() {
            let _ = handler.flush();
        }
    }
}

/// Owns named loggers; each name gets at most one console handler.
///
/// Requesting a name that already exists returns the existing logger
/// unchanged, so initialization can be repeated safely.
#[derive(Debug, Default)]
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<NamedLogger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the logger for `name`, creating it with a stderr handler on
    /// first request.
    pub fn initialize(&self, name: &str, level: Severity) -> Arc<NamedLogger> {
        self.initialize_with_sink(name, level, || Box::new(io::stderr()))
    }

    /// Like [`initialize`](Self::initialize), with the handler built by
    /// `make_sink`. `make_sink` is not called when `name` already exists,
    /// and `level` is then ignored.
    pub fn initialize_with_sink<F>(&self, name: &str, level: Severity, make_sink: F) -> Arc<NamedLogger>
    where
        F: FnOnce() -> Box<dyn Write + Send>,
    {
        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = loggers.get(name) {
            return Arc::clone(existing);
        }
        let logger = Arc::new(NamedLogger::new(name, level));
        logger.attach(make_sink());
        loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    pub fn get(&self, name: &str) -> Option<Arc<NamedLogger>> {
        self.loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Installed(Arc<NamedLogger>);

impl log::Log for Installed {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.0.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        self.0.log(record)
    }

    fn flush(&self) {
        self.0.flush()
    }
}

/// Routes the `log` facade to `logger` for the rest of the process.
///
/// Fails if a process logger has already been installed.
pub fn install(logger: Arc<NamedLogger>) -> Result<(), CocoPlusError> {
    let filter = logger.level().to_level_filter();
    log::set_boxed_logger(Box::new(Installed(logger)))?;
    log::set_max_level(filter);
    Ok(())
}
