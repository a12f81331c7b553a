//! Colorized console logging.
//!
//! Loggers are created through an explicit [`LoggerRegistry`] rather than a
//! hidden global table. A [`NamedLogger`] can be used directly, or handed to
//! [`install`] so that `log::debug!` and friends from anywhere in the process
//! are formatted the same way.
//!
//! ```
//! use cocoplus::logging::{LoggerRegistry, Severity};
//!
//! let registry = LoggerRegistry::new();
//! let logger = registry.initialize_with_sink("demo", Severity::Info, || Box::new(std::io::sink()));
//! logger.info("loaded 80 categories");
//!
//! // Asking again hands back the same logger without a second handler.
//! let again = registry.initialize("demo", Severity::Debug);
//! assert_eq!(again.handler_count(), 1);
//! ```

mod formatter;
mod registry;

pub use formatter::{ColorFormatter, Severity, RESET};
pub use registry::{install, LoggerRegistry, NamedLogger};
