//! `tracing` backend for the `Logger` trait

use std::fmt;

use super::traits::{ArgList, Logger};

/// Exit status used by `fatal` and `fatalf`
pub const FATAL_EXIT_CODE: i32 = 1;

/// Logger that delegates to the `tracing` crate
///
/// Output goes wherever the installed subscriber sends it. `print` and
/// `println` are emitted at info level.
///
/// `fatal` emits an error event marked `fatal = true` and then exits the
/// process with [`FATAL_EXIT_CODE`]. `panic` emits an error event and then
/// panics with the rendered message, so it can be caught by `catch_unwind`.
///
/// # Example
///
/// ```
/// use loggerkit_core::logging::{Logger, TracingLogger};
/// use loggerkit_core::log_warn;
///
/// // Events are dropped until a subscriber is installed
/// let logger = TracingLogger::new();
/// log_warn!(logger, "disk usage at {}%", 91);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a new tracing logger adapter
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn debugf(&self, args: fmt::Arguments<'_>) {
        tracing::debug!("{}", args);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        tracing::info!("{}", args);
    }

    fn printf(&self, args: fmt::Arguments<'_>) {
        tracing::info!("{}", args);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        tracing::warn!("{}", args);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        tracing::error!("{}", args);
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) {
        tracing::error!(fatal = true, "{}", args);
        std::process::exit(FATAL_EXIT_CODE);
    }

    fn panicf(&self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        tracing::error!("{}", message);
        panic!("{}", message);
    }

    fn debug(&self, args: &[&dyn fmt::Display]) {
        self.debugf(format_args!("{}", ArgList(args)));
    }

    fn info(&self, args: &[&dyn fmt::Display]) {
        self.infof(format_args!("{}", ArgList(args)));
    }

    fn print(&self, args: &[&dyn fmt::Display]) {
        self.printf(format_args!("{}", ArgList(args)));
    }

    fn println(&self, args: &[&dyn fmt::Display]) {
        self.printf(format_args!("{}", ArgList(args)));
    }

    fn warn(&self, args: &[&dyn fmt::Display]) {
        self.warnf(format_args!("{}", ArgList(args)));
    }

    fn error(&self, args: &[&dyn fmt::Display]) {
        self.errorf(format_args!("{}", ArgList(args)));
    }

    fn fatal(&self, args: &[&dyn fmt::Display]) {
        self.fatalf(format_args!("{}", ArgList(args)));
    }

    fn panic(&self, args: &[&dyn fmt::Display]) {
        self.panicf(format_args!("{}", ArgList(args)));
    }
}
