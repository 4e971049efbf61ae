//! No-op logger implementation

use std::fmt;

use super::traits::Logger;

/// A logger that does nothing
///
/// Useful for benchmarks or when logging is not needed. Unlike a conforming
/// backend, `fatal` and `panic` do not halt either: every call returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn debugf(&self, _args: fmt::Arguments<'_>) {}
    fn infof(&self, _args: fmt::Arguments<'_>) {}
    fn printf(&self, _args: fmt::Arguments<'_>) {}
    fn warnf(&self, _args: fmt::Arguments<'_>) {}
    fn errorf(&self, _args: fmt::Arguments<'_>) {}
    fn fatalf(&self, _args: fmt::Arguments<'_>) {}
    fn panicf(&self, _args: fmt::Arguments<'_>) {}

    fn debug(&self, _args: &[&dyn fmt::Display]) {}
    fn info(&self, _args: &[&dyn fmt::Display]) {}
    fn print(&self, _args: &[&dyn fmt::Display]) {}
    fn println(&self, _args: &[&dyn fmt::Display]) {}
    fn warn(&self, _args: &[&dyn fmt::Display]) {}
    fn error(&self, _args: &[&dyn fmt::Display]) {}
    fn fatal(&self, _args: &[&dyn fmt::Display]) {}
    fn panic(&self, _args: &[&dyn fmt::Display]) {}
}
