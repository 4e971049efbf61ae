//! Recording logger for tests

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::mode::{ConfigResult, FailureMode};
use super::reporter::TestReporter;
use crate::logging::{ArgList, Logger};

/// [`Logger`] that writes through a [`TestReporter`] and counts failures
///
/// Debug, info, print, println, and warn calls are forwarded to
/// [`TestReporter::log`] and never touch a counter. Error, fatal, and panic
/// calls bump their counter first and then, depending on the mode:
///
/// | Call  | `Strict`                         | `NeverFail` |
/// |-------|----------------------------------|-------------|
/// | error | `reporter.error`                 | `reporter.log` |
/// | fatal | `reporter.fatal` (halts)         | `reporter.log` |
/// | panic | `reporter.log`, then `fail_now`  | `reporter.log` |
///
/// Counters use relaxed atomics only so the logger can be `Sync`; one
/// instance is meant to serve one test case.
///
/// # Example
///
/// ```
/// use loggerkit_core::testing::{RecordingLogger, TestContext};
/// use loggerkit_core::logging::Logger;
///
/// let ctx = TestContext::new("probe_failures");
/// let logger = RecordingLogger::non_failing(&ctx);
///
/// logger.fatal(&[&"disk", &"gone"]);
/// logger.panic(&[&"boom"]);
///
/// assert_eq!(logger.fatals(), 1);
/// assert_eq!(logger.panics(), 1);
/// assert!(logger.has_failures());
/// assert!(!ctx.finish().failed);
/// ```
pub struct RecordingLogger<'a, R: TestReporter + ?Sized> {
    reporter: &'a R,
    mode: FailureMode,
    fatals: AtomicUsize,
    errors: AtomicUsize,
    panics: AtomicUsize,
}

impl<'a, R: TestReporter + ?Sized> RecordingLogger<'a, R> {
    /// Create a logger whose failure calls fail the test
    pub fn new(reporter: &'a R) -> Self {
        Self::with_mode(reporter, FailureMode::Strict)
    }

    /// Create a logger whose failure calls are only counted and logged
    pub fn non_failing(reporter: &'a R) -> Self {
        Self::with_mode(reporter, FailureMode::NeverFail)
    }

    /// Create a logger with an explicit failure mode
    pub fn with_mode(reporter: &'a R, mode: FailureMode) -> Self {
        Self {
            reporter,
            mode,
            fatals: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
            panics: AtomicUsize::new(0),
        }
    }

    /// Create a logger with the mode from `LOGGERKIT_FAILURE_MODE`
    ///
    /// Falls back to `Strict` when the variable is unset.
    pub fn from_env(reporter: &'a R) -> ConfigResult<Self> {
        let mode = FailureMode::from_env()?.unwrap_or_default();
        Ok(Self::with_mode(reporter, mode))
    }

    /// True if any errors, fatals, or panics have been logged
    pub fn has_failures(&self) -> bool {
        self.fatals() + self.errors() + self.panics() > 0
    }

    /// Number of fatal calls so far
    pub fn fatals(&self) -> usize {
        self.fatals.load(Ordering::Relaxed)
    }

    /// Number of error calls so far
    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    /// Number of panic calls so far
    pub fn panics(&self) -> usize {
        self.panics.load(Ordering::Relaxed)
    }

    pub fn mode(&self) -> FailureMode {
        self.mode
    }

    pub fn reporter(&self) -> &'a R {
        self.reporter
    }

    fn suppressed(&self, call: &'static str, args: fmt::Arguments<'_>) {
        tracing::debug!(target: "loggerkit::recording", call, "failure suppressed");
        self.reporter.log(args);
    }

    fn record_error(&self, args: fmt::Arguments<'_>) {
        self.errors.fetch_add(1, Ordering::Relaxed);
        if self.mode.never_fails() {
            return self.suppressed("error", args);
        }

        self.reporter.error(args);
    }

    fn record_fatal(&self, args: fmt::Arguments<'_>) {
        self.fatals.fetch_add(1, Ordering::Relaxed);
        if self.mode.never_fails() {
            return self.suppressed("fatal", args);
        }

        self.reporter.fatal(args);
    }

    fn record_panic(&self, args: fmt::Arguments<'_>) {
        self.panics.fetch_add(1, Ordering::Relaxed);
        if self.mode.never_fails() {
            return self.suppressed("panic", args);
        }

        self.reporter.log(args);
        self.reporter.fail_now();
    }
}

impl<R: TestReporter + ?Sized> fmt::Debug for RecordingLogger<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingLogger")
            .field("mode", &self.mode)
            .field("fatals", &self.fatals())
            .field("errors", &self.errors())
            .field("panics", &self.panics())
            .finish()
    }
}

impl<R: TestReporter + ?Sized> Logger for RecordingLogger<'_, R> {
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.reporter.log(args);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.reporter.log(args);
    }

    fn printf(&self, args: fmt::Arguments<'_>) {
        self.reporter.log(args);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.reporter.log(args);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.record_error(args);
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.record_fatal(args);
    }

    fn panicf(&self, args: fmt::Arguments<'_>) {
        self.record_panic(args);
    }

    fn debug(&self, args: &[&dyn fmt::Display]) {
        self.reporter.log(format_args!("{}", ArgList(args)));
    }

    fn info(&self, args: &[&dyn fmt::Display]) {
        self.reporter.log(format_args!("{}", ArgList(args)));
    }

    fn print(&self, args: &[&dyn fmt::Display]) {
        self.reporter.log(format_args!("{}", ArgList(args)));
    }

    fn println(&self, args: &[&dyn fmt::Display]) {
        self.reporter.log(format_args!("{}", ArgList(args)));
    }

    fn warn(&self, args: &[&dyn fmt::Display]) {
        self.reporter.log(format_args!("{}", ArgList(args)));
    }

    fn error(&self, args: &[&dyn fmt::Display]) {
        self.record_error(format_args!("{}", ArgList(args)));
    }

    fn fatal(&self, args: &[&dyn fmt::Display]) {
        self.record_fatal(format_args!("{}", ArgList(args)));
    }

    fn panic(&self, args: &[&dyn fmt::Display]) {
        self.record_panic(format_args!("{}", ArgList(args)));
    }
}
