//! Test reporting primitives consumed by the recording logger

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use parking_lot::Mutex;

/// Reporting surface of a running test case
///
/// Halting means unwinding the current test thread with a panic. The test
/// harness catches it and reports the test as failed; other tests and the
/// process keep running.
pub trait TestReporter: Send + Sync {
    /// Write a line to the test output
    fn log(&self, args: fmt::Arguments<'_>);

    /// Write a line and mark the test failed, then continue
    fn error(&self, args: fmt::Arguments<'_>);

    /// Write a line, mark the test failed, and halt the test
    fn fatal(&self, args: fmt::Arguments<'_>) -> !;

    /// Mark the test failed and halt it without a message
    fn fail_now(&self) -> !;
}

/// Kind of a recorded line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Log,
    Error,
    Fatal,
}

/// A line written to a [`TestContext`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LineKind,
    pub message: String,
}

impl LogLine {
    pub fn new(kind: LineKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Outcome of a finished [`TestContext`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    pub name: String,
    pub failed: bool,
    pub lines: Vec<LogLine>,
}

/// [`TestReporter`] for tests run by libtest
///
/// Every line is recorded and echoed with `println!`, so libtest shows it
/// alongside the test's own output. `error` only marks the context failed;
/// the failure surfaces when the context is dropped, which panics if the
/// context is still armed and failed. Call [`TestContext::finish`] to
/// inspect the outcome instead.
///
/// # Example
///
/// ```
/// use loggerkit_core::testing::{TestContext, TestReporter};
///
/// let ctx = TestContext::new("parses_header");
/// ctx.log(format_args!("bytes read: {}", 12));
/// ctx.error(format_args!("bad magic"));
///
/// let report = ctx.finish();
/// assert!(report.failed);
/// assert_eq!(report.lines.len(), 2);
/// ```
#[derive(Debug)]
pub struct TestContext {
    name: String,
    lines: Mutex<Vec<LogLine>>,
    failed: AtomicBool,
    armed: bool,
}

impl TestContext {
    /// Create a context for the named test
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Mutex::new(Vec::new()),
            failed: AtomicBool::new(false),
            armed: true,
        }
    }

    /// Create a context named after the current test
    ///
    /// libtest names each test thread after the test it runs.
    pub fn current() -> Self {
        let name = thread::current().name().unwrap_or("test").to_string();
        Self::new(name)
    }

    /// Name of the test this context reports for
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the test has been marked failed
    pub fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }

    /// Snapshot of the recorded lines
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().clone()
    }

    /// Whether any recorded line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.message.contains(needle))
    }

    /// Disarm the context and return what it recorded
    pub fn finish(mut self) -> TestReport {
        self.armed = false;
        TestReport {
            name: self.name.clone(),
            failed: self.failed(),
            lines: std::mem::take(&mut *self.lines.lock()),
        }
    }

    fn record(&self, kind: LineKind, args: fmt::Arguments<'_>) -> String {
        let message = args.to_string();
        println!("    {}: {}", self.name, message);
        self.lines.lock().push(LogLine::new(kind, message.clone()));
        message
    }

    fn mark_failed(&self) {
        self.failed.store(true, Ordering::SeqCst);
    }
}

impl TestReporter for TestContext {
    fn log(&self, args: fmt::Arguments<'_>) {
        self.record(LineKind::Log, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.record(LineKind::Error, args);
        self.mark_failed();
    }

    fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let message = self.record(LineKind::Fatal, args);
        self.mark_failed();
        tracing::debug!(target: "loggerkit::testing", test = %self.name, "halting test");
        panic!("{}: {}", self.name, message);
    }

    fn fail_now(&self) -> ! {
        self.mark_failed();
        tracing::debug!(target: "loggerkit::testing", test = %self.name, "halting test");
        panic!("{}: test halted", self.name);
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if self.armed && self.failed() && !thread::panicking() {
            panic!("{}: test marked as failed", self.name);
        }
    }
}
