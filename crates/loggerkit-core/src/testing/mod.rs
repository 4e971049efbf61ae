//! Test doubles for code that depends on [`Logger`](crate::logging::Logger)
//!
//! - `TestReporter` trait: the reporting surface of a running test
//! - `TestContext`: reporter for libtest-run tests
//! - `RecordingLogger`: logger that counts error, fatal, and panic calls
//!   and can keep them from failing the test

mod mode;
mod recording;
mod reporter;

pub use mode::{ConfigError, ConfigResult, FailureMode, FAILURE_MODE_ENV};
pub use recording::RecordingLogger;
pub use reporter::{LineKind, LogLine, TestContext, TestReport, TestReporter};
