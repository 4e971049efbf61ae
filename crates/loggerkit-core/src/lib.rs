//! Loggerkit Core
//!
//! A leveled logger abstraction and a recording test double for it.
//!
//! Code under test takes a `&dyn Logger`. Production wires in
//! `TracingLogger`; tests wire in a `RecordingLogger` and then assert on
//! how many error, fatal, and panic calls were made.
//!
//! ```rust
//! use loggerkit_core::{Logger, RecordingLogger, TestContext};
//! use loggerkit_core::log_error;
//!
//! fn connect(logger: &dyn Logger, attempts: u32) {
//!     for attempt in 1..=attempts {
//!         log_error!(logger, "connect failed (attempt {})", attempt);
//!     }
//! }
//!
//! let ctx = TestContext::new("connect_retries");
//! let logger = RecordingLogger::non_failing(&ctx);
//! connect(&logger, 3);
//!
//! assert_eq!(logger.errors(), 3);
//! assert!(ctx.finish().lines.iter().any(|l| l.message.contains("attempt 3")));
//! ```

pub mod logging;
pub mod testing;

// Re-export commonly used types
pub use logging::{ArgList, BoxedLogger, Logger, NoOpLogger, SharedLogger, TracingLogger};

pub use testing::{
    ConfigError, ConfigResult, FailureMode,
    RecordingLogger, TestContext, TestReport, TestReporter,
};
