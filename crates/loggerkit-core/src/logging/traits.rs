//! Logger trait definition

use std::fmt;
use std::sync::Arc;

/// Leveled logger abstraction
///
/// Calling code holds a `&dyn Logger` (or a [`SharedLogger`]) and stays
/// agnostic of the backend behind it.
///
/// Implementations:
/// - `TracingLogger`: Delegates to the `tracing` crate
/// - `NoOpLogger`: Silent logger
/// - `RecordingLogger`: Test double that counts failures
///
/// # Levels
///
/// - `debug`, `info`, `print`, `warn` never halt execution.
/// - `error` records a failure and returns.
/// - `fatal` records a failure and is expected not to return to the caller.
/// - `panic` records a failure and is expected to unwind the caller.
///
/// The halting behavior is part of the contract, not of the signature: the
/// methods return `()` so that test doubles may choose not to halt.
///
/// # Example
///
/// ```
/// use loggerkit_core::logging::{Logger, NoOpLogger};
/// use loggerkit_core::log_info;
///
/// fn start(logger: &dyn Logger, port: u16) {
///     log_info!(logger, "listening on {}", port);
///     logger.info(&[&"ready", &true]);
/// }
///
/// start(&NoOpLogger, 8080);
/// ```
pub trait Logger: Send + Sync {
    /// Log a formatted debug message
    fn debugf(&self, args: fmt::Arguments<'_>);

    /// Log a formatted info message
    fn infof(&self, args: fmt::Arguments<'_>);

    /// Log a formatted message at print level
    fn printf(&self, args: fmt::Arguments<'_>);

    /// Log a formatted warning
    fn warnf(&self, args: fmt::Arguments<'_>);

    /// Log a formatted error
    fn errorf(&self, args: fmt::Arguments<'_>);

    /// Log a formatted fatal message and halt
    fn fatalf(&self, args: fmt::Arguments<'_>);

    /// Log a formatted message and panic
    fn panicf(&self, args: fmt::Arguments<'_>);

    /// Log values at debug level
    fn debug(&self, args: &[&dyn fmt::Display]);

    /// Log values at info level
    fn info(&self, args: &[&dyn fmt::Display]);

    /// Log values at print level
    fn print(&self, args: &[&dyn fmt::Display]);

    /// Log values at print level, one line
    fn println(&self, args: &[&dyn fmt::Display]);

    /// Log values as a warning
    fn warn(&self, args: &[&dyn fmt::Display]);

    /// Log values as an error
    fn error(&self, args: &[&dyn fmt::Display]);

    /// Log values as a fatal message and halt
    fn fatal(&self, args: &[&dyn fmt::Display]);

    /// Log values and panic
    fn panic(&self, args: &[&dyn fmt::Display]);
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Renders an unformatted argument list
///
/// Each value is written with its `Display` impl, separated by a single
/// space. No trailing newline is added.
///
/// ```
/// use loggerkit_core::logging::ArgList;
///
/// let rendered = ArgList(&[&"x", &1, &2.5]).to_string();
/// assert_eq!(rendered, "x 1 2.5");
/// ```
#[derive(Clone, Copy)]
pub struct ArgList<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for ArgList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", arg)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ArgList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArgList({:?})", self.to_string())
    }
}

/// Convenience macros for the formatted family
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debugf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.infof(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_print {
    ($logger:expr, $($arg:tt)*) => {
        $logger.printf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warnf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.errorf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatalf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $($arg:tt)*) => {
        $logger.panicf(format_args!($($arg)*))
    };
}
