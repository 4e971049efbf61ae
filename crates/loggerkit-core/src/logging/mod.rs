//! Leveled logger abstraction and its production backends

mod traits;
mod noop;
mod tracing_logger;

pub use traits::{ArgList, BoxedLogger, Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use tracing_logger::{TracingLogger, FATAL_EXIT_CODE};
