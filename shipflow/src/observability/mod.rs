//! Observability utilities.
//!
//! Everything shipflow reports goes through `tracing`. This module provides
//! the subscriber installation and the `tracing`-backed collaborators used
//! when no custom logger or emailer is supplied.

mod logging;
mod subscriber;

pub use logging::{LoggingEmailer, TracingLogger, LOG_TARGET};
pub use subscriber::{init_tracing, LogFormat};
