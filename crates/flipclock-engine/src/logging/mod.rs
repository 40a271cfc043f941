//! Logging bootstrap.
//!
//! Thin wrapper over `env_logger` so binaries and examples initialize the
//! global `log` sink the same way. Library code only ever uses the `log`
//! macros and never touches the logger implementation.

mod init;

pub use init::{init_logging, init_logging_with};
