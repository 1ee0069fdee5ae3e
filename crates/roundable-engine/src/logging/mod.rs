//! Logging utilities.
//!
//! Library code only talks to the `log` facade; this module installs
//! `env_logger` as the backend for binaries and tests that want output.

mod init;

pub use init::{init_logging, LoggingConfig};
