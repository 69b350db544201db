#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns a command-line verbosity count into a tracing filter for
//! the `sstr` targets and installs the subscriber that prints those events.
//!
//! # Design
//!
//! [`LogConfig`] is plain data so it can be built from flags or, with the
//! `serde` feature, loaded from a configuration file. Installing a
//! subscriber needs the `tracing` feature, which pulls in
//! `tracing-subscriber` and exposes [`init_tracing`].
//!
//! A `RUST_LOG` environment variable, when set and valid, replaces the
//! filter derived from [`LogConfig`].
//!
//! # Examples
//!
//! ```
//! use logging::{LogConfig, LogLevel};
//!
//! let config = LogConfig::from_verbose_level(2);
//! assert_eq!(config.level(), LogLevel::Debug);
//! assert_eq!(config.filter_directives(), "warn,sstr=debug");
//! ```

mod config;
#[cfg(feature = "tracing")]
mod subscriber;

pub use config::{LogConfig, LogLevel};
#[cfg(feature = "tracing")]
pub use subscriber::{build_filter, init_tracing};
