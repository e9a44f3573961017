//! # CLI Behavior
//!
//! This is **one possible UI client** for recipebox, not the application itself.
//! For the overall architecture, see the crate-level documentation of the
//! `recipebox` library.
//!
//! ## Naked Execution (`recipebox`)
//!
//! Running `recipebox` with no arguments lists the catalog with the configured
//! default filter and sort.
//!
//! ## Data Directory
//!
//! Favorites (`data.json`) and configuration (`config.json`) live in one
//! directory, chosen in this order:
//!
//! 1. `--data-dir PATH`
//! 2. `$RECIPEBOX_HOME`
//! 3. The platform data directory (`directories::ProjectDirs`)
//!
//! ## Logging
//!
//! Logs go to stderr via `tracing-subscriber`. The default level is `warn`
//! (`debug` with `--verbose`); `RUST_LOG` overrides both.

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
