//! # Recipebox Architecture
//!
//! Recipebox is a **UI-agnostic recipe listing library**. It holds a small,
//! read-only catalog of recipes and answers one question over and over: given
//! the current filter, sort, search text and favorites, which recipes are shown,
//! in what order, and how many out of how many?
//!
//! The terminal client in `cli/` is one consumer. A browser front end or a TUI
//! would drive the same [`api::RecipeApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards, handles terminal I/O    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Display controller: control state + debounced search     │
//! │  - Recomputes the listing after every effective change      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - search → attribute filter → sort, favorites toggling     │
//! │  - Pure functions over the catalog                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, favorites.rs)                       │
//! │  - KeyValueStore trait: FileStore, InMemoryStore            │
//! │  - Favorites serialized into one slot                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints, never exits, and never reads the
//! clock on its own. Time enters through `Instant` arguments, which keeps the
//! debounced search deterministic under test.
//!
//! ## Degrading Instead of Failing
//!
//! The listing pipeline has no error path. Unknown filter or sort keys act as
//! "all" / "none", a corrupt favorites slot reads as empty, and a failed
//! favorites write is logged and forgotten. Errors ([`error::RecipeError`])
//! only surface where a caller asked for something concrete: loading a catalog
//! file, looking up a recipe id, or parsing a key strictly.
//!
//! ## Module Overview
//!
//! - [`api`]: The display controller, entry point for all operations
//! - [`commands`]: Search, filter, sort, listing and favorite toggling
//! - [`catalog`]: The read-only recipe catalog
//! - [`favorites`]: The persisted favorites set
//! - [`debounce`]: Cancellable delayed values for search input
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`model`]: Core data types (`Recipe`, `DisplayRecipe`, `Counts`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod error;
pub mod favorites;
pub mod model;
pub mod store;
