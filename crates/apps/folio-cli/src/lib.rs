//! Command-line interface for the folio site engine.
//!
//! This crate provides the `folio` binary that glues the workspace
//! together: it pulls raw entries from the delivery API, maps them into
//! typed sections, and renders the landing page. It includes commands for:
//!
//! - **Setup**: Write a starter configuration file
//! - **Content**: Snapshot raw entries to a local JSON file
//! - **Build**: Render the landing page to HTML
//! - **Inspection**: List the sections a snapshot maps to
//!
//! # Quick Start
//!
//! ```bash
//! # Write a starter config, then fill in the space id and token
//! folio init
//!
//! # Snapshot the raw entries
//! folio fetch --output entries.json
//!
//! # Render the page from the snapshot
//! folio build --input entries.json --output site/index.html
//!
//! # See what the snapshot maps to
//! folio sections --input entries.json
//! ```
//!
//! # Output Formats
//!
//! All commands support `--format` for output control:
//!
//! - `human` (default): Human-readable with colors
//! - `json`: Machine-readable JSON
//!
//! # Configuration
//!
//! Configuration is loaded from the platform config directory
//! (`~/.config/folio/config.toml` on Linux). Override with `--config`.
//! The delivery access token supports `${VAR}` environment expansion.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
