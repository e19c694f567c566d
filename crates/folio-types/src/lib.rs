//! Data structures for the folio site engine.
//!
//! This crate provides the render-ready types shared across the folio
//! workspace. It contains no mapping or rendering logic, only type
//! definitions with serialization support.
//!
//! # Module Organization
//!
//! - [`section`] - Typed page sections (the `Section` union and its variants)
//! - [`meta`] - Page metadata with default-filling resolution
//! - [`constants`] - Site-wide defaults (SEO fallbacks, person profile)
//!
//! # Example
//!
//! ```
//! use folio_types::{HeroSection, HeroStyle, Section, SectionAction, ActionKind};
//!
//! let hero = HeroSection {
//!     anchor_id: Some("top".to_string()),
//!     title: Some("Gilberto Haro".to_string()),
//!     primary_action: Some(SectionAction::new(
//!         "View projects",
//!         "#projects",
//!         ActionKind::Primary,
//!     )),
//!     ..HeroSection::default()
//! };
//!
//! let section = Section::Hero(hero);
//! assert_eq!(section.section_type(), "hero");
//! assert_eq!(section.anchor_id(), Some("top"));
//! ```
//!
//! # Type Conventions
//!
//! - Derive `Debug`, `Clone`, `PartialEq` everywhere; `Copy`/`Eq`/`Hash` for
//!   small enums
//! - Derive `Serialize`, `Deserialize` for snapshot and JSON output support
//! - Use `#[serde(rename_all = "snake_case")]` for consistent JSON
//! - Use `#[non_exhaustive]` on enums to allow future section variants

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod meta;
pub mod section;

// Re-export all public types at the crate root for convenience

pub use meta::PageMeta;
pub use section::{ActionKind, HeroSection, HeroStyle, Section, SectionAction};
