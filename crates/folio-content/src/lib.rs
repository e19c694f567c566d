//! Content-to-view mapping for the folio site engine.
//!
//! This crate turns loosely-typed CMS entries into the strongly-typed
//! sections defined in `folio-types`. Entries arrive as a content-type tag
//! plus an arbitrary JSON field bag; the mapping layer narrows them into
//! render-ready sections with default-filling and graceful degradation.
//!
//! # Module Organization
//!
//! - [`entry`] - Raw entry model and delivery-document decoding
//! - [`mapper`] - Content-type dispatch over the supported section variants
//! - [`hero`] - Hero section extraction and style/asset reconciliation
//! - [`error`] - Decode errors for malformed entry documents
//!
//! # Degradation Model
//!
//! Per-entry mapping has exactly two outcomes: an unsupported content type
//! yields `None`, and a supported type with missing or wrong-shaped fields
//! yields a section whose affected members are `None`. Mapping never fails
//! and never logs; only whole-document decoding ([`entries_from_json`])
//! has an error channel.
//!
//! # Example
//!
//! ```
//! use folio_content::{entries_from_json, map_sections};
//!
//! let body = r#"{"items": [{
//!     "sys": {"id": "a1", "contentType": {"sys": {"id": "sectionHero"}}},
//!     "fields": {"anchorId": "top", "title": "Gilberto Haro"}
//! }]}"#;
//!
//! let entries = entries_from_json(body)?;
//! let sections = map_sections(&entries);
//! assert_eq!(sections.len(), 1);
//! assert_eq!(sections[0].section_type(), "hero");
//! # Ok::<(), folio_content::ContentError>(())
//! ```

pub mod entry;
pub mod error;
pub mod hero;
pub mod mapper;

pub use entry::{
    entries_from_json, entry_from_json, normalize_asset_url, ContentTypeLink, ContentTypeSys,
    Entry, Sys,
};
pub use error::{ContentError, ContentResult};
pub use hero::{map_hero_section, reconcile_hero_style};
pub use mapper::{map_section_from_entry, map_sections, SectionType};
