//! Content-type dispatch over the supported section variants.
//!
//! The content-type tag is an open string in the delivery API, but the set
//! of sections the site can render is closed. [`SectionType`] is the total
//! tag-to-variant mapping: parsing and dispatch both go through it, so
//! adding a section variant is one new enum case plus one match arm and
//! cannot silently fall through.

use folio_types::Section;

use crate::entry::Entry;
use crate::hero::map_hero_section;

/// Supported section content types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SectionType {
    /// Top-of-page introductory section (`sectionHero`)
    Hero,
}

impl SectionType {
    /// Parse a content-type tag into a supported section type.
    ///
    /// Returns `None` for any unknown tag — the explicit default branch of
    /// the dispatch.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "sectionHero" => Some(Self::Hero),
            _ => None,
        }
    }

    /// The content-type tag for this section type.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Hero => "sectionHero",
        }
    }
}

/// Map one entry into a typed section.
///
/// Returns `None` for unsupported content types (or entries missing the
/// content-type link entirely); no error, no logging. For supported types
/// the variant extractor is total — missing or wrong-shaped fields degrade
/// to `None` members rather than failing the mapping. Pure function of its
/// input.
pub fn map_section_from_entry(entry: &Entry) -> Option<Section> {
    let section_type = SectionType::from_tag(entry.content_type_tag()?)?;
    match section_type {
        SectionType::Hero => Some(Section::Hero(map_hero_section(entry))),
    }
}

/// Map a sequence of entries, in order, skipping unsupported ones.
pub fn map_sections(entries: &[Entry]) -> Vec<Section> {
    entries.iter().filter_map(map_section_from_entry).collect()
}
