//! Typed page sections.
//!
//! A `Section` is the render-ready representation of one page region,
//! derived from exactly one CMS entry by the mapping layer in
//! `folio-content`. The view layer consumes these types as-is and performs
//! no further decision logic.

use serde::{Deserialize, Serialize};

/// Visual treatment of the hero section.
///
/// Determines which optional visual asset the hero expects:
/// - `Typographic`: text only, no side asset
/// - `Avatar`: portrait image next to the copy (`avatar_url`)
/// - `Image`: full-bleed hero image (`hero_image_url`)
///
/// A mapped section never carries `Avatar` without `avatar_url` or `Image`
/// without `hero_image_url`; the mapper downgrades to `Typographic` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum HeroStyle {
    /// Text-only hero, no side asset
    #[default]
    Typographic,
    /// Portrait avatar next to the copy
    Avatar,
    /// Full-bleed hero image
    Image,
}

impl HeroStyle {
    /// Parse a style tag as it appears in CMS fields.
    ///
    /// Returns `None` for unrecognized tags; callers fall back to
    /// [`HeroStyle::Typographic`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "typographic" => Some(Self::Typographic),
            "avatar" => Some(Self::Avatar),
            "image" => Some(Self::Image),
            _ => None,
        }
    }

    /// The style tag as used in CSS class names and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Typographic => "typographic",
            Self::Avatar => "avatar",
            Self::Image => "image",
        }
    }
}

/// Position of an action link within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Primary call to action
    Primary,
    /// Secondary call to action
    Secondary,
}

impl ActionKind {
    /// The kind tag as used in CSS class names and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// An actionable link within a section.
///
/// Always fully populated: the mapper omits the whole action when either
/// the label or the href is missing from the source entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SectionAction {
    /// Visible link text
    pub label: String,
    /// Link target
    pub href: String,
    /// Position of the action within the section
    pub kind: ActionKind,
}

impl SectionAction {
    /// Create a new action link.
    pub fn new(label: impl Into<String>, href: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            kind,
        }
    }
}

/// The top-of-page introductory section.
///
/// All display copy is optional: content from the CMS is expected to be
/// incomplete as a matter of course, and missing copy surfaces as `None`
/// rather than synthesized placeholder text. Only `hero_style` has a safe
/// neutral default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HeroSection {
    /// In-page navigation target
    pub anchor_id: Option<String>,
    /// Visual treatment; see the consistency note on [`HeroStyle`]
    pub hero_style: HeroStyle,
    /// Short label rendered above the title
    pub eyebrow: Option<String>,
    /// Main heading
    pub title: Option<String>,
    /// One-line subheading
    pub tagline: Option<String>,
    /// Introductory paragraph
    pub intro: Option<String>,
    /// Absolute portrait URL, present only for [`HeroStyle::Avatar`]
    pub avatar_url: Option<String>,
    /// Absolute hero image URL, present only for [`HeroStyle::Image`]
    pub hero_image_url: Option<String>,
    /// Primary call to action
    pub primary_action: Option<SectionAction>,
    /// Secondary call to action
    pub secondary_action: Option<SectionAction>,
    /// Ordered highlight bullets (order is display order)
    pub highlights: Option<Vec<String>>,
}

/// A typed, render-ready page section.
///
/// Tagged union over the supported section variants. Serialized with a
/// `section_type` discriminant so snapshots stay self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(tag = "section_type", rename_all = "snake_case")]
pub enum Section {
    /// Top-of-page introductory section
    Hero(HeroSection),
}

impl Section {
    /// The discriminant tag for this section variant.
    pub fn section_type(&self) -> &'static str {
        match self {
            Self::Hero(_) => "hero",
        }
    }

    /// The in-page navigation anchor, if the section carries one.
    pub fn anchor_id(&self) -> Option<&str> {
        match self {
            Self::Hero(hero) => hero.anchor_id.as_deref(),
        }
    }

    /// Borrow the hero payload if this is a hero section.
    pub fn as_hero(&self) -> Option<&HeroSection> {
        match self {
            Self::Hero(hero) => Some(hero),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_style_tags() {
        assert_eq!(HeroStyle::from_tag("typographic"), Some(HeroStyle::Typographic));
        assert_eq!(HeroStyle::from_tag("avatar"), Some(HeroStyle::Avatar));
        assert_eq!(HeroStyle::from_tag("image"), Some(HeroStyle::Image));
        assert_eq!(HeroStyle::from_tag("collage"), None);
        assert_eq!(HeroStyle::from_tag(""), None);
    }

    #[test]
    fn test_hero_style_default() {
        assert_eq!(HeroStyle::default(), HeroStyle::Typographic);
    }

    #[test]
    fn test_hero_style_roundtrip_as_str() {
        for style in [HeroStyle::Typographic, HeroStyle::Avatar, HeroStyle::Image] {
            assert_eq!(HeroStyle::from_tag(style.as_str()), Some(style));
        }
    }

    #[test]
    fn test_action_kind_str() {
        assert_eq!(ActionKind::Primary.as_str(), "primary");
        assert_eq!(ActionKind::Secondary.as_str(), "secondary");
    }

    #[test]
    fn test_section_discriminant() {
        let section = Section::Hero(HeroSection::default());
        assert_eq!(section.section_type(), "hero");
        assert_eq!(section.anchor_id(), None);
        assert!(section.as_hero().is_some());
    }

    #[test]
    fn test_section_json_shape() {
        let section = Section::Hero(HeroSection {
            anchor_id: Some("top".to_string()),
            ..HeroSection::default()
        });
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["section_type"], "hero");
        assert_eq!(json["anchor_id"], "top");
        assert_eq!(json["hero_style"], "typographic");
    }

    #[test]
    fn test_action_serializes_kind_tag() {
        let action = SectionAction::new("View projects", "#projects", ActionKind::Primary);
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["label"], "View projects");
        assert_eq!(json["href"], "#projects");
        assert_eq!(json["kind"], "primary");
    }
}
