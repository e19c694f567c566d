//! Hero section extraction.
//!
//! The hero is the only section variant with conditional asset/style logic:
//! its visual style must never point at an asset the entry does not carry.
//! Extraction happens in two steps — field extraction, then the
//! style/asset reconciliation pass — so the consistency rule lives in one
//! place and is independently testable.

use folio_types::{ActionKind, HeroSection, HeroStyle, SectionAction};
use serde_json::Value;

use crate::entry::Entry;

/// Map a hero entry into a [`HeroSection`].
///
/// The dispatcher has already matched the entry's content type; this
/// function is total over any field bag. Missing display copy stays `None`
/// deliberately — the view degrades visibly rather than showing synthesized
/// placeholder text. Only `hero_style` has a neutral default.
pub fn map_hero_section(entry: &Entry) -> HeroSection {
    let mut section = HeroSection {
        anchor_id: entry.string_field("anchorId"),
        hero_style: style_from_field(entry.field("heroStyle")),
        eyebrow: entry.string_field("eyebrow"),
        title: entry.string_field("title"),
        tagline: entry.string_field("tagline"),
        intro: entry.string_field("intro"),
        avatar_url: entry.asset_url_field("avatarImage"),
        hero_image_url: entry.asset_url_field("heroImage"),
        primary_action: action_from_fields(
            entry,
            "primaryActionLabel",
            "primaryActionHref",
            ActionKind::Primary,
        ),
        secondary_action: action_from_fields(
            entry,
            "secondaryActionLabel",
            "secondaryActionHref",
            ActionKind::Secondary,
        ),
        highlights: entry.string_list_field("highlights"),
    };

    reconcile_hero_style(&mut section);
    section
}

/// Enforce the style/asset consistency rule.
///
/// A hero section must never claim the `avatar` style without an
/// `avatar_url`, or the `image` style without a `hero_image_url`. Both
/// cases downgrade silently to `typographic`, so the view layer can trust
/// the pairing without re-validating it.
pub fn reconcile_hero_style(section: &mut HeroSection) {
    section.hero_style = match section.hero_style {
        HeroStyle::Avatar if section.avatar_url.is_none() => HeroStyle::Typographic,
        HeroStyle::Image if section.hero_image_url.is_none() => HeroStyle::Typographic,
        style => style,
    };
}

/// Parse the `heroStyle` field, defaulting to `typographic` when the field
/// is absent, non-string, or not one of the recognized style tags.
fn style_from_field(value: Option<&Value>) -> HeroStyle {
    value
        .and_then(Value::as_str)
        .and_then(HeroStyle::from_tag)
        .unwrap_or_default()
}

/// Build an action from its label/href field pair.
///
/// If either half is missing the whole action is omitted — an actionable
/// link with a missing href (or an unlabeled one) is worse than no link.
fn action_from_fields(
    entry: &Entry,
    label_field: &str,
    href_field: &str,
    kind: ActionKind,
) -> Option<SectionAction> {
    let label = entry.string_field(label_field)?;
    let href = entry.string_field(href_field)?;
    Some(SectionAction::new(label, href, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hero_entry(fields: serde_json::Value) -> Entry {
        serde_json::from_value(json!({
            "sys": {"id": "hero-id", "contentType": {"sys": {"id": "sectionHero"}}},
            "fields": fields,
        }))
        .unwrap()
    }

    #[test]
    fn test_direct_string_fields() {
        let section = map_hero_section(&hero_entry(json!({
            "anchorId": "top",
            "eyebrow": "Web Engineer",
            "title": "Gilberto Haro",
            "tagline": "I build web platforms.",
            "intro": "Short intro.",
        })));
        assert_eq!(section.anchor_id.as_deref(), Some("top"));
        assert_eq!(section.eyebrow.as_deref(), Some("Web Engineer"));
        assert_eq!(section.title.as_deref(), Some("Gilberto Haro"));
        assert_eq!(section.tagline.as_deref(), Some("I build web platforms."));
        assert_eq!(section.intro.as_deref(), Some("Short intro."));
    }

    #[test]
    fn test_missing_copy_stays_absent() {
        // No placeholder text is synthesized for display strings.
        let section = map_hero_section(&hero_entry(json!({})));
        assert_eq!(section.title, None);
        assert_eq!(section.tagline, None);
        assert_eq!(section.intro, None);
        assert_eq!(section.eyebrow, None);
        assert_eq!(section.highlights, None);
    }

    #[test]
    fn test_style_defaults_to_typographic() {
        let section = map_hero_section(&hero_entry(json!({"title": "x"})));
        assert_eq!(section.hero_style, HeroStyle::Typographic);

        let section = map_hero_section(&hero_entry(json!({"heroStyle": "holographic"})));
        assert_eq!(section.hero_style, HeroStyle::Typographic);

        let section = map_hero_section(&hero_entry(json!({"heroStyle": 3})));
        assert_eq!(section.hero_style, HeroStyle::Typographic);
    }

    #[test]
    fn test_avatar_style_with_asset() {
        let section = map_hero_section(&hero_entry(json!({
            "heroStyle": "avatar",
            "avatarImage": {"fields": {"file": {"url": "//images.ctfassets.net/some-avatar.png"}}},
        })));
        assert_eq!(section.hero_style, HeroStyle::Avatar);
        assert!(section.avatar_url.as_deref().unwrap().starts_with("https://"));
    }

    #[test]
    fn test_avatar_style_without_asset_downgrades() {
        let section = map_hero_section(&hero_entry(json!({"heroStyle": "avatar"})));
        assert_eq!(section.hero_style, HeroStyle::Typographic);
        assert_eq!(section.avatar_url, None);
    }

    #[test]
    fn test_image_style_with_asset() {
        let section = map_hero_section(&hero_entry(json!({
            "heroStyle": "image",
            "heroImage": {"fields": {"file": {"url": "//images.ctfassets.net/hero.jpg"}}},
        })));
        assert_eq!(section.hero_style, HeroStyle::Image);
        assert_eq!(
            section.hero_image_url.as_deref(),
            Some("https://images.ctfassets.net/hero.jpg")
        );
    }

    #[test]
    fn test_image_style_without_asset_downgrades() {
        let section = map_hero_section(&hero_entry(json!({"heroStyle": "image"})));
        assert_eq!(section.hero_style, HeroStyle::Typographic);
        assert_eq!(section.hero_image_url, None);
    }

    #[test]
    fn test_broken_asset_shape_counts_as_absent() {
        // A wrong-shaped asset reference feeds the downgrade rule like a
        // missing one.
        let section = map_hero_section(&hero_entry(json!({
            "heroStyle": "avatar",
            "avatarImage": {"fields": {"file": {}}},
        })));
        assert_eq!(section.hero_style, HeroStyle::Typographic);
        assert_eq!(section.avatar_url, None);
    }

    #[test]
    fn test_unused_asset_survives_without_style() {
        // The asset URL is still exposed even when the style does not use it.
        let section = map_hero_section(&hero_entry(json!({
            "avatarImage": {"fields": {"file": {"url": "//images.ctfassets.net/a.png"}}},
        })));
        assert_eq!(section.hero_style, HeroStyle::Typographic);
        assert!(section.avatar_url.is_some());
    }

    #[test]
    fn test_action_pair_complete() {
        let section = map_hero_section(&hero_entry(json!({
            "primaryActionLabel": "View projects",
            "primaryActionHref": "#projects",
        })));
        assert_eq!(
            section.primary_action,
            Some(SectionAction::new(
                "View projects",
                "#projects",
                ActionKind::Primary
            ))
        );
        assert_eq!(section.secondary_action, None);
    }

    #[test]
    fn test_action_pair_half_missing_is_omitted() {
        let section = map_hero_section(&hero_entry(json!({
            "primaryActionLabel": "View projects",
            "secondaryActionHref": "#contact",
        })));
        assert_eq!(section.primary_action, None);
        assert_eq!(section.secondary_action, None);
    }

    #[test]
    fn test_secondary_action_kind() {
        let section = map_hero_section(&hero_entry(json!({
            "secondaryActionLabel": "Get in touch",
            "secondaryActionHref": "#contact",
        })));
        let action = section.secondary_action.unwrap();
        assert_eq!(action.kind, ActionKind::Secondary);
    }

    #[test]
    fn test_highlights_keep_order() {
        let section = map_hero_section(&hero_entry(json!({
            "highlights": ["Highlight one", "Highlight two", "Highlight three"],
        })));
        assert_eq!(
            section.highlights,
            Some(vec![
                "Highlight one".to_string(),
                "Highlight two".to_string(),
                "Highlight three".to_string(),
            ])
        );
    }

    #[test]
    fn test_reconcile_is_a_noop_on_consistent_sections() {
        let mut section = HeroSection {
            hero_style: HeroStyle::Avatar,
            avatar_url: Some("https://images.ctfassets.net/a.png".to_string()),
            ..HeroSection::default()
        };
        reconcile_hero_style(&mut section);
        assert_eq!(section.hero_style, HeroStyle::Avatar);

        let mut section = HeroSection::default();
        reconcile_hero_style(&mut section);
        assert_eq!(section.hero_style, HeroStyle::Typographic);
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let entry = hero_entry(json!({
            "anchorId": "top",
            "title": "Gilberto Haro",
            "heroStyle": "avatar",
            "avatarImage": {"fields": {"file": {"url": "//images.ctfassets.net/a.png"}}},
            "highlights": ["one", "two"],
        }));
        assert_eq!(map_hero_section(&entry), map_hero_section(&entry));
    }
}
