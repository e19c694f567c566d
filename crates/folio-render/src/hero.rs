//! The hero section view.

use folio_types::{HeroSection, HeroStyle, SectionAction};

use crate::escape::escape_html;

/// Render a hero section as an HTML fragment.
///
/// Absent copy renders nothing for that sub-part. The side asset is keyed
/// off `hero_style` alone: the mapper guarantees the matching URL is
/// present whenever the style is `avatar` or `image`.
pub fn render_hero(section: &HeroSection) -> String {
    let style = section.hero_style.as_str();
    let mut html = String::with_capacity(512);

    html.push_str(&format!("<div class=\"hero hero--{}\">\n", style));
    html.push_str("  <div class=\"hero-main\">\n");

    if let Some(eyebrow) = &section.eyebrow {
        html.push_str(&format!(
            "    <p class=\"hero-eyebrow\">{}</p>\n",
            escape_html(eyebrow)
        ));
    }
    if let Some(title) = &section.title {
        html.push_str(&format!(
            "    <h1 class=\"hero-title\">{}</h1>\n",
            escape_html(title)
        ));
    }
    if let Some(tagline) = &section.tagline {
        html.push_str(&format!(
            "    <p class=\"hero-tagline\">{}</p>\n",
            escape_html(tagline)
        ));
    }
    if let Some(intro) = &section.intro {
        html.push_str(&format!(
            "    <p class=\"hero-intro\">{}</p>\n",
            escape_html(intro)
        ));
    }

    if section.primary_action.is_some() || section.secondary_action.is_some() {
        html.push_str("    <div class=\"hero-actions\">\n");
        if let Some(action) = &section.primary_action {
            html.push_str(&render_action(action));
        }
        if let Some(action) = &section.secondary_action {
            html.push_str(&render_action(action));
        }
        html.push_str("    </div>\n");
    }

    if let Some(highlights) = &section.highlights {
        if !highlights.is_empty() {
            html.push_str("    <ul class=\"hero-highlights\">\n");
            for item in highlights {
                html.push_str(&format!("      <li>{}</li>\n", escape_html(item)));
            }
            html.push_str("    </ul>\n");
        }
    }

    html.push_str("  </div>\n");

    match section.hero_style {
        HeroStyle::Avatar => {
            if let Some(url) = &section.avatar_url {
                let alt = match &section.title {
                    Some(title) => format!("Portrait of {}", title),
                    None => "Portrait".to_string(),
                };
                html.push_str("  <div class=\"hero-side hero-side--avatar\">\n");
                html.push_str(&format!(
                    "    <img src=\"{}\" alt=\"{}\" class=\"hero-avatar\">\n",
                    escape_html(url),
                    escape_html(&alt)
                ));
                html.push_str("  </div>\n");
            }
        }
        HeroStyle::Image => {
            if let Some(url) = &section.hero_image_url {
                html.push_str("  <div class=\"hero-side hero-side--image\">\n");
                html.push_str(&format!(
                    "    <img src=\"{}\" alt=\"\" class=\"hero-image\">\n",
                    escape_html(url)
                ));
                html.push_str("  </div>\n");
            }
        }
        _ => {}
    }

    html.push_str("</div>\n");
    html
}

fn render_action(action: &SectionAction) -> String {
    format!(
        "      <a href=\"{}\" class=\"button button-{}\">{}</a>\n",
        escape_html(&action.href),
        action.kind.as_str(),
        escape_html(&action.label)
    )
}
