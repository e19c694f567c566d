//! Full document composition.

use folio_types::{PageMeta, Section};

use crate::escape::escape_html;
use crate::head::render_head;
use crate::hero::render_hero;
use crate::schema::render_person_schema;

/// Render one section as an HTML fragment.
///
/// Section variants without a view yet render nothing, matching the
/// skip-unsupported policy of the mapping layer.
pub fn render_section(section: &Section) -> String {
    match section {
        Section::Hero(hero) => render_hero(hero),
        _ => String::new(),
    }
}

/// Render a complete HTML document for the landing page.
///
/// Each section is wrapped in a `<section>` carrying its anchor id (when
/// present) so in-page navigation targets work without the section views
/// knowing about anchors.
pub fn render_page(meta: &PageMeta, sections: &[Section]) -> String {
    let mut html = String::with_capacity(2048);

    html.push_str("<!doctype html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&render_head(meta));
    html.push_str(&render_person_schema());
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("<main>\n");

    for section in sections {
        let fragment = render_section(section);
        if fragment.is_empty() {
            continue;
        }
        match section.anchor_id() {
            Some(anchor) => html.push_str(&format!(
                "<section id=\"{}\">\n{}</section>\n",
                escape_html(anchor),
                fragment
            )),
            None => html.push_str(&format!("<section>\n{}</section>\n", fragment)),
        }
    }

    html.push_str("</main>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}
