//! `<head>` metadata tags.

use folio_types::PageMeta;

use crate::escape::escape_html;

/// Render the title, description, and Open Graph tags for a page.
///
/// `PageMeta` is already default-filled, so every tag is always emitted.
pub fn render_head(meta: &PageMeta) -> String {
    let title = escape_html(&meta.title);
    let description = escape_html(&meta.description);
    let url = escape_html(&meta.url);
    let image = escape_html(&meta.image_url);

    let mut html = String::with_capacity(512);
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        description
    ));
    html.push_str(&format!(
        "<meta property=\"og:title\" content=\"{}\">\n",
        title
    ));
    html.push_str(&format!(
        "<meta property=\"og:description\" content=\"{}\">\n",
        description
    ));
    html.push_str("<meta property=\"og:type\" content=\"website\">\n");
    html.push_str(&format!("<meta property=\"og:url\" content=\"{}\">\n", url));
    html.push_str(&format!(
        "<meta property=\"og:image\" content=\"{}\">\n",
        image
    ));
    html
}
