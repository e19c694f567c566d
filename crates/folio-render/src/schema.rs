//! schema.org Person structured data.

use serde_json::{json, Value};

use folio_types::constants::{
    DEFAULT_DESCRIPTION, DEFAULT_URL, PERSON_JOB_TITLE, PERSON_NAME, PERSON_PROFILES,
};

/// Build the schema.org Person document for the site owner.
pub fn person_schema() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": PERSON_NAME,
        "jobTitle": PERSON_JOB_TITLE,
        "description": DEFAULT_DESCRIPTION,
        "url": DEFAULT_URL,
        "sameAs": PERSON_PROFILES,
    })
}

/// Render the Person document as a JSON-LD script tag.
pub fn render_person_schema() -> String {
    format!(
        "<script type=\"application/ld+json\">{}</script>\n",
        person_schema()
    )
}
