//! HTML rendering for the folio site engine.
//!
//! Pure presentation over the typed sections from `folio-types`: every
//! function here turns already-decided data into markup strings. There is
//! deliberately no decision logic — in particular, the hero view trusts the
//! style/asset pairing guaranteed by the mapping layer and does not
//! re-validate it.
//!
//! # Module Organization
//!
//! - [`escape`] - HTML escaping for dynamic text
//! - [`hero`] - The hero section view
//! - [`head`] - `<head>` metadata tags
//! - [`schema`] - schema.org Person structured data
//! - [`page`] - Full document composition

pub mod escape;
pub mod head;
pub mod hero;
pub mod page;
pub mod schema;

pub use escape::escape_html;
pub use head::render_head;
pub use hero::render_hero;
pub use page::{render_page, render_section};
pub use schema::{person_schema, render_person_schema};
