//! Site-wide constants.
//!
//! Fallback values used when the CMS provides no usable page metadata, and
//! the fixed person profile behind the structured-data document. Config can
//! override the SEO values per deployment; the profile is the site owner's.

// =============================================================================
// SEO Fallbacks
// =============================================================================

/// Default document title when the CMS provides none.
pub const DEFAULT_TITLE: &str = "Gilberto Haro – Web Engineer & Content Systems";

/// Default meta description when the CMS provides none.
pub const DEFAULT_DESCRIPTION: &str = "Web engineer focused on content platforms, \
marketing systems, and polished UX, blending creative media roots with modern \
frontend engineering.";

/// Canonical site URL.
pub const DEFAULT_URL: &str = "https://gilbertoharo.com";

/// Default Open Graph preview image.
pub const DEFAULT_OG_IMAGE: &str = "https://gilbertoharo.com/og/landing-default.png";

// =============================================================================
// Person Profile
// =============================================================================

/// Full name for the schema.org Person document.
pub const PERSON_NAME: &str = "Gilberto Alejandro Haro";

/// Job title for the schema.org Person document.
pub const PERSON_JOB_TITLE: &str = "Web Engineer & Content Systems";

/// External profile links (`sameAs` in the Person document).
pub const PERSON_PROFILES: [&str; 2] = [
    "https://www.linkedin.com/in/gilberto-haro-2b108222b/",
    "https://github.com/gah-code",
];
