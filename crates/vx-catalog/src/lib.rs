//! Static language catalog for Voxlink.
//!
//! The catalog is parsed from the SQL language seed at build time and
//! embedded in the binary as literal data. At runtime it is exposed through
//! read-only lookup structures built once on first use; every query is
//! synchronous, in-memory, and safe to call concurrently from any thread.
//!
//! Unknown codes never fail: membership and flag queries degrade to `false`,
//! lookups to `None`. The one fallible operation is [`LanguageCode::parse`],
//! which validates a value and yields the narrowed code type.

mod types;

pub use types::{CatalogMetadata, Language, LanguageCode};

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

// Generated by build.rs from the SQL seed; defines LANGUAGES and
// CATALOG_METADATA.
include!(concat!(env!("OUT_DIR"), "/catalog_data.rs"));

/// Set of all valid ISO 639-3 codes, for O(1) membership tests.
static VALID_CODES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| LANGUAGES.iter().map(|language| language.code).collect());

/// Map from code to catalog record, for O(1) retrieval.
static LANGUAGE_BY_CODE: Lazy<HashMap<&'static str, &'static Language>> = Lazy::new(|| {
    let mut by_code = HashMap::with_capacity(LANGUAGES.len());
    for language in LANGUAGES {
        if by_code.insert(language.code, language).is_some() {
            // Duplicates are rejected when the catalog is generated; if one
            // ever slips through, the later entry wins.
            tracing::warn!(code = language.code, "duplicate language code in catalog");
        }
    }
    tracing::debug!(
        total_languages = LANGUAGES.len(),
        "language catalog index built"
    );
    by_code
});

/// The full catalog, in seed order.
pub fn languages() -> &'static [Language] {
    LANGUAGES
}

/// Generation metadata for the embedded catalog.
pub fn metadata() -> &'static CatalogMetadata {
    &CATALOG_METADATA
}

/// Returns true iff `value` is a language code present in the catalog.
pub fn is_language_code(value: &str) -> bool {
    VALID_CODES.contains(value)
}

/// Look up the catalog record for `code`. `None` for unknown codes.
pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGE_BY_CODE.get(code).copied()
}

/// Whether `code` names a language offerable for interpretation services.
///
/// Unknown codes return `false`; callers that need to tell unknown apart
/// from known-but-not-offerable should use [`find_language`].
pub fn is_offerable(code: &str) -> bool {
    find_language(code).is_some_and(|language| language.offerable)
}

/// Whether `code` names a language visible in UI selectors.
///
/// Unknown codes return `false`, same as [`is_offerable`].
pub fn is_visible(code: &str) -> bool {
    find_language(code).is_some_and(|language| language.visible)
}

/// The visible subset of the catalog, in catalog order.
pub fn visible_languages() -> Vec<&'static Language> {
    LANGUAGES.iter().filter(|language| language.visible).collect()
}

/// The offerable subset of the catalog, in catalog order.
pub fn offerable_languages() -> Vec<&'static Language> {
    LANGUAGES.iter().filter(|language| language.offerable).collect()
}
