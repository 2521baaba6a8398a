// Build-time code generation for the embedded language catalog

use crate::buildtools::seed::RawLanguage;
use std::collections::HashSet;
use std::fmt::Write as _;
use std::time::{SystemTime, UNIX_EPOCH};

/// Render the generated catalog source: the `LANGUAGES` table plus its
/// `CATALOG_METADATA`. Duplicate codes fail the build here rather than
/// being resolved silently at runtime.
pub fn generate_catalog_code(
    languages: &[RawLanguage],
    source: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut seen = HashSet::new();
    for language in languages {
        if !seen.insert(language.code.as_str()) {
            return Err(format!("duplicate language code in seed: {}", language.code).into());
        }
    }

    let generated_timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

    let mut out = String::new();
    writeln!(out, "// AUTO-GENERATED by build.rs from {source} -- do not edit.")?;
    writeln!(out)?;
    writeln!(out, "static LANGUAGES: &[Language] = &[")?;
    for language in languages {
        writeln!(
            out,
            "    Language {{ code: {:?}, name_ref: {:?}, name_display: {:?}, offerable: {}, visible: {} }},",
            language.code, language.name_ref, language.name_display, language.offerable, language.visible
        )?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    writeln!(out, "static CATALOG_METADATA: CatalogMetadata = CatalogMetadata {{")?;
    writeln!(out, "    generated_timestamp: {generated_timestamp},")?;
    writeln!(out, "    source: {source:?},")?;
    writeln!(out, "    total_languages: {},", languages.len())?;
    writeln!(out, "}};")?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str) -> RawLanguage {
        RawLanguage {
            code: code.to_string(),
            name_ref: "Name".to_string(),
            name_display: "Name".to_string(),
            offerable: true,
            visible: true,
        }
    }

    #[test]
    fn test_generated_code_contains_every_row() {
        let code = generate_catalog_code(&[row("eng"), row("spa")], "seed.sql").unwrap();
        assert!(code.contains(r#"code: "eng""#));
        assert!(code.contains(r#"code: "spa""#));
        assert!(code.contains("total_languages: 2"));
    }

    #[test]
    fn test_duplicate_codes_fail_generation() {
        let err = generate_catalog_code(&[row("eng"), row("eng")], "seed.sql").unwrap_err();
        assert!(err.to_string().contains("eng"));
    }

    #[test]
    fn test_string_values_are_rust_escaped() {
        let mut language = row("aah");
        language.name_ref = "Abu' \"Arapesh\"".to_string();
        let code = generate_catalog_code(&[language], "seed.sql").unwrap();
        assert!(code.contains(r#"name_ref: "Abu' \"Arapesh\"""#));
    }
}
