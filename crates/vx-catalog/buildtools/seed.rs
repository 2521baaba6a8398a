// Build-time parsing of the SQL language seed
//
// These types are used ONLY during compilation to parse the seed file.
// They are NOT included in the final binary.

use regex::Regex;

/// A language row parsed from the SQL seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLanguage {
    pub code: String,
    pub name_ref: String,
    pub name_display: String,
    pub offerable: bool,
    pub visible: bool,
}

// Matches: ('code', 'nameRef', 'nameDisplay', true/false, true/false)
// String values may contain SQL-escaped single quotes (e.g. 'Abu'' Arapesh').
const ROW_PATTERN: &str =
    r"\('([a-z]{3})',\s*'((?:[^']|'')*)',\s*'((?:[^']|'')*)',\s*(true|false),\s*(true|false)\)";

/// Extract every language row from the seed SQL, ignoring the surrounding
/// statement syntax. Row order is preserved; it becomes catalog order.
pub fn parse_seed(sql: &str) -> Result<Vec<RawLanguage>, Box<dyn std::error::Error>> {
    let row_regex = Regex::new(ROW_PATTERN)?;

    let languages: Vec<RawLanguage> = row_regex
        .captures_iter(sql)
        .map(|caps| RawLanguage {
            code: caps[1].to_string(),
            name_ref: unescape(&caps[2]),
            name_display: unescape(&caps[3]),
            offerable: &caps[4] == "true",
            visible: &caps[5] == "true",
        })
        .collect();

    if languages.is_empty() {
        return Err("no language rows found in seed SQL".into());
    }

    Ok(languages)
}

/// SQL doubles single quotes inside string literals; fold them back.
fn unescape(value: &str) -> String {
    value.replace("''", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_ignores_surrounding_sql() {
        let sql = r#"
INSERT INTO "language" ("code", "name_ref", "name_display", "is_offerable", "is_visible") VALUES
('eng', 'English', 'English', true, true),
('fas', 'Persian', 'Farsi', true, false)
ON CONFLICT ("code") DO NOTHING;
"#;
        let languages = parse_seed(sql).unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[0].code, "eng");
        assert!(languages[0].offerable);
        assert_eq!(languages[1].name_display, "Farsi");
        assert!(!languages[1].visible);
    }

    #[test]
    fn test_parse_unescapes_doubled_quotes() {
        let sql = "('aah', 'Abu'' Arapesh', 'Abu'' Arapesh', false, false)";
        let languages = parse_seed(sql).unwrap();
        assert_eq!(languages[0].name_ref, "Abu' Arapesh");
        assert_eq!(languages[0].name_display, "Abu' Arapesh");
    }

    #[test]
    fn test_parse_skips_malformed_rows() {
        // Four-letter code and unquoted name do not match the row shape
        let sql = "('engl', 'English', 'English', true, true)\n\
                   ('deu', German, 'German', true, true)\n\
                   ('spa', 'Spanish', 'Spanish', true, true)";
        let languages = parse_seed(sql).unwrap();
        assert_eq!(languages.len(), 1);
        assert_eq!(languages[0].code, "spa");
    }

    #[test]
    fn test_parse_empty_seed_is_an_error() {
        assert!(parse_seed("-- no rows here").is_err());
    }
}
