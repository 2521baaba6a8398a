// Runtime catalog types
//
// These types are embedded in the binary and used for language lookup at runtime.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use vx_types::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct CatalogMetadata {
    pub generated_timestamp: u64,
    pub source: &'static str,
    pub total_languages: usize,
}

impl CatalogMetadata {
    /// Get generation date as DateTime
    pub fn generated_date(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.generated_timestamp as i64, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }
}

/// A single entry of the language catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Language {
    /// ISO 639-3 three-letter code, unique across the catalog
    pub code: &'static str,
    /// Reference name (canonical / ISO name)
    pub name_ref: &'static str,
    /// Display name (may include commercial overrides)
    pub name_display: &'static str,
    /// Whether the language can be offered for interpretation services
    pub offerable: bool,
    /// Whether the language is visible in UI selectors
    pub visible: bool,
}

/// A language code validated against the catalog.
///
/// Construction goes through [`LanguageCode::parse`] (or `TryFrom` / serde
/// deserialization), so holding one proves the code exists in the catalog
/// and [`LanguageCode::language`] cannot miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageCode(&'static Language);

impl LanguageCode {
    /// Validate `value` against the catalog.
    ///
    /// Fails with [`AppError::InvalidLanguageCode`], carrying the offending
    /// value in the message, when `value` is not a known code.
    pub fn parse(value: &str) -> AppResult<Self> {
        match crate::find_language(value) {
            Some(language) => Ok(Self(language)),
            None => Err(AppError::InvalidLanguageCode(value.to_string())),
        }
    }

    /// The validated ISO 639-3 code.
    pub fn as_str(&self) -> &'static str {
        self.0.code
    }

    /// The catalog record for this code.
    pub fn language(&self) -> &'static Language {
        self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.code)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        self.0.code
    }
}

impl TryFrom<&str> for LanguageCode {
    type Error = AppError;

    fn try_from(value: &str) -> AppResult<Self> {
        Self::parse(value)
    }
}

impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.code)
    }
}

// Deserialization is the untyped boundary: anything that is not a string
// matching a catalog code is rejected here.
impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
