//! Code name normalisation and matching
//!
//! Code names coming from external encodings (XML attribute values, text
//! files, user input) are trimmed before use and compared without regard to
//! case. The first casing registered for a code stays canonical.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// Lower-to-upper case boundary inside an ISO identifier ("heavySmoke" -> "heavy|Smoke")
static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

// End of an acronym followed by a word ("2DParametric" -> "2D|Parametric")
static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").unwrap());

// Runs of characters that cannot appear in a programmatic name
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

/// Trim a code name, returning `None` when nothing is left
///
/// A blank name is the "no value" answer, never an error.
pub fn normalize(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Compare two code names case-insensitively
///
/// Comparison is Unicode aware and does not allocate.
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Check that a name can be registered as a new code
pub fn validate_code_name(name: &str) -> Result<()> {
    if normalize(name).is_none() {
        return Err(Error::Name("code name is blank".to_string()));
    }
    if name.chars().any(char::is_control) {
        return Err(Error::Name(format!(
            "code name '{}' contains control characters",
            name.escape_debug()
        )));
    }
    Ok(())
}

/// Derive a programmatic constant name from an ISO identifier
///
/// `heavySmokeOrDust` becomes `HEAVY_SMOKE_OR_DUST` and `in-confidence`
/// becomes `IN_CONFIDENCE`.
pub fn to_constant_name(identifier: &str) -> String {
    let split = CAMEL_BOUNDARY.replace_all(identifier.trim(), "${1}_${2}");
    let split = ACRONYM_BOUNDARY.replace_all(&split, "${1}_${2}");
    let joined = NON_WORD.replace_all(&split, "_");
    joined.trim_matches('_').to_uppercase()
}
