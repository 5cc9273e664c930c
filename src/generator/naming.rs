//! Naming-convention transforms.
//!
//! Pure, total functions over identifier strings. [`SubjectName`] holds the
//! canonical StudlyCaps form, computed exactly once at the entry of a
//! generation call; every other convention (camel, snake, kebab, plural) is a
//! deterministic function of that canonical form.

use crate::error::GeneratorError;

/// Canonical StudlyCaps subject name.
///
/// Construction normalizes the raw identifier and rejects anything that
/// normalizes to an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectName(String);

impl SubjectName {
    /// Normalize a raw identifier into its canonical studly form.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidName`] if the input contains no
    /// alphanumeric characters.
    pub fn new(raw: &str) -> Result<Self, GeneratorError> {
        let studly = to_studly_case(raw);
        if studly.is_empty() {
            return Err(GeneratorError::InvalidName(raw.to_string()));
        }
        Ok(Self(studly))
    }

    /// The canonical studly form, e.g. `UserProfile`.
    pub fn studly(&self) -> &str {
        &self.0
    }

    /// Camel-case form, e.g. `userProfile`.
    pub fn camel(&self) -> String {
        to_camel_case(&self.0)
    }

    /// Snake-case form, e.g. `user_profile`.
    pub fn snake(&self) -> String {
        to_snake_case(&self.0)
    }

    /// Kebab-case form, e.g. `user-profile`.
    pub fn kebab(&self) -> String {
        to_kebab_case(&self.0)
    }
}

impl std::fmt::Display for SubjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split an identifier into words.
///
/// Boundaries are runs of non-alphanumeric characters, a lower-case letter or
/// digit followed by an upper-case letter, and the end of an upper-case run
/// when it precedes a capitalized word (`HTMLParser` splits into `HTML` +
/// `Parser`).
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some(prev) = current.chars().last() {
            let upper_after_lower =
                c.is_ascii_uppercase() && (prev.is_ascii_lowercase() || prev.is_ascii_digit());
            let acronym_end = c.is_ascii_uppercase()
                && prev.is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if upper_after_lower || acronym_end {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert an identifier to StudlyCaps (Pascal case).
///
/// Splits on separators and case transitions, capitalizes each word and
/// concatenates. Idempotent: `to_studly_case("UserProfile")` is unchanged.
///
/// ```
/// use tddgen::generator::to_studly_case;
/// assert_eq!(to_studly_case("user_profile"), "UserProfile");
/// assert_eq!(to_studly_case("userProfile"), "UserProfile");
/// ```
pub fn to_studly_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert an identifier to camel case (studly with a lower-case first char).
pub fn to_camel_case(s: &str) -> String {
    let studly = to_studly_case(s);
    let mut chars = studly.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert an identifier to snake_case.
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert an identifier to kebab-case.
pub fn to_kebab_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Irregular plural forms looked up before the suffix rules apply.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
];

/// Pluralize the final word of a lower-case identifier.
///
/// This is a heuristic, not a dictionary. The rule set, in order:
///
/// 1. irregular forms from a small exception table (person → people, ...)
/// 2. `y` after a consonant → `ies` (category → categories, but day → days)
/// 3. endings `s`, `x`, `ch`, `sh` → append `es` (bus → buses, dish → dishes)
/// 4. otherwise append `s`
///
/// Multi-word identifiers keep their prefix: `user_profile` → `user_profiles`.
pub fn pluralize(s: &str) -> String {
    let boundary = s.rfind(['_', '-']).map_or(0, |i| i + 1);
    let (prefix, word) = s.split_at(boundary);

    for (singular, plural) in IRREGULAR_PLURALS {
        if word == *singular {
            return format!("{prefix}{plural}");
        }
    }

    if let Some(stem) = word.strip_suffix('y') {
        if stem
            .chars()
            .last()
            .is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        {
            return format!("{prefix}{stem}ies");
        }
    }

    if word.ends_with('s') || word.ends_with('x') || word.ends_with("ch") || word.ends_with("sh") {
        return format!("{prefix}{word}es");
    }

    format!("{prefix}{word}s")
}
