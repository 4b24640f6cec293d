//! Label normalization: camel-case record keys and hyphenated slugs.

use crate::error::{ProcessingError, Result};

/// Turn a free-text parameter label into a camel-case field key.
///
/// Single-character words are dropped as noise, every remaining word is
/// slugged (diacritics stripped, lowercased, separators removed) and the words
/// are joined with a capital at each word boundary.
///
/// # Examples
/// ```
/// use wsq_importer::utils::normalize_key;
///
/// assert_eq!(normalize_key("Temperatura e ujit").unwrap(), "temperaturaUjit");
/// assert_eq!(normalize_key("pH").unwrap(), "ph");
/// ```
pub fn normalize_key(label: &str) -> Result<String> {
    let joined: String = label
        .split_whitespace()
        .filter(|word| word.chars().count() > 1)
        .map(|word| slug::slugify(word).replace('-', ""))
        .filter(|word| !word.is_empty())
        .map(|word| capitalize_first(&word))
        .collect();

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => Ok(first.to_lowercase().chain(chars).collect()),
        None => Err(ProcessingError::EmptyLabel {
            label: label.to_string(),
            row: None,
        }),
    }
}

/// Lowercase, hyphen-separated, ASCII-only form of a display name.
pub fn slugify_name(name: &str) -> String {
    slug::slugify(name)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
