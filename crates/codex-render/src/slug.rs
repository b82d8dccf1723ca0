//! URL-safe name normalization.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a name into a slug: lower-case, diacritics stripped, every run
/// of non-alphanumeric characters collapsed to a single interior dash.
///
/// Idempotent: `slugify(slugify(n)) == slugify(n)`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut gap = false;
    for c in name.nfd() {
        if c.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(c.to_ascii_lowercase());
        } else if !is_combining_mark(c) {
            gap = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_dashes_whitespace() {
        assert_eq!(slugify("Ancient Egypt"), "ancient-egypt");
        assert_eq!(slugify("The  Great   Library"), "the-great-library");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(slugify("Teotihuacán"), "teotihuacan");
        assert_eq!(slugify("Œcumenical Château"), "cumenical-chateau");
    }

    #[test]
    fn collapses_punctuation_runs_and_trims() {
        assert_eq!(slugify("Chu-Ko-Nu"), "chu-ko-nu");
        assert_eq!(slugify("  -- Rome!! --  "), "rome");
        assert_eq!(slugify("St. Basil's Cathedral"), "st-basil-s-cathedral");
    }

    #[test]
    fn idempotent() {
        for name in ["Ancient Egypt", "Teotihuacán", "Chu-Ko-Nu", "Elizabeth I"] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn output_alphabet_is_constrained() {
        let slug = slugify("Æthelred the Unready (978–1016)");
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        assert!(!slug.contains("--"));
    }
}
