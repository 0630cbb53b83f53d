// src/domain/page/slug.rs
//! Title to slug normalisation.
//!
//! The rule is applied in a fixed order: lowercase, turn whitespace runs into a
//! single hyphen, drop anything that is not an ASCII word character or a hyphen,
//! collapse hyphen runs, then trim hyphens from both ends. Non-ASCII letters are
//! dropped rather than transliterated, so `"Café day"` becomes `"caf-day"`.

/// Source of candidate slugs for page titles.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Convert free-form text into a URL-safe slug.
///
/// The result only contains `[a-z0-9_-]`, never starts or ends with a hyphen and
/// never contains two hyphens in a row. It may be empty when the input has no
/// word characters at all.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for ch in lowered.chars() {
        if is_slug_whitespace(ch) {
            if !in_whitespace {
                push_hyphen(&mut slug);
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if ch == '-' {
            push_hyphen(&mut slug);
        } else if is_word_char(ch) {
            slug.push(ch);
        }
    }

    slug.trim_matches('-').to_owned()
}

/// True when `value` is already in the shape `slugify` produces.
pub fn is_normalized(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value.chars().all(|ch| is_word_char(ch) || ch == '-')
}

// Hyphen runs collapse here: a hyphen is never written twice in a row.
fn push_hyphen(slug: &mut String) {
    if !slug.ends_with('-') {
        slug.push('-');
    }
}

const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_'
}

// Same set as the ECMAScript `\s` class: Unicode White_Space minus NEL, plus the BOM.
fn is_slug_whitespace(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
}
