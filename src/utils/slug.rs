//! URL slug derivation and validation.

use regex::Regex;
use std::sync::LazyLock;

/// Slugs contain only lowercase ASCII letters, digits and hyphens.
pub static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9-]+$").expect("slug pattern is a valid regex")
});

/// Derives a slug from a title.
///
/// Lower-cases the input, replaces every run of characters outside
/// `[a-z0-9]` with a single `-` and strips leading/trailing hyphens.
///
/// ```ignore
/// assert_eq!(slugify("  Hello, World! "), "hello-world");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Trims and lower-cases a client-supplied slug before validation.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase()
}
