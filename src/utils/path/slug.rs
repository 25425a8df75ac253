//! Heading slug generation for anchor ids.

use deunicode::deunicode;

/// Slugify a heading title into an ASCII anchor id.
///
/// Transliterates Unicode to ASCII, lowercases, and collapses every
/// non-alphanumeric run into a single `-`.
///
/// # Examples
/// ```
/// use v8dev::utils::path::slug::slugify;
/// assert_eq!(slugify("DataView performance"), "dataview-performance");
/// assert_eq!(slugify("What's new in V8?"), "what-s-new-in-v8");
/// ```
pub fn slugify(title: &str) -> String {
    let ascii = deunicode(title.trim());
    let mut slug = String::with_capacity(ascii.len());
    let mut prev_dash = true; // suppress leading dash

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
