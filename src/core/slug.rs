// src/core/slug.rs
//! Deterministic URL slugs for services and service pairs.
//!
//! Every page address on the site derives from a service name through
//! [`slugify`], and every comparison page from two names through
//! [`pair_slug`]. Both are pure and total; rebuilds with unchanged names
//! produce unchanged addresses.

/// Name → URL slug.
///
/// Lower-cases, maps `&` to " and ", collapses any run of
/// non-alphanumeric characters into a single hyphen, and trims hyphens
/// at the edges. May return an empty string for degenerate input.
/// Idempotent: a slug run through again comes out unchanged.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase().replace('&', " and ");
    let mut out = String::with_capacity(lowered.len());
    let mut last_hyphen = false;
    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            last_hyphen = false;
        } else if !last_hyphen {
            out.push('-');
            last_hyphen = true;
        }
    }
    out.trim_matches('-').to_string()
}

/// Canonical slug for an unordered pair of service names.
///
/// Slugifies each name independently, sorts the two slugs
/// lexicographically, joins with "-vs-". Commutative by construction:
/// `pair_slug(a, b) == pair_slug(b, a)`.
pub fn pair_slug(a: &str, b: &str) -> String {
    let (mut x, mut y) = (slugify(a), slugify(b));
    if y < x {
        std::mem::swap(&mut x, &mut y);
    }
    join!(x, "-vs-", &y)
}

/// The non-canonical ordering of the same pair. A page is never written
/// here; redirect rules point it at the canonical slug.
pub fn reversed_pair_slug(a: &str, b: &str) -> String {
    let (mut x, mut y) = (slugify(a), slugify(b));
    if y < x {
        std::mem::swap(&mut x, &mut y);
    }
    join!(y, "-vs-", &x)
}
