// src/schema.rs
//! # Field schema
//!
//! The single static description of every comparable attribute: its key in
//! the service JSON, its table label, and which renderer draws it. Every
//! render path (single-service detail, head-to-head comparison) reads this
//! one table, so a field added here shows up everywhere at once.
//!
//! ## Conventions & invariants
//! - `FIELDS` is ordered; it is the row order of every table on the site.
//! - Category whitelists list a *subset* of field keys, in schema order.
//!   Every whitelisted key must exist in `FIELDS` (enforced by the
//!   consistency test below, skipped silently at runtime).
//! - Categories missing from `CATEGORY_FIELDS`, and services without a
//!   category, fall back to the full schema.
//! - `availability` is a virtual field: no attribute of that name exists in
//!   the data. Its renderer reads the record's `countries` array.

/// Table label for one field: a plain string, or a stacked main/sub pair
/// for fields that carry a caption (e.g. "Fees" over "Processing fees").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Plain(&'static str),
    WithSub(&'static str, &'static str),
}

/// Which renderer in `crate::render` draws a field's raw value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderKind {
    Fees,
    AppRatings,
    Interface,
    Availability,
    Description,
    Founder,
    YesNo,
    List,
    RegionFeatures,
}

pub struct FieldSpec {
    pub key: &'static str,
    pub label: Label,
    /// None → the raw value passes through as escaped text.
    pub render: Option<RenderKind>,
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "description", label: Label::Plain("Description"), render: Some(RenderKind::Description) },
    FieldSpec { key: "fees", label: Label::WithSub("Fees", "Processing fees"), render: Some(RenderKind::Fees) },
    FieldSpec { key: "payment_methods", label: Label::Plain("Payment methods"), render: Some(RenderKind::List) },
    FieldSpec { key: "app_ratings", label: Label::Plain("App ratings"), render: Some(RenderKind::AppRatings) },
    FieldSpec { key: "interface", label: Label::Plain("Interface"), render: Some(RenderKind::Interface) },
    FieldSpec { key: "availability", label: Label::Plain("Availability"), render: Some(RenderKind::Availability) },
    FieldSpec { key: "features", label: Label::Plain("Features"), render: Some(RenderKind::RegionFeatures) },
    FieldSpec { key: "custodial", label: Label::WithSub("Custodial", "Who holds the keys"), render: Some(RenderKind::YesNo) },
    FieldSpec { key: "kyc", label: Label::WithSub("KYC", "Identity verification"), render: Some(RenderKind::YesNo) },
    FieldSpec { key: "open_source", label: Label::Plain("Open source"), render: Some(RenderKind::YesNo) },
    FieldSpec { key: "lightning", label: Label::Plain("Lightning support"), render: Some(RenderKind::YesNo) },
    FieldSpec { key: "founded", label: Label::Plain("Founded"), render: None },
    FieldSpec { key: "founder", label: Label::Plain("Founder"), render: Some(RenderKind::Founder) },
    FieldSpec { key: "headquarters", label: Label::Plain("Headquarters"), render: None },
];

/// Business categories and their display titles (breadcrumbs, page copy).
pub const CATEGORIES: &[(&str, &str)] = &[
    ("buy", "Buy Bitcoin"),
    ("spend", "Spend Bitcoin"),
    ("earn", "Earn Bitcoin"),
    ("store", "Store Bitcoin"),
    ("accept", "Accept Bitcoin"),
];

/// Which fields each category shows, in schema order. Wallets don't list
/// payment methods, merchant processors don't list app ratings, and so on.
pub const CATEGORY_FIELDS: &[(&str, &[&str])] = &[
    ("buy", &[
        "description", "fees", "payment_methods", "app_ratings", "interface",
        "availability", "features", "custodial", "kyc", "founded", "founder",
        "headquarters",
    ]),
    ("spend", &[
        "description", "fees", "app_ratings", "interface", "availability",
        "features", "custodial", "kyc", "founded", "headquarters",
    ]),
    ("earn", &[
        "description", "fees", "app_ratings", "interface", "availability",
        "features", "custodial", "kyc", "founded", "founder",
    ]),
    ("store", &[
        "description", "app_ratings", "interface", "availability", "features",
        "custodial", "open_source", "lightning", "founded", "founder",
    ]),
    ("accept", &[
        "description", "fees", "payment_methods", "interface", "availability",
        "features", "custodial", "kyc", "open_source", "lightning", "founded",
        "headquarters",
    ]),
];

pub fn field(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.key == key)
}

/// Display title for a category; unknown categories show their raw name.
pub fn category_title(category: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, title)| *title)
        .unwrap_or(category)
}

/// Resolve whitelist keys to descriptors. Unknown keys are skipped
/// silently; the consistency test keeps the static tables honest.
pub fn resolve(keys: &[&str]) -> Vec<&'static FieldSpec> {
    keys.iter().filter_map(|key| field(key)).collect()
}

/// Ordered descriptors for a category. Categories without a whitelist,
/// and services without a category, get every field in schema order.
pub fn fields_for_category(category: Option<&str>) -> Vec<&'static FieldSpec> {
    let listed = category.and_then(|c| {
        CATEGORY_FIELDS
            .iter()
            .find(|(name, _)| *name == c)
            .map(|(_, keys)| *keys)
    });
    match listed {
        Some(keys) => resolve(keys),
        None => FIELDS.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_are_unique() {
        for (i, f) in FIELDS.iter().enumerate() {
            assert!(
                FIELDS.iter().skip(i + 1).all(|other| other.key != f.key),
                "duplicate field key {}",
                f.key
            );
        }
    }

    #[test]
    fn every_whitelisted_key_exists() {
        for (category, keys) in CATEGORY_FIELDS {
            for key in *keys {
                assert!(field(key).is_some(), "{category} lists unknown key {key}");
            }
        }
    }

    #[test]
    fn whitelists_follow_schema_order() {
        let position = |key: &str| FIELDS.iter().position(|f| f.key == key).unwrap();
        for (category, keys) in CATEGORY_FIELDS {
            let positions: Vec<usize> = keys.iter().map(|k| position(k)).collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted, "{category} whitelist out of schema order");
        }
    }

    #[test]
    fn whitelist_categories_are_known() {
        for (category, _) in CATEGORY_FIELDS {
            assert!(
                CATEGORIES.iter().any(|(key, _)| key == category),
                "whitelist for unknown category {category}"
            );
        }
    }

    #[test]
    fn unknown_whitelist_key_is_skipped() {
        let picked = resolve(&["fees", "no_such_field", "founded"]);
        let keys: Vec<&str> = picked.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["fees", "founded"]);
    }

    #[test]
    fn unlisted_category_falls_back_to_all_fields() {
        assert_eq!(fields_for_category(Some("mining")).len(), FIELDS.len());
        assert_eq!(fields_for_category(None).len(), FIELDS.len());
    }
}
