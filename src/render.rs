// src/render.rs
//! Value renderers: one raw JSON attribute in, one HTML fragment out.
//!
//! Every renderer is total. Whatever shape the data editors produce renders
//! to *something*, worst case the field's fallback string; a malformed
//! record must never abort a build. Returned fragments are already escaped
//! and get embedded as-is.

use serde_json::{Map, Value};

use crate::catalog::{Countries, Service};
use crate::config::consts::DESCRIPTION_PREVIEW_CHARS;
use crate::core::html::{a, esc, icon};
use crate::core::text;
use crate::schema::{FieldSpec, RenderKind};

/// Page shape a renderer runs in. Wide pages (single service) preview long
/// copy by character count; narrow side-by-side columns take the first
/// paragraph instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Wide,
    Narrow,
}

/// Everything a renderer may read besides the value itself.
pub struct RenderCtx<'a> {
    pub countries: &'a Countries,
    /// Region code the page is specialized for; `None` falls back to `WW`.
    pub region: Option<&'a str>,
    pub layout: Layout,
}

/// Continent codes recognized in `countries` arrays and `features` maps.
pub const REGIONS: &[(&str, &str)] = &[
    ("NA", "North America"),
    ("SA", "South America"),
    ("EU", "Europe"),
    ("AF", "Africa"),
    ("AS", "Asia"),
    ("OC", "Oceania"),
];

/// Interface classification, first match wins. Order matters: the combined
/// needles contain the single-device ones as substrings.
const INTERFACE_RULES: &[(&str, &str)] = &[
    ("mobile & desktop", "devices"),
    ("mobile and desktop", "devices"),
    ("mobile", "mobile"),
    ("desktop", "desktop"),
];

pub fn region_name(code: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/* ---------------- Dispatch ---------------- */

/// One table cell: the field's renderer applied to the service's raw value.
///
/// An absent or null attribute yields the empty string *without* invoking
/// the renderer, so sparse records produce blank cells and row suppression
/// can see them. Availability is the exception: it reads the whole record
/// and always renders, unknown data included.
pub fn cell(spec: &FieldSpec, svc: &Service, ctx: &RenderCtx) -> String {
    match spec.render {
        Some(RenderKind::Availability) => availability(svc, ctx),
        Some(kind) => svc
            .attr(spec.key)
            .map(|v| value(kind, v, ctx))
            .unwrap_or_default(),
        None => svc.attr(spec.key).map(plain).unwrap_or_default(),
    }
}

pub fn value(kind: RenderKind, v: &Value, ctx: &RenderCtx) -> String {
    match kind {
        RenderKind::Fees => fees(v),
        RenderKind::AppRatings => app_ratings(v),
        RenderKind::Interface => interface(v),
        RenderKind::Availability => countries_line(Some(v), ctx),
        RenderKind::Description => description(v, ctx),
        RenderKind::Founder => founder(v),
        RenderKind::YesNo => yes_no(v),
        RenderKind::List => list(v),
        RenderKind::RegionFeatures => region_features(v, ctx),
    }
}

/// Availability reads the record rather than a single attribute, so a
/// service with no `countries` data still gets its fallback line.
pub fn availability(svc: &Service, ctx: &RenderCtx) -> String {
    countries_line(svc.attr("countries"), ctx)
}

/* ---------------- Renderers ---------------- */

/// "Available in ..." from a `countries` code array. `WW` anywhere in the
/// list means global. A single plain country code gets its flag icon;
/// region codes and multi-country lists get the globe.
fn countries_line(v: Option<&Value>, ctx: &RenderCtx) -> String {
    let codes: Vec<&str> = match v {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    };
    if codes.is_empty() {
        return s!("Availability unknown");
    }
    if codes.iter().any(|c| c.eq_ignore_ascii_case("WW")) {
        return join!(icon("globe"), " Available globally");
    }
    let names: Vec<String> = codes
        .iter()
        .map(|code| match region_name(code) {
            Some(region) => s!(region),
            None => match ctx.countries.name(code) {
                Some(country) => s!(country),
                None => s!(*code),
            },
        })
        .collect();
    let marker = if codes.len() == 1 && region_name(codes[0]).is_none() {
        icon(&join!("flag-", &flag_key(codes[0])))
    } else {
        icon("globe")
    };
    join!(marker, " Available in ", &esc(&names.join(", ")))
}

/// Fee copy. Strings pass through; objects render intro, tier lines and
/// notes (notes only make sense under a tier table). Shapes with nothing
/// to show fall back to "Not available".
fn fees(v: &Value) -> String {
    match v {
        Value::String(text) => format!(r#"<p class="fees">{}</p>"#, esc(text)),
        Value::Object(o) => {
            let mut out = s!();
            if let Some(intro) = o.get("intro").and_then(Value::as_str) {
                out.push_str(&format!(r#"<p class="fees-intro">{}</p>"#, esc(intro)));
            }
            if let Some(tiers) = o.get("tiers").and_then(Value::as_array) {
                for tier in tiers {
                    let range = tier.get("range").and_then(scalar_text);
                    let fee = tier.get("fee").and_then(scalar_text);
                    let (Some(range), Some(fee)) = (range, fee) else { continue };
                    out.push_str(&format!(
                        r#"<div class="fee-tier">{}: {}</div>"#,
                        esc(&range),
                        esc(&fee)
                    ));
                }
                if let Some(notes) = o.get("notes").and_then(Value::as_str) {
                    out.push_str(&format!(r#"<p class="fee-notes"><em>{}</em></p>"#, esc(notes)));
                }
            }
            if out.is_empty() { s!("Not available") } else { out }
        }
        _ => s!("Not available"),
    }
}

/// Store ratings: pre-written text, or one line per platform.
fn app_ratings(v: &Value) -> String {
    match v {
        Value::Object(o) => {
            if let Some(text) = o.get("text").and_then(Value::as_str) {
                return esc(text);
            }
            let rating = |key: &str| {
                o.get(key)
                    .and_then(scalar_text)
                    .map(|t| esc(&t))
                    .unwrap_or_else(|| s!("N/A"))
            };
            join!("iOS: ", &rating("ios"), "<br>Android: ", &rating("android"))
        }
        _ => scalar_text(v).map(|t| esc(&t)).unwrap_or_else(|| s!("N/A")),
    }
}

/// Free-text interface description, classified by substring into an icon.
/// Unrecognized text renders bare; no guessing. Only strings qualify.
fn interface(v: &Value) -> String {
    let Some(text) = v.as_str().map(str::trim).filter(|t| !t.is_empty()) else {
        return s!("N/A");
    };
    let lowered = text.to_lowercase();
    for (needle, key) in INTERFACE_RULES {
        if lowered.contains(needle) {
            return join!(icon(key), " ", &esc(text));
        }
    }
    esc(text)
}

/// Long-form copy, collapsible once it gets long. The toggle is plain
/// markup; behavior belongs to the page script.
fn description(v: &Value, ctx: &RenderCtx) -> String {
    let Some(text) = v.as_str() else { return s!() };
    let paras = text::paragraphs(text);
    if paras.is_empty() {
        return s!();
    }
    let full: String = paras.iter().map(|p| format!("<p>{}</p>", esc(p))).collect();
    if text.chars().count() < DESCRIPTION_PREVIEW_CHARS {
        return full;
    }
    let lead = match ctx.layout {
        Layout::Wide => {
            let flat = text::normalize_ws(text);
            join!(text::preview(&flat, DESCRIPTION_PREVIEW_CHARS), "…")
        }
        Layout::Narrow => s!(paras[0]),
    };
    let mut out = s!(r#"<div class="description">"#);
    out.push_str(&format!(r#"<p class="description-preview">{}</p>"#, esc(&lead)));
    out.push_str(&format!(r#"<div class="description-full" hidden>{full}</div>"#));
    out.push_str(r#"<button type="button" class="description-toggle">Show more</button>"#);
    out.push_str("</div>");
    out
}

/// Founder profile: a bare name, or `{name, title?, link?}`.
fn founder(v: &Value) -> String {
    match v {
        Value::String(name) => esc(name),
        Value::Object(o) => {
            let Some(name) = o.get("name").and_then(Value::as_str) else {
                return s!();
            };
            let mut out = match o.get("link").and_then(Value::as_str) {
                Some(link) => a(link, name),
                None => esc(name),
            };
            if let Some(title) = o.get("title").and_then(Value::as_str) {
                out.push_str(&format!(r#" <span class="founder-title">{}</span>"#, esc(title)));
            }
            out
        }
        _ => s!(),
    }
}

fn yes_no(v: &Value) -> String {
    match v {
        Value::Bool(true) => s!("Yes"),
        _ => s!("No"),
    }
}

/// Array fields, comma-joined.
fn list(v: &Value) -> String {
    let texts: Vec<String> = match v {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    };
    if texts.is_empty() {
        s!("Not available")
    } else {
        esc(&texts.join(", "))
    }
}

/// Regional feature lists with positive/negative markers. Picks the
/// requested region's list, then `WW`, then the first region present.
fn region_features(v: &Value, ctx: &RenderCtx) -> String {
    let Some(by_region) = v.as_object() else { return s!() };
    let pick = ctx
        .region
        .and_then(|r| lookup_region(by_region, r))
        .or_else(|| lookup_region(by_region, "WW"))
        .or_else(|| by_region.values().next());
    let Some(Value::Array(items)) = pick else { return s!() };

    let mut out = s!(r#"<ul class="features">"#);
    let mut any = false;
    for item in items {
        let Some(text) = item.get("text").and_then(Value::as_str) else {
            continue;
        };
        let (status, mark) = match item.get("status").and_then(Value::as_str) {
            Some("negative") => ("negative", "✗"),
            _ => ("positive", "✓"),
        };
        out.push_str(&format!(r#"<li class="feature-{status}">{mark} {}</li>"#, esc(text)));
        any = true;
    }
    out.push_str("</ul>");
    if any { out } else { s!() }
}

/* ---------------- Helpers ---------------- */

/// Plain pass-through for fields without a renderer. Scalars only;
/// structured values don't belong in a plain cell.
fn plain(v: &Value) -> String {
    scalar_text(v).map(|t| esc(&t)).unwrap_or_default()
}

/// Scalar to display text. Trimmed; whitespace-only strings count as empty.
fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => {
            let t = s.trim();
            (!t.is_empty()).then(|| s!(t))
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(s!(if *b { "true" } else { "false" })),
        _ => None,
    }
}

fn lookup_region<'a>(map: &'a Map<String, Value>, code: &str) -> Option<&'a Value> {
    map.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(code))
        .map(|(_, v)| v)
}

/// Icon key for a country flag. Codes come from data files, so the key is
/// reduced to lowercase ASCII alphanumerics before it lands in a class.
fn flag_key(code: &str) -> String {
    code.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
