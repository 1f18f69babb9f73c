// src/pages/blocks.rs
//! Blocks shared by both page layouts: breadcrumbs, logo headers, the
//! comparison table, verdict and FAQ copy, and their JSON-LD twins.

use serde_json::{Value, json};

use crate::catalog::{Faq, Service};
use crate::core::html::{a, esc, img};
use crate::core::slug::slugify;
use crate::rows::Row;

/// Breadcrumb trail from (label, href) pairs; entries without an href
/// render as plain text (normally just the last one).
pub fn breadcrumbs(trail: &[(&str, Option<&str>)]) -> String {
    let mut out = s!(r#"<nav class="breadcrumbs" aria-label="Breadcrumb"><ol>"#);
    for (label, href) in trail {
        match href {
            Some(h) => out.push_str(&format!("<li>{}</li>", a(h, label))),
            None => out.push_str(&format!("<li>{}</li>", esc(label))),
        }
    }
    out.push_str("</ol></nav>");
    out
}

pub fn breadcrumbs_json_ld(trail: &[(&str, Option<&str>)], base_url: &str) -> Value {
    let items: Vec<Value> = trail
        .iter()
        .enumerate()
        .map(|(i, (label, href))| {
            let mut item = json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": label,
            });
            if let Some(h) = href {
                item["item"] = json!(format!("{base_url}{h}"));
            }
            item
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// Side-by-side logo header for a comparison page, display order kept.
pub fn logo_row(left: &Service, right: &Service) -> String {
    join!(
        r#"<div class="logo-row">"#,
        &logo_cell(left),
        r#"<span class="vs">vs</span>"#,
        &logo_cell(right),
        "</div>"
    )
}

fn logo_cell(svc: &Service) -> String {
    let logo = svc.logo.as_deref().map(|src| img(src, &svc.name)).unwrap_or_default();
    format!(r#"<div class="logo-cell">{logo}<span>{}</span></div>"#, esc(&svc.name))
}

/// The comparison table. An empty `headers` slice means the single-service
/// layout, which has no header row.
pub fn rows_table(headers: &[&str], rows: &[Row]) -> String {
    let mut out = s!(r#"<table class="compare-table">"#);
    if !headers.is_empty() {
        out.push_str("<thead><tr><th></th>");
        for h in headers {
            out.push_str(&format!("<th>{}</th>", esc(h)));
        }
        out.push_str("</tr></thead>");
    }
    out.push_str("<tbody>");
    for row in rows {
        out.push_str(&format!(
            r#"<tr data-field="{}"><th scope="row">{}</th>"#,
            row.key, row.label
        ));
        for cell in &row.cells {
            out.push_str(&format!("<td>{cell}</td>"));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

/// Pre-written verdict copy with its tokens filled in.
pub fn verdict(text: &str, left: &Service, right: &Service) -> String {
    format!(
        r#"<div class="verdict"><h2>Verdict</h2><p>{}</p></div>"#,
        fill_tokens(text, &left.name, &right.name)
    )
}

/// Token substitution for stored comparison copy. `{LEFT}/{RIGHT}` follow
/// the on-page display order, `{A}/{B}` the canonical slug order, so the
/// same text reads correctly whichever service a viewer picked first.
pub fn fill_tokens(text: &str, left: &str, right: &str) -> String {
    let (first, second) = if slugify(left) <= slugify(right) {
        (left, right)
    } else {
        (right, left)
    };
    esc(text)
        .replace("{LEFT}", &esc(left))
        .replace("{RIGHT}", &esc(right))
        .replace("{A}", &esc(first))
        .replace("{B}", &esc(second))
}

/// FAQ entries as native disclosure widgets.
pub fn faq_block(faqs: &[Faq]) -> String {
    if faqs.is_empty() {
        return s!();
    }
    let mut out = s!(r#"<section class="faq"><h2>FAQ</h2>"#);
    for faq in faqs {
        out.push_str(&format!(
            "<details><summary>{}</summary><p>{}</p></details>",
            esc(&faq.question),
            esc(&faq.answer)
        ));
    }
    out.push_str("</section>");
    out
}

pub fn faq_json_ld(faqs: &[Faq]) -> Value {
    let entries: Vec<Value> = faqs
        .iter()
        .map(|f| {
            json!({
                "@type": "Question",
                "name": f.question,
                "acceptedAnswer": { "@type": "Answer", "text": f.answer },
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entries,
    })
}

pub fn organization(svc: &Service) -> Value {
    let mut org = json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": svc.name,
    });
    if let Some(url) = &svc.website {
        org["url"] = json!(url);
    }
    if let Some(logo) = &svc.logo {
        org["logo"] = json!(logo);
    }
    org
}
