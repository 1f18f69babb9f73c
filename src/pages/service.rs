// src/pages/service.rs
//! Single-service detail page: header, full-width field table, FAQ and
//! links into the comparison pages for its category.

use crate::catalog::{Countries, Faqs, Service};
use crate::config::consts::COMPARE_PREFIX;
use crate::config::options::BuildOptions;
use crate::core::html::{a, esc, img};
use crate::core::slug::{pair_slug, slugify};
use crate::pages::{blocks, document::Document};
use crate::render::{Layout, RenderCtx};
use crate::rows;
use crate::schema;

/// Build one service page. `siblings` are the other services of the same
/// category, in name order; they become "compare against" links.
pub fn build(
    svc: &Service,
    siblings: &[&Service],
    countries: &Countries,
    faqs: &Faqs,
    opts: &BuildOptions,
) -> String {
    let slug = slugify(&svc.name);
    let ctx = RenderCtx { countries, region: None, layout: Layout::Wide };
    let category = svc.category.as_deref();
    let table_rows = rows::build_rows(&[svc], category, &ctx);

    let title = format!("{} fees, features and availability", svc.name);
    let meta = format!("What {} offers, what it costs and where it works.", svc.name);
    let canonical = format!("{}/{slug}/", opts.base_url());
    let mut doc = Document::new(&title, &meta, &canonical);

    let mut trail: Vec<(&str, Option<&str>)> = vec![("Home", Some("/"))];
    if let Some(c) = category {
        trail.push((schema::category_title(c), None));
    }
    trail.push((&svc.name, None));

    doc.push_ld(&blocks::breadcrumbs_json_ld(&trail, opts.base_url()));
    doc.push_ld(&blocks::organization(svc));
    let entries = faqs.get(&slug).map(Vec::as_slice).unwrap_or_default();
    if !entries.is_empty() {
        doc.push_ld(&blocks::faq_json_ld(entries));
    }

    doc.push(&blocks::breadcrumbs(&trail));
    doc.push(&header(svc));
    doc.push(&blocks::rows_table(&[], &table_rows));
    doc.push(&blocks::faq_block(entries));
    if !siblings.is_empty() {
        doc.push(&compare_links(svc, siblings));
    }
    doc.finish()
}

fn header(svc: &Service) -> String {
    let mut out = s!(r#"<header class="service-header">"#);
    if let Some(logo) = svc.logo.as_deref() {
        out.push_str(&img(logo, &svc.name));
    }
    out.push_str(&format!("<h1>{}</h1>", esc(&svc.name)));
    if let Some(url) = svc.website.as_deref() {
        out.push_str(&format!(r#"<p class="website">{}</p>"#, a(url, "Visit website")));
    }
    out.push_str("</header>");
    out
}

fn compare_links(svc: &Service, siblings: &[&Service]) -> String {
    let mut out = s!(r#"<section class="compare-links"><h2>Compare</h2><ul>"#);
    for other in siblings {
        let pair = pair_slug(&svc.name, &other.name);
        let label = format!("{} vs {}", svc.name, other.name);
        out.push_str(&format!("<li>{}</li>", a(&format!("/{COMPARE_PREFIX}/{pair}/"), &label)));
    }
    out.push_str("</ul></section>");
    out
}
