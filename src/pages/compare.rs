// src/pages/compare.rs
//! Head-to-head comparison page for one pair of services.
//!
//! `left`/`right` is the display order and only affects presentation; the
//! canonical address comes from the sorted pair slug either way.

use crate::catalog::{Countries, Faqs, Service, Verdicts};
use crate::config::consts::COMPARE_PREFIX;
use crate::config::options::BuildOptions;
use crate::core::html::esc;
use crate::core::slug::pair_slug;
use crate::pages::{blocks, document::Document};
use crate::render::{Layout, RenderCtx};
use crate::rows;
use crate::schema;

pub fn build(
    left: &Service,
    right: &Service,
    countries: &Countries,
    verdicts: &Verdicts,
    faqs: &Faqs,
    opts: &BuildOptions,
) -> String {
    let slug = pair_slug(&left.name, &right.name);
    let ctx = RenderCtx { countries, region: None, layout: Layout::Narrow };
    let category = left.category.as_deref();
    let table_rows = rows::build_rows(&[left, right], category, &ctx);

    let heading = format!("{} vs {}", left.name, right.name);
    let title = format!("{heading}: fees, features and availability compared");
    let meta = format!(
        "{} and {} side by side: fees, features and where each one works.",
        left.name, right.name
    );
    let canonical = format!("{}/{COMPARE_PREFIX}/{slug}/", opts.base_url());
    let mut doc = Document::new(&title, &meta, &canonical);

    let mut trail: Vec<(&str, Option<&str>)> = vec![("Home", Some("/"))];
    if let Some(c) = category {
        trail.push((schema::category_title(c), None));
    }
    trail.push((&heading, None));

    doc.push_ld(&blocks::breadcrumbs_json_ld(&trail, opts.base_url()));
    doc.push_ld(&blocks::organization(left));
    doc.push_ld(&blocks::organization(right));
    let entries = faqs.get(&slug).map(Vec::as_slice).unwrap_or_default();
    if !entries.is_empty() {
        doc.push_ld(&blocks::faq_json_ld(entries));
    }

    doc.push(&blocks::breadcrumbs(&trail));
    doc.push(&format!("<h1>{}</h1>", esc(&heading)));
    doc.push(&blocks::logo_row(left, right));
    doc.push(&blocks::rows_table(&[left.name.as_str(), right.name.as_str()], &table_rows));
    if let Some(text) = verdicts.get(&slug) {
        doc.push(&blocks::verdict(text, left, right));
    }
    doc.push(&blocks::faq_block(entries));
    doc.finish()
}
