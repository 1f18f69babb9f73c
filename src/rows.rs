// src/rows.rs
//! Row assembly: (services, category) in, ordered visible table rows out.
//!
//! The same pass serves both layouts. A single-service page is a one-cell
//! row set; a comparison page hands in two services and gets cells in the
//! same order.

use crate::catalog::Service;
use crate::core::html::esc;
use crate::render::{self, RenderCtx};
use crate::schema::{self, Label};

/// One visible table row: a field across every compared service.
/// Cells line up index-for-index with the services given to [`build_rows`].
pub struct Row {
    pub key: &'static str,
    /// Ready-to-embed label markup (plain or stacked main/sub).
    pub label: String,
    pub cells: Vec<String>,
}

/// Assemble the rows for a set of services in one category.
///
/// Fields come from the category whitelist in schema order. A row where
/// every cell rendered empty is dropped; it survives as long as one
/// service has data, even when the others show blank cells.
pub fn build_rows(services: &[&Service], category: Option<&str>, ctx: &RenderCtx) -> Vec<Row> {
    let mut rows = Vec::new();
    for spec in schema::fields_for_category(category) {
        let cells: Vec<String> = services
            .iter()
            .map(|svc| render::cell(spec, svc, ctx))
            .collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        rows.push(Row { key: spec.key, label: label_markup(spec.label), cells });
    }
    rows
}

/// Plain labels stay text; stacked ones get a main line plus a sub line.
pub fn label_markup(label: Label) -> String {
    match label {
        Label::Plain(text) => esc(text),
        Label::WithSub(main, sub) => {
            format!(r#"{}<span class="label-sub">{}</span>"#, esc(main), esc(sub))
        }
    }
}
