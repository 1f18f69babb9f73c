// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::catalog;
use crate::config::options::BuildOptions;
use crate::core::slug::slugify;
use crate::file;
use crate::progress::Progress;
use crate::sitegen;

/// Summary of what one build produced.
pub struct BuildSummary {
    pub pages_written: Vec<PathBuf>,
    pub redirect_rules: usize,
}

/// Top-level build: load the data, plan the site, write it out.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
///
/// Catalog and country table are load-or-die; a build over bad inputs
/// must fail whole rather than publish a partial site.
pub fn run(
    opts: &BuildOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<BuildSummary, Box<dyn Error>> {
    logf!("build: data={} out={}", opts.data_dir.display(), opts.out_dir.display());

    let services = catalog::load_services(&opts.services_path())?;
    let countries = catalog::load_countries(&opts.countries_path())?;
    let verdicts = catalog::load_verdicts(&opts.verdicts_path());
    let faqs = catalog::load_faqs(&opts.faqs_path());

    if let Some(category) = &opts.category {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Building category: {category}"));
        }
    }

    let plan = sitegen::generate(&services, &countries, &verdicts, &faqs, opts);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(plan.pages.len());
    }
    if plan.pages.is_empty() {
        logf!("build: nothing to write");
    }

    file::ensure_directory(&opts.out_dir)?;
    let mut written = Vec::with_capacity(plan.pages.len());
    for page in &plan.pages {
        let path = file::write_page(&opts.out_dir, page)?;
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(&path);
        }
        written.push(path);
    }

    file::write_redirects(&opts.out_dir, &plan.redirects)?;
    let routes: Vec<&str> = plan.pages.iter().map(|p| p.route.as_str()).collect();
    file::write_sitemap(&opts.out_dir, opts.base_url(), &routes)?;

    logf!("build: {} pages, {} redirect rules", written.len(), plan.redirects.len());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(BuildSummary { pages_written: written, redirect_rules: plan.redirects.len() })
}

/* ---------------- Service-list helper (CLI can call) ---------------- */

/// (slug, name, category) for every service in the catalog, sorted by
/// slug. Honors the same category filter as a build.
pub fn list_services(opts: &BuildOptions) -> Result<Vec<(String, String, String)>, Box<dyn Error>> {
    let services = catalog::load_services(&opts.services_path())?;
    let mut out: Vec<(String, String, String)> = services
        .iter()
        .filter(|svc| match &opts.category {
            Some(want) => svc.category.as_deref() == Some(want.as_str()),
            None => true,
        })
        .map(|svc| {
            (
                slugify(&svc.name),
                svc.name.clone(),
                svc.category.clone().unwrap_or_default(),
            )
        })
        .collect();
    out.sort();
    Ok(out)
}
