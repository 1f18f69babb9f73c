// src/file.rs

use std::{
    error::Error,
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::{PAGE_FILE, REDIRECTS_FILE, SITEMAP_FILE};
use crate::core::html::esc;
use crate::sitegen::{PageOut, Redirect};

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Directory a route maps to: route `/compare/a-vs-b/` under `out`
/// becomes `out/compare/a-vs-b`.
fn route_dir(out_dir: &Path, route: &str) -> PathBuf {
    let mut dir = out_dir.to_path_buf();
    for part in route.split('/').filter(|p| !p.is_empty()) {
        dir.push(part);
    }
    dir
}

/// Write one page as `<route>/index.html`. Returns the path written.
pub fn write_page(out_dir: &Path, page: &PageOut) -> Result<PathBuf, Box<dyn Error>> {
    let dir = route_dir(out_dir, &page.route);
    ensure_directory(&dir)?;
    let path = dir.join(PAGE_FILE);
    fs::write(&path, &page.html)?;
    Ok(path)
}

/// Write the redirect rule set, one `from to 301` line per rule.
/// Always rewritten whole; stale rules must not survive a rebuild.
pub fn write_redirects(out_dir: &Path, redirects: &[Redirect]) -> Result<PathBuf, Box<dyn Error>> {
    ensure_directory(out_dir)?;
    let path = out_dir.join(REDIRECTS_FILE);
    let mut out = BufWriter::new(fs::File::create(&path)?);
    for rule in redirects {
        writeln!(out, "{} {} 301", rule.from, rule.to)?;
    }
    out.flush()?;
    Ok(path)
}

/// Write `sitemap.xml` listing every canonical route.
pub fn write_sitemap(
    out_dir: &Path,
    base_url: &str,
    routes: &[&str],
) -> Result<PathBuf, Box<dyn Error>> {
    ensure_directory(out_dir)?;
    let path = out_dir.join(SITEMAP_FILE);
    let mut out = BufWriter::new(fs::File::create(&path)?);
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(out, r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#)?;
    for route in routes {
        writeln!(out, "  <url><loc>{}</loc></url>", esc(&join!(base_url, route)))?;
    }
    writeln!(out, "</urlset>")?;
    out.flush()?;
    Ok(path)
}
