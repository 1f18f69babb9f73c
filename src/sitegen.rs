// src/sitegen.rs
//! Build planning: which pages exist, at which routes, with which
//! redirects. Pure over the loaded catalog; writing to disk lives in
//! `file`. Re-running over unchanged data yields a byte-identical plan.

use std::collections::BTreeMap;

use crate::catalog::{Countries, Faqs, Service, Verdicts};
use crate::config::consts::COMPARE_PREFIX;
use crate::config::options::BuildOptions;
use crate::core::slug::{pair_slug, reversed_pair_slug, slugify};
use crate::pages::{compare, service};

pub struct PageOut {
    /// Site-absolute route with leading and trailing slash,
    /// e.g. `/compare/river-vs-strike/`.
    pub route: String,
    pub html: String,
}

/// One redirect rule; both sides are site-absolute routes.
pub struct Redirect {
    pub from: String,
    pub to: String,
}

pub struct SitePlan {
    pub pages: Vec<PageOut>,
    pub redirects: Vec<Redirect>,
}

/// Plan the whole site: one page per service, one page per unordered
/// same-category pair, plus the redirect set that keeps every alternate
/// spelling of a compare URL pointed at its canonical page.
pub fn generate(
    services: &[Service],
    countries: &Countries,
    verdicts: &Verdicts,
    faqs: &Faqs,
    opts: &BuildOptions,
) -> SitePlan {
    // Name order drives everything downstream, so rebuilds are stable
    // regardless of catalog file order.
    let mut picked: Vec<&Service> = services
        .iter()
        .filter(|svc| match &opts.category {
            Some(want) => svc.category.as_deref() == Some(want.as_str()),
            None => true,
        })
        .collect();
    picked.sort_by(|x, y| x.name.cmp(&y.name));

    let mut by_category: BTreeMap<&str, Vec<&Service>> = BTreeMap::new();
    for &svc in &picked {
        if let Some(cat) = svc.category.as_deref() {
            by_category.entry(cat).or_default().push(svc);
        }
    }

    let mut pages = Vec::new();
    let mut redirects = Vec::new();

    for &svc in &picked {
        let siblings: Vec<&Service> = svc
            .category
            .as_deref()
            .and_then(|cat| by_category.get(cat))
            .map(|group| group.iter().copied().filter(|o| o.name != svc.name).collect())
            .unwrap_or_default();
        pages.push(PageOut {
            route: format!("/{}/", slugify(&svc.name)),
            html: service::build(svc, &siblings, countries, faqs, opts),
        });
    }

    for group in by_category.values() {
        for (i, &left) in group.iter().enumerate() {
            for &right in &group[i + 1..] {
                let canonical = pair_slug(&left.name, &right.name);
                let route = format!("/{COMPARE_PREFIX}/{canonical}/");
                pages.push(PageOut {
                    route: route.clone(),
                    html: compare::build(left, right, countries, verdicts, faqs, opts),
                });

                let reversed = reversed_pair_slug(&left.name, &right.name);
                if reversed != canonical {
                    redirects.push(Redirect {
                        from: format!("/{COMPARE_PREFIX}/{reversed}/"),
                        to: route.clone(),
                    });
                    redirects.push(Redirect {
                        from: format!("/{reversed}/"),
                        to: route.clone(),
                    });
                }
                // The site served compare pages at the root before the
                // /compare/ namespace; those paths stay reachable.
                redirects.push(Redirect { from: format!("/{canonical}/"), to: route });
            }
        }
    }

    SitePlan { pages, redirects }
}
