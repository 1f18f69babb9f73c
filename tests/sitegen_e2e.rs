// tests/sitegen_e2e.rs
use std::fs;
use std::path::{Path, PathBuf};

use satsite::config::options::BuildOptions;
use satsite::runner;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("satsite_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const COUNTRIES: &str =
    r#"[{"code":"US","name":"United States"},{"code":"FR","name":"France"}]"#;

const THREE_BUY: &str = r#"[
  {"name":"Strike","category":"buy","countries":["US"],"custodial":true,
   "fees":{"tiers":[{"range":"0-100","fee":"1%"}]}},
  {"name":"River","category":"buy","fees":"Free ACH buys","kyc":true},
  {"name":"Swan","category":"buy","countries":["WW"]}
]"#;

fn opts_for(root: &Path) -> BuildOptions {
    let data = root.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("services.json"), THREE_BUY).unwrap();
    fs::write(data.join("countries.json"), COUNTRIES).unwrap();
    let mut opts = BuildOptions::default();
    opts.data_dir = data;
    opts.out_dir = root.join("public");
    opts
}

#[test]
fn three_services_yield_three_pair_pages_and_no_duplicates() {
    let root = tmp_dir("three");
    let opts = opts_for(&root);
    let summary = runner::run(&opts, None).unwrap();

    // 3 service pages + 3 compare pages, each its own file
    assert_eq!(summary.pages_written.len(), 6);
    let mut unique = summary.pages_written.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 6, "duplicate output paths");

    for slug in ["strike", "river", "swan"] {
        assert!(opts.out_dir.join(slug).join("index.html").is_file(), "{slug}");
    }
    for pair in ["river-vs-strike", "river-vs-swan", "strike-vs-swan"] {
        assert!(
            opts.out_dir.join("compare").join(pair).join("index.html").is_file(),
            "{pair}"
        );
    }
    // the reversed ordering must never exist as a page
    assert!(!opts.out_dir.join("compare").join("strike-vs-river").exists());
    assert!(!opts.out_dir.join("compare").join("swan-vs-river").exists());
}

#[test]
fn redirects_point_every_alternate_path_at_the_canonical_page() {
    let root = tmp_dir("redirects");
    let opts = opts_for(&root);
    runner::run(&opts, None).unwrap();

    let rules = fs::read_to_string(opts.out_dir.join("_redirects")).unwrap();
    // reversed order, namespaced and legacy
    assert!(rules.contains("/compare/strike-vs-river/ /compare/river-vs-strike/ 301"));
    assert!(rules.contains("/strike-vs-river/ /compare/river-vs-strike/ 301"));
    // legacy path for the canonical order
    assert!(rules.contains("/river-vs-strike/ /compare/river-vs-strike/ 301"));
    assert!(rules.contains("/swan-vs-strike/ /compare/strike-vs-swan/ 301"));
    // every line is `from to 301`
    for line in rules.lines().filter(|l| !l.is_empty()) {
        let parts: Vec<&str> = line.split(' ').collect();
        assert_eq!(parts.len(), 3, "bad rule: {line}");
        assert_eq!(parts[2], "301");
        assert!(parts[0].starts_with('/') && parts[0].ends_with('/'));
        assert!(parts[1].starts_with("/compare/"));
    }
}

#[test]
fn sitemap_lists_every_canonical_route_under_the_base_url() {
    let root = tmp_dir("sitemap");
    let mut opts = opts_for(&root);
    opts.set_base_url("https://compare.example/");
    runner::run(&opts, None).unwrap();

    let sitemap = fs::read_to_string(opts.out_dir.join("sitemap.xml")).unwrap();
    assert!(sitemap.contains("<loc>https://compare.example/strike/</loc>"));
    assert!(sitemap.contains("<loc>https://compare.example/compare/river-vs-swan/</loc>"));
    assert!(!sitemap.contains("strike-vs-river"), "non-canonical route in sitemap");
}

#[test]
fn rebuild_over_unchanged_data_is_byte_identical() {
    let root = tmp_dir("stable");
    let opts = opts_for(&root);
    runner::run(&opts, None).unwrap();

    let page = opts.out_dir.join("compare/river-vs-strike/index.html");
    let first_page = fs::read(&page).unwrap();
    let first_redirects = fs::read(opts.out_dir.join("_redirects")).unwrap();
    let first_sitemap = fs::read(opts.out_dir.join("sitemap.xml")).unwrap();

    runner::run(&opts, None).unwrap();
    assert_eq!(fs::read(&page).unwrap(), first_page);
    assert_eq!(fs::read(opts.out_dir.join("_redirects")).unwrap(), first_redirects);
    assert_eq!(fs::read(opts.out_dir.join("sitemap.xml")).unwrap(), first_sitemap);
}

#[test]
fn verdicts_and_faqs_land_on_their_pages() {
    let root = tmp_dir("copy");
    let opts = opts_for(&root);
    fs::write(
        opts.data_dir.join("verdicts.json"),
        r#"{"river-vs-strike": "Most people should pick {A}; {B} suits self-custody purists."}"#,
    )
    .unwrap();
    fs::write(
        opts.data_dir.join("faqs.json"),
        r#"{"river": [{"question": "Is River custodial?", "answer": "You can withdraw any time."}]}"#,
    )
    .unwrap();
    runner::run(&opts, None).unwrap();

    let compare = fs::read_to_string(opts.out_dir.join("compare/river-vs-strike/index.html")).unwrap();
    assert!(compare.contains("Most people should pick River; Strike suits self-custody purists."));

    let river = fs::read_to_string(opts.out_dir.join("river/index.html")).unwrap();
    assert!(river.contains("<summary>Is River custodial?</summary>"));
    assert!(river.contains(r#""@type":"FAQPage""#));
}

#[test]
fn broken_optional_copy_degrades_instead_of_failing() {
    let root = tmp_dir("degrade");
    let opts = opts_for(&root);
    fs::write(opts.data_dir.join("verdicts.json"), "{not json").unwrap();
    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.pages_written.len(), 6);
    let compare = fs::read_to_string(opts.out_dir.join("compare/river-vs-strike/index.html")).unwrap();
    assert!(!compare.contains("Verdict"));
}

#[test]
fn missing_or_broken_catalog_fails_the_whole_build() {
    let root = tmp_dir("fatal");
    let mut opts = BuildOptions::default();
    opts.data_dir = root.join("data");
    opts.out_dir = root.join("public");
    assert!(runner::run(&opts, None).is_err(), "missing catalog must fail");
    assert!(!opts.out_dir.exists(), "no partial output on a failed build");

    fs::create_dir_all(&opts.data_dir).unwrap();
    fs::write(opts.data_dir.join("services.json"), "[{\"name\": 3}]").unwrap();
    fs::write(opts.data_dir.join("countries.json"), COUNTRIES).unwrap();
    assert!(runner::run(&opts, None).is_err(), "unparsable catalog must fail");
}

#[test]
fn category_flag_builds_only_that_category() {
    let root = tmp_dir("category");
    let data = root.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("services.json"),
        r#"[{"name":"Strike","category":"buy"},
            {"name":"River","category":"buy"},
            {"name":"BTCPay Server","category":"accept"}]"#,
    )
    .unwrap();
    fs::write(data.join("countries.json"), COUNTRIES).unwrap();

    let mut opts = BuildOptions::default();
    opts.data_dir = data;
    opts.out_dir = root.join("public");
    opts.category = Some("accept".to_string());

    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.pages_written.len(), 1);
    assert!(opts.out_dir.join("btcpay-server/index.html").is_file());
    assert!(!opts.out_dir.join("strike").exists());
    let sitemap = fs::read_to_string(opts.out_dir.join("sitemap.xml")).unwrap();
    assert!(!sitemap.contains("/strike/"));
}
