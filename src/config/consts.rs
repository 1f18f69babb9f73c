// src/config/consts.rs

// Site
pub const DEFAULT_BASE_URL: &str = "https://satsite.io";
pub const COMPARE_PREFIX: &str = "compare";

// Input data (all JSON, under the data directory)
pub const DEFAULT_DATA_DIR: &str = "data";
pub const SERVICES_FILE: &str = "services.json";
pub const COUNTRIES_FILE: &str = "countries.json";
pub const VERDICTS_FILE: &str = "verdicts.json";
pub const FAQS_FILE: &str = "faqs.json";

// Output
pub const DEFAULT_OUT_DIR: &str = "public";
pub const PAGE_FILE: &str = "index.html";
pub const REDIRECTS_FILE: &str = "_redirects";
pub const SITEMAP_FILE: &str = "sitemap.xml";

// Rendering
pub const DESCRIPTION_PREVIEW_CHARS: usize = 200;
