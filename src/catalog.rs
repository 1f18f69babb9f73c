// src/catalog.rs
//! Input data: the service catalog plus the side tables that enrich it.
//!
//! Everything is plain JSON living under the data directory. The catalog
//! and the country table are required; a build without them is refused.
//! Verdicts and FAQs are optional copy: when the file is missing or broken
//! the affected blocks are dropped and the build carries on.
//!
//! Loaded once per build, read-only afterwards. Service `name` is the join
//! key everywhere; the catalog guarantees it unique (case-insensitively).
//! That uniqueness is a data precondition, not something checked here.

use std::{collections::HashMap, error::Error, fs, path::Path};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// One service record. Only the fields the site chrome needs are typed;
/// every other attribute stays raw JSON so renderers can take any shape
/// the data editors throw at them.
#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl Service {
    /// Attribute lookup. JSON `null` counts as absent.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key).filter(|v| !v.is_null())
    }
}

/// Two-letter country code → display name.
#[derive(Debug, Clone, Default)]
pub struct Countries {
    by_code: HashMap<String, String>,
}

#[derive(Deserialize)]
struct CountryEntry {
    code: String,
    name: String,
}

impl Countries {
    pub fn name(&self, code: &str) -> Option<&str> {
        self.by_code.get(&code.to_ascii_uppercase()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Build directly from pairs. Tests and benches use this to avoid
    /// touching the filesystem.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let by_code = pairs
            .into_iter()
            .map(|(code, name)| (code.into().to_ascii_uppercase(), name.into()))
            .collect();
        Self { by_code }
    }
}

/// Pre-written comparison commentary, keyed by canonical pair slug.
/// Values may carry `{LEFT}/{RIGHT}/{A}/{B}` tokens.
pub type Verdicts = HashMap<String, String>;

#[derive(Debug, Clone, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// FAQ entries keyed by page slug (service slug or canonical pair slug).
pub type Faqs = HashMap<String, Vec<Faq>>;

/* ---------------- Loading ---------------- */

pub fn load_services(path: &Path) -> Result<Vec<Service>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("read {}: {e}", path.display()))?;
    let services: Vec<Service> = serde_json::from_str(&text)
        .map_err(|e| format!("parse {}: {e}", path.display()))?;
    logf!("catalog: {} services from {}", services.len(), path.display());
    Ok(services)
}

pub fn load_countries(path: &Path) -> Result<Countries, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("read {}: {e}", path.display()))?;
    let entries: Vec<CountryEntry> = serde_json::from_str(&text)
        .map_err(|e| format!("parse {}: {e}", path.display()))?;
    logf!("countries: {} entries from {}", entries.len(), path.display());
    Ok(Countries::from_pairs(entries.into_iter().map(|e| (e.code, e.name))))
}

/// Optional copy blocks degrade to empty rather than failing the build.
pub fn load_verdicts(path: &Path) -> Verdicts {
    load_optional(path, "verdicts")
}

pub fn load_faqs(path: &Path) -> Faqs {
    load_optional(path, "faqs")
}

fn load_optional<T: DeserializeOwned + Default>(path: &Path, what: &str) -> T {
    if !path.exists() {
        logd!("{what}: {} not present, blocks omitted", path.display());
        return T::default();
    }
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            loge!("{what}: read {} failed ({e}), blocks omitted", path.display());
            return T::default();
        }
    };
    match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            loge!("{what}: parse {} failed ({e}), blocks omitted", path.display());
            T::default()
        }
    }
}
