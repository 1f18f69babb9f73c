// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

/// Everything one build run needs to know. Built from defaults, then
/// adjusted by CLI flags; the library never reads the environment itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
    base_url: String, // normalized, no trailing slash
    pub category: Option<String>,
    pub list_services: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            base_url: s!(DEFAULT_BASE_URL),
            category: None,
            list_services: false,
        }
    }
}

impl BuildOptions {
    pub fn services_path(&self) -> PathBuf {
        self.data_dir.join(SERVICES_FILE)
    }

    pub fn countries_path(&self) -> PathBuf {
        self.data_dir.join(COUNTRIES_FILE)
    }

    pub fn verdicts_path(&self) -> PathBuf {
        self.data_dir.join(VERDICTS_FILE)
    }

    pub fn faqs_path(&self) -> PathBuf {
        self.data_dir.join(FAQS_FILE)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Trailing slashes are stripped so URL composition stays single-slash.
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim().trim_end_matches('/').to_string();
    }
}
