// src/pages/document.rs
//! Minimal HTML document shell shared by every generated page.

use serde_json::Value;

use crate::core::html::esc;

pub struct Document {
    title: String,
    description: String,
    canonical: String,
    ld_json: Vec<String>,
    body: Vec<String>,
}

impl Document {
    pub fn new(title: &str, description: &str, canonical: &str) -> Self {
        Self {
            title: s!(title),
            description: s!(description),
            canonical: s!(canonical),
            ld_json: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Append a body block; empty blocks (optional sections that rendered
    /// nothing) are dropped.
    pub fn push(&mut self, html: &str) {
        if !html.is_empty() {
            self.body.push(s!(html));
        }
    }

    /// Attach a JSON-LD block. `</` is escaped inside the serialized JSON
    /// so data text can never close the script element early.
    pub fn push_ld(&mut self, value: &Value) {
        self.ld_json.push(value.to_string().replace("</", r"<\/"));
    }

    pub fn finish(&self) -> String {
        let mut out = s!("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str(&format!("<title>{}</title>\n", esc(&self.title)));
        out.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            esc(&self.description)
        ));
        out.push_str(&format!("<link rel=\"canonical\" href=\"{}\">\n", esc(&self.canonical)));
        for ld in &self.ld_json {
            out.push_str("<script type=\"application/ld+json\">");
            out.push_str(ld);
            out.push_str("</script>\n");
        }
        out.push_str("</head>\n<body>\n");
        for block in &self.body {
            out.push_str(block);
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}
