//! Landing page served at `/`.
//!
//! Whether the page is HTML or JSON is decided once, when the router is
//! built. Later changes to the template directory have no effect.
//!
//! `index.html` is not run through a template engine. Only the title
//! placeholder is substituted; any other `{{ ... }}` construct (conditionals,
//! comments, other fields) is served as written and logged as a warning.

use std::path::Path;
use std::sync::Arc;

use axum::{
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::VERSION;

pub const PAGE_TITLE: &str = "SeedFlow Knowledge Management";
pub const INDEX_TEMPLATE: &str = "index.html";

const TITLE_PLACEHOLDERS: [&str; 3] = ["{{ .title }}", "{{.title}}", "{{ title }}"];

#[derive(Debug, Serialize)]
pub struct LandingInfo {
    pub api: &'static str,
    pub name: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

impl Default for LandingInfo {
    fn default() -> Self {
        Self {
            api: "/api/health",
            name: PAGE_TITLE,
            status: "running",
            version: VERSION,
        }
    }
}

#[derive(Debug, Clone)]
pub enum LandingPage {
    /// Pre-rendered HTML from the template directory.
    Html(Arc<str>),
    /// No template directory at startup.
    Json,
}

impl LandingPage {
    /// Inspect `template_dir` and render `index.html` if it is there.
    pub fn detect(template_dir: &Path) -> Self {
        if !template_dir.is_dir() {
            tracing::info!(dir = %template_dir.display(), "No template directory, serving JSON landing page");
            return LandingPage::Json;
        }

        let index = template_dir.join(INDEX_TEMPLATE);
        match std::fs::read_to_string(&index) {
            Ok(template) => {
                let page = render(&template, PAGE_TITLE);
                if has_unrendered_directives(&page) {
                    tracing::warn!(
                        template = %index.display(),
                        "Landing page keeps template directives other than the title, serving them verbatim"
                    );
                }
                tracing::info!(template = %index.display(), "Serving HTML landing page");
                LandingPage::Html(page.into())
            }
            Err(e) => {
                tracing::warn!(
                    template = %index.display(),
                    error = %e,
                    "Template directory present but index unreadable, serving JSON landing page"
                );
                LandingPage::Json
            }
        }
    }

    pub fn is_html(&self) -> bool {
        matches!(self, LandingPage::Html(_))
    }
}

impl IntoResponse for LandingPage {
    fn into_response(self) -> Response {
        match self {
            LandingPage::Html(page) => Html(page.to_string()).into_response(),
            LandingPage::Json => Json(LandingInfo::default()).into_response(),
        }
    }
}

fn render(template: &str, title: &str) -> String {
    TITLE_PLACEHOLDERS
        .iter()
        .fold(template.to_string(), |page, placeholder| page.replace(placeholder, title))
}

fn has_unrendered_directives(page: &str) -> bool {
    page.contains("{{")
}
