//! Tera-backed [`ViewEngine`] — disk-probing resolution plus template
//! execution.
//!
//! Resolution only probes the filesystem; reading and compiling the template
//! happen when the resolved view is invoked, so compile faults surface as
//! engine failures rather than resolution failures.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tera::Tera;

use postview_core::{
    ActionContext, ActionDescriptor, EngineError, RenderContext, View, ViewEngine, ViewResolution,
};

/// Search-location patterns probed for named views, in order.
///
/// `{name}` expands to the requested view name; any other `{key}` expands to
/// the action descriptor's route value of that name (empty when absent), so
/// patterns like `views/{controller}/{name}.tera` work the way configured
/// view locations do under a live request.
pub const DEFAULT_LOCATIONS: &[&str] = &["views/{name}.tera", "views/shared/{name}.tera"];

/// Tera-backed view engine rooted at an application directory.
#[derive(Debug, Clone)]
pub struct TeraEngine {
    root: PathBuf,
    locations: Vec<String>,
    partial_locations: Vec<String>,
}

impl TeraEngine {
    /// Engine rooted at `root` with [`DEFAULT_LOCATIONS`] for both main
    /// pages and partials.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let locations: Vec<String> = DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect();
        TeraEngine {
            root: root.into(),
            partial_locations: locations.clone(),
            locations,
        }
    }

    /// Replace the search locations used for main pages.
    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    /// Replace the search locations used for partials.
    pub fn with_partial_locations(mut self, locations: Vec<String>) -> Self {
        self.partial_locations = locations;
        self
    }

    fn view_at(name: &str, path: PathBuf) -> ViewResolution {
        ViewResolution::found(Arc::new(TeraView {
            name: name.to_string(),
            display: path.display().to_string(),
            path,
        }))
    }
}

impl ViewEngine for TeraEngine {
    fn find_view(&self, action: &ActionContext, name: &str, is_main_page: bool) -> ViewResolution {
        let patterns = if is_main_page {
            &self.locations
        } else {
            &self.partial_locations
        };
        let mut searched = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let relative = expand_pattern(pattern, name, &action.descriptor);
            let candidate = self.root.join(&relative);
            if candidate.is_file() {
                return Self::view_at(name, candidate);
            }
            searched.push(candidate.display().to_string());
        }
        ViewResolution::not_found(searched)
    }

    fn get_view(&self, base_path: &Path, name: &str, _is_main_page: bool) -> ViewResolution {
        let relative = name
            .trim_start_matches('~')
            .trim_start_matches('/')
            .trim_start_matches("./");
        let candidate = base_path.join(relative);
        if candidate.is_file() {
            Self::view_at(name, candidate)
        } else {
            ViewResolution::not_found(vec![candidate.display().to_string()])
        }
    }
}

/// Expand `{name}` and route-value placeholders in a location pattern.
fn expand_pattern(pattern: &str, name: &str, descriptor: &ActionDescriptor) -> String {
    let mut out = String::with_capacity(pattern.len() + name.len());
    let mut rest = pattern;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        match rest[open..].find('}') {
            Some(close) => {
                let key = &rest[open + 1..open + close];
                if key == "name" {
                    out.push_str(name);
                } else if let Some(value) = descriptor.route_values.get(key) {
                    out.push_str(value);
                }
                rest = &rest[open + close + 1..];
            }
            None => {
                // Unbalanced brace; keep the remainder verbatim.
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// A view handle pointing at a template file on disk.
struct TeraView {
    name: String,
    path: PathBuf,
    display: String,
}

#[async_trait]
impl View for TeraView {
    fn path(&self) -> &str {
        &self.display
    }

    async fn render(&self, ctx: &mut RenderContext) -> Result<(), EngineError> {
        let source = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| -> EngineError {
                format!("failed to read template {}: {e}", self.display).into()
            })?;

        let mut tera = Tera::default();
        tera.add_raw_template(&self.name, &source)?;

        let mut tera_ctx = if ctx.model.is_object() {
            tera::Context::from_serialize(&ctx.model)?
        } else {
            tera::Context::new()
        };
        tera_ctx.insert("model", &ctx.model);
        tera_ctx.insert("view_data", &ctx.view_data);
        tera_ctx.insert("temp_data", &ctx.temp_data);
        tera_ctx.insert(
            "request",
            &serde_json::json!({
                "host": ctx.action.request.host,
                "scheme": ctx.action.request.scheme,
                "path_base": ctx.action.request.path_base,
            }),
        );
        tera_ctx.insert("route", &ctx.action.descriptor.route_values);

        let rendered = tera.render(&self.name, &tera_ctx)?;
        ctx.sink_mut().push_str(&rendered);
        Ok(())
    }
}
