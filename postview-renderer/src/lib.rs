//! # postview-renderer
//!
//! Renders server-side view templates to strings without a live HTTP
//! request, so web templates and view models can produce email bodies.
//!
//! [`TemplateRenderer`] synthesizes a request/action context per call,
//! resolves the view (by application-relative path, direct file path, or
//! search-location probing), merges view data, and invokes the engine
//! against an in-memory sink. [`TeraEngine`] is the bundled tera-backed
//! engine; any [`postview_core::ViewEngine`] works in its place.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use postview_core::{
//!     HostEnvironment, NoServices, NoTempData, RequestPath, RouteData, ViewData, ViewModel,
//! };
//! use postview_renderer::{TemplateRenderer, TeraEngine};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Welcome {
//!     name: String,
//!     #[serde(skip)]
//!     view_data: ViewData,
//! }
//!
//! impl ViewModel for Welcome {
//!     fn request_path(&self) -> Option<&RequestPath> {
//!         None
//!     }
//!     fn view_data(&self) -> &ViewData {
//!         &self.view_data
//!     }
//! }
//!
//! async fn welcome_body(renderer: &TemplateRenderer) -> String {
//!     let model = Welcome { name: "Ada".into(), view_data: ViewData::new() };
//!     renderer
//!         .render(&RouteData::new(), "welcome", &model, None, true)
//!         .await
//!         .expect("welcome template renders")
//! }
//!
//! fn build_renderer() -> TemplateRenderer {
//!     TemplateRenderer::new(
//!         Arc::new(TeraEngine::new("/srv/app")),
//!         Arc::new(NoServices),
//!         Arc::new(NoTempData),
//!         Arc::new(HostEnvironment::new("/srv/app")),
//!     )
//! }
//! ```

pub mod engine;
pub mod error;
pub mod renderer;

pub use engine::{TeraEngine, DEFAULT_LOCATIONS};
pub use error::RenderError;
pub use renderer::{TemplateRenderer, VIEW_EXTENSION};
