//! # postview-core
//!
//! Domain types and collaborator traits for rendering server-side view
//! templates to strings outside of a live HTTP request — typically to
//! produce email bodies from the same templates and view models used for
//! web pages.
//!
//! The render pipeline itself lives in `postview-renderer`; this crate
//! defines the seams it is built on:
//!
//! - [`ViewModel`] — the capability a concrete view model exposes
//!   (optional request metadata plus an embedded view-data map).
//! - [`ViewEngine`] / [`View`] — the opaque template engine that locates
//!   and executes views.
//! - [`HostingPaths`] — content root and optional web root.
//! - [`ServiceResolver`] — opaque service container handle bound to the
//!   synthesized request.
//! - [`TempDataProvider`] — builds the request-scoped temp-data store.

pub mod context;
pub mod engine;
pub mod hosting;
pub mod model;
pub mod services;
pub mod tempdata;
pub mod types;

pub use context::{ActionContext, ActionDescriptor, RenderContext, RequestShell};
pub use engine::{EngineError, View, ViewEngine, ViewResolution};
pub use hosting::{HostEnvironment, HostingPaths};
pub use model::ViewModel;
pub use services::{NoServices, ServiceResolver};
pub use tempdata::{NoTempData, TempData, TempDataProvider};
pub use types::{RequestPath, RouteData, ViewData};
