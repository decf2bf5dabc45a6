//! End-to-end rendering through the bundled tera engine: on-disk view
//! trees, all three resolution strategies, and both failure paths.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use tempfile::TempDir;

use postview_core::{
    HostEnvironment, NoServices, NoTempData, RequestPath, RequestShell, RouteData, TempData,
    TempDataProvider, ViewData, ViewModel,
};
use postview_renderer::{RenderError, TemplateRenderer, TeraEngine};

#[derive(Serialize)]
struct EmailModel {
    name: String,
    #[serde(skip)]
    request_path: Option<RequestPath>,
    #[serde(skip)]
    data: ViewData,
}

impl EmailModel {
    fn new(name: &str) -> Self {
        EmailModel {
            name: name.to_string(),
            request_path: None,
            data: ViewData::new(),
        }
    }
}

impl ViewModel for EmailModel {
    fn request_path(&self) -> Option<&RequestPath> {
        self.request_path.as_ref()
    }

    fn view_data(&self) -> &ViewData {
        &self.data
    }
}

fn write_view(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

/// App root with a `views/` tree covering every scenario.
fn app_root() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_view(root, "views/welcome.tera", "Hello, {{ name }}");
    write_view(root, "views/email/welcome.tera", "Email for {{ name }}");
    write_view(
        root,
        "views/shared/goodbye.tera",
        "Goodbye, {{ name }}",
    );
    write_view(root, "views/broken.tera", "Hello, {{ name ");
    write_view(
        root,
        "views/detail.tera",
        "{{ request.scheme }}://{{ request.host }}{{ request.path_base }} \
         subject={{ view_data.subject }} flash={{ temp_data.flash }}",
    );
    dir
}

fn renderer_for(root: &Path) -> TemplateRenderer {
    TemplateRenderer::new(
        Arc::new(TeraEngine::new(root)),
        Arc::new(NoServices),
        Arc::new(NoTempData),
        Arc::new(HostEnvironment::new(root)),
    )
}

#[tokio::test]
async fn application_relative_name_renders_from_content_root() {
    let dir = app_root();
    let renderer = renderer_for(dir.path());
    let out = renderer
        .render(
            &RouteData::new(),
            "/views/email/welcome.tera",
            &EmailModel::new("Ada"),
            None,
            true,
        )
        .await
        .unwrap();
    assert_eq!(out, "Email for Ada");
}

#[tokio::test]
async fn tilde_name_renders_from_web_root_when_present() {
    let dir = app_root();
    let web = tempfile::tempdir().unwrap();
    write_view(web.path(), "views/welcome.tera", "Web-root {{ name }}");

    let renderer = TemplateRenderer::new(
        Arc::new(TeraEngine::new(dir.path())),
        Arc::new(NoServices),
        Arc::new(NoTempData),
        Arc::new(HostEnvironment::new(dir.path()).with_web_root(web.path())),
    );
    let out = renderer
        .render(
            &RouteData::new(),
            "~/views/welcome.tera",
            &EmailModel::new("Ada"),
            None,
            true,
        )
        .await
        .unwrap();
    assert_eq!(out, "Web-root Ada");
}

#[tokio::test]
async fn file_relative_name_renders_without_prefix() {
    let dir = app_root();
    let renderer = renderer_for(dir.path());
    let out = renderer
        .render(
            &RouteData::new(),
            "./views/welcome.tera",
            &EmailModel::new("Ada"),
            None,
            true,
        )
        .await
        .unwrap();
    assert_eq!(out, "Hello, Ada");
}

#[tokio::test]
async fn named_view_is_found_through_search_locations() {
    let dir = app_root();
    let renderer = renderer_for(dir.path());
    let out = renderer
        .render(&RouteData::new(), "welcome", &EmailModel::new("Ada"), None, true)
        .await
        .unwrap();
    assert_eq!(out, "Hello, Ada");
}

#[tokio::test]
async fn named_view_falls_back_to_shared_location() {
    let dir = app_root();
    let renderer = renderer_for(dir.path());
    let out = renderer
        .render(&RouteData::new(), "goodbye", &EmailModel::new("Ada"), None, true)
        .await
        .unwrap();
    assert_eq!(out, "Goodbye, Ada");
}

#[tokio::test]
async fn route_value_placeholders_steer_search_locations() {
    let dir = app_root();
    let engine = TeraEngine::new(dir.path())
        .with_locations(vec!["views/{controller}/{name}.tera".to_string()]);
    let renderer = TemplateRenderer::new(
        Arc::new(engine),
        Arc::new(NoServices),
        Arc::new(NoTempData),
        Arc::new(HostEnvironment::new(dir.path())),
    );
    let mut route_data = RouteData::new();
    route_data.insert("controller", "email");
    let out = renderer
        .render(&route_data, "welcome", &EmailModel::new("Ada"), None, true)
        .await
        .unwrap();
    assert_eq!(out, "Email for Ada");
}

#[tokio::test]
async fn request_path_view_data_and_temp_data_reach_the_template() {
    struct FlashProvider;

    impl TempDataProvider for FlashProvider {
        fn load(&self, _request: &RequestShell) -> TempData {
            let mut data = TempData::new();
            data.insert("flash".to_string(), json!("saved"));
            data
        }
    }

    let dir = app_root();
    let renderer = TemplateRenderer::new(
        Arc::new(TeraEngine::new(dir.path())),
        Arc::new(NoServices),
        Arc::new(FlashProvider),
        Arc::new(HostEnvironment::new(dir.path())),
    );

    let mut model = EmailModel::new("Ada");
    model.request_path = Some(RequestPath::new("https", "example.com").with_path_base("/app"));
    let mut additional = ViewData::new();
    additional.insert("subject".to_string(), json!("Welcome!"));

    let out = renderer
        .render(&RouteData::new(), "detail", &model, Some(additional), true)
        .await
        .unwrap();
    assert_eq!(out, "https://example.com/app subject=Welcome! flash=saved");
}

#[tokio::test]
async fn missing_named_view_reports_every_searched_location() {
    let dir = app_root();
    let renderer = renderer_for(dir.path());
    let err = renderer
        .render(&RouteData::new(), "nonexistent", &EmailModel::new("Ada"), None, true)
        .await
        .unwrap_err();
    let msg = err.to_string();
    let lines: Vec<&str> = msg.lines().collect();
    assert_eq!(lines.len(), 3, "preamble plus two searched locations: {msg}");
    assert!(lines[1].ends_with("views/nonexistent.tera"), "{msg}");
    assert!(lines[2].ends_with("views/shared/nonexistent.tera"), "{msg}");
}

#[tokio::test]
async fn missing_path_view_reports_the_single_candidate() {
    let dir = app_root();
    let renderer = renderer_for(dir.path());
    let err = renderer
        .render(
            &RouteData::new(),
            "/views/nonexistent.tera",
            &EmailModel::new("Ada"),
            None,
            true,
        )
        .await
        .unwrap_err();
    match err {
        RenderError::ViewNotFound { searched, .. } => {
            assert_eq!(searched.len(), 1);
            assert!(searched[0].ends_with("views/nonexistent.tera"));
        }
        other => panic!("expected ViewNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn template_syntax_fault_surfaces_as_engine_error_with_cause() {
    let dir = app_root();
    let renderer = renderer_for(dir.path());
    let err = renderer
        .render(&RouteData::new(), "broken", &EmailModel::new("Ada"), None, true)
        .await
        .unwrap_err();
    match err {
        RenderError::Engine { view_name, source } => {
            assert_eq!(view_name, "broken");
            assert!(!source.to_string().is_empty());
        }
        other => panic!("expected Engine, got {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_renders_share_one_renderer() {
    let dir = app_root();
    let renderer = renderer_for(dir.path());
    let route_a = RouteData::new();
    let model_a = EmailModel::new("Ada");
    let route_b = RouteData::new();
    let model_b = EmailModel::new("Grace");
    let (a, b) = tokio::join!(
        renderer.render(&route_a, "welcome", &model_a, None, true),
        renderer.render(&route_b, "goodbye", &model_b, None, true),
    );
    assert_eq!(a.unwrap(), "Hello, Ada");
    assert_eq!(b.unwrap(), "Goodbye, Grace");
}
