//! End-to-end tests driving the projector tools through the registry.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;

use {
    projector_config::{ProjectorConfig, ProjectsSettings},
    projector_projects::FilterStrategy,
    projector_tools::{ProjectorContext, ToolRegistry},
    serde_json::{Value, json},
    tempfile::TempDir,
};

// ── Fixtures ─────────────────────────────────────────────────────────────────

const CATALOG: &str = r#"{
  "projects": [
    {"id": "p20240101a", "title": "Web Scraper", "keywords": ["python", "web", "scraping"]},
    {"id": "p20240215a", "title": "Garden Planner", "keywords": ["garden", "planning"]},
    {"id": "p20240301b", "title": "Python API", "keywords": ["python", "api", "web"]}
  ]
}"#;

struct Fixture {
    _dir: TempDir,
    root: std::path::PathBuf,
    registry: ToolRegistry,
}

fn fixture(strategy: FilterStrategy) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("projects");
    std::fs::create_dir(&root).unwrap();
    let catalog = dir.path().join("projects.json");
    std::fs::write(&catalog, CATALOG).unwrap();

    let settings = ProjectsSettings {
        root: root.clone(),
        catalog,
        strategy,
    };
    let registry = ProjectorContext::new(&settings, "Projector").registry();
    Fixture {
        _dir: dir,
        root,
        registry,
    }
}

fn ids(out: &Value) -> Vec<&str> {
    out["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect()
}

fn entries(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(root)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn lists_every_tool() {
    let fx = fixture(FilterStrategy::All);
    assert_eq!(fx.registry.tool_names(), [
        "create_new_project_folder",
        "create_readme_in_folder",
        "find_projects",
        "projector_status",
    ]);
    for schema in fx.registry.list_schemas() {
        assert_eq!(schema["parameters"]["type"], "object");
        assert!(!schema["description"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn find_honours_configured_strategy() {
    let all = fixture(FilterStrategy::All);
    let out = all
        .registry
        .call("find_projects", json!({"keywords": ["python", "web"]}))
        .await
        .unwrap();
    assert_eq!(ids(&out), ["p20240101a", "p20240301b"]);

    let out = all
        .registry
        .call("find_projects", json!({"keywords": ["python", "garden"]}))
        .await
        .unwrap();
    assert!(ids(&out).is_empty());

    let any = fixture(FilterStrategy::Any);
    let out = any
        .registry
        .call("find_projects", json!({"keywords": ["python", "garden"]}))
        .await
        .unwrap();
    assert_eq!(ids(&out), ["p20240101a", "p20240215a", "p20240301b"]);
    assert_eq!(
        out["message"],
        "Found 3 projects matching any keywords: python, garden (using OR strategy)"
    );
}

#[tokio::test]
async fn provision_then_describe() {
    let fx = fixture(FilterStrategy::All);

    let first = fx
        .registry
        .call("create_new_project_folder", json!({}))
        .await
        .unwrap();
    let second = fx
        .registry
        .call("create_new_project_folder", json!({}))
        .await
        .unwrap();
    let first_id = first["folder_id"].as_str().unwrap();
    let second_id = second["folder_id"].as_str().unwrap();
    assert_ne!(first_id, second_id);
    assert_eq!(entries(&fx.root), [first_id, second_id]);

    let folder = first["folder_path"].as_str().unwrap();
    let params = json!({
        "folder_path": folder,
        "title": "Dinner Booking",
        "keywords": ["Rust", "#web", "open source"],
    });
    let created = fx
        .registry
        .call("create_readme_in_folder", params.clone())
        .await
        .unwrap();
    assert_eq!(created["status"], "created");
    let readme = Path::new(folder).join("README.md");
    assert_eq!(
        std::fs::read_to_string(&readme).unwrap(),
        "# Dinner Booking\n\n> **Keywords**: #rust #web #open-source\n\n"
    );

    let refused = fx
        .registry
        .call("create_readme_in_folder", params)
        .await
        .unwrap();
    assert_eq!(refused["status"], "exists");
    assert_eq!(entries(Path::new(folder)), ["README.md"]);
}

#[tokio::test]
async fn status_reports_running() {
    let fx = fixture(FilterStrategy::All);
    let out = fx
        .registry
        .call("projector_status", json!({}))
        .await
        .unwrap();
    assert_eq!(out["status"], "running");
    assert_eq!(out["message"], "Projector is operational");
    assert!(out["version"].is_string());
}

#[tokio::test]
async fn unknown_tool_is_rejected() {
    let fx = fixture(FilterStrategy::All);
    let err = fx.registry.call("delete_everything", json!({})).await;
    assert!(err.is_err());
}

#[test]
fn context_requires_paths() {
    let err = ProjectorContext::from_config(&ProjectorConfig::default())
        .err()
        .unwrap();
    assert!(err.to_string().contains("PROJECT_FOLDERS_ROOT"));
}
