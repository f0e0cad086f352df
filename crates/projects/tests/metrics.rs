//! Counters emitted by the store, provisioner and README writer.
#![cfg(feature = "metrics")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use {
    chrono::NaiveDate,
    metrics_exporter_prometheus::PrometheusBuilder,
    projector_projects::{
        CatalogStore, FileCatalogStore, FolderProvisioner, readme::write_readme,
    },
};

/// Run `f` with a thread-local Prometheus recorder and return the rendered text.
fn recorded(f: impl FnOnce()) -> String {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    metrics::with_local_recorder(&recorder, f);
    handle.render()
}

#[test]
fn catalog_loads_and_failures_are_counted() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("projects.json");
    fs::write(&good, r#"{"projects": [{"title": "A"}, {"title": "B"}]}"#).unwrap();
    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ nope").unwrap();

    let text = recorded(|| {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        rt.block_on(async {
            FileCatalogStore::new(&good).load().await.unwrap();
            FileCatalogStore::new(&broken).load().await.unwrap_err();
        });
    });

    assert!(text.contains("projector_catalog_loads_total 2"), "{text}");
    assert!(text.contains("projector_catalog_load_errors_total 1"), "{text}");
    assert!(text.contains("projector_catalog_entries 2"), "{text}");
}

#[test]
fn suffix_collisions_are_counted() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("p20250621a")).unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();

    let text = recorded(|| {
        let folder = FolderProvisioner::new(root.path())
            .create_next_folder_on(date)
            .unwrap();
        assert_eq!(folder.id.to_string(), "p20250621b");
    });

    assert!(text.contains("projector_suffix_collisions_total 1"), "{text}");
    assert!(text.contains("projector_folders_created_total 1"), "{text}");
}

#[test]
fn readme_refusals_are_counted_by_reason() {
    let dir = tempfile::tempdir().unwrap();

    let text = recorded(|| {
        write_readme(dir.path(), "My Project", &["python"]).unwrap();
        write_readme(dir.path(), "My Project", &["python"]).unwrap_err();
    });

    assert!(text.contains("projector_readmes_written_total 1"), "{text}");
    assert!(
        text.contains("projector_readmes_refused_total{reason=\"description_already_exists\"} 1"),
        "{text}"
    );
}
