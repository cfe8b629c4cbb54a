//! Integration tests for the edge and node pipelines
//!
//! Tests use temporary directories with real file fixtures to verify:
//! - Culture discovery over a mixed directory listing
//! - Per-constellation error isolation
//! - The exact `edges.json` layout and its determinism
//! - Catalog conversion with name lookup

use skygraph_core::catalog::{build_nodes, read_catalog_file};
use skygraph_core::lookup::StaticNames;
use skygraph_core::{Config, DirectorySource, build_edges, write_artifact};
use std::collections::HashMap;
use tempfile::TempDir;

/// Helper to lay out culture directories under a temporary root.
///
/// `None` creates the directory without an index document.
fn setup_sky(cultures: &[(&str, Option<&str>)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, index) in cultures {
        std::fs::create_dir_all(dir.path().join(name)).unwrap();
        if let Some(index) = index {
            std::fs::write(dir.path().join(name).join("index.json"), index).unwrap();
        }
    }
    dir
}

// =============================================================================
// Edge Pipeline Tests
// =============================================================================

#[test]
fn test_single_culture_matches_expected_artifact() {
    let dir = setup_sky(&[(
        "western",
        Some(r#"{"constellations": [{"id": "ORI", "common_name": {"english": "Orion"}, "lines": [[1, 2, 3]]}]}"#),
    )]);

    let source = DirectorySource::new(dir.path(), "index.json");
    let report = build_edges(&source).unwrap();
    let actual = serde_json::to_value(&report.artifact).unwrap();

    assert_eq!(
        actual,
        serde_json::json!({
            "western": [{
                "id": "ORI",
                "label": "Orion",
                "edges": [
                    {"from": "1", "to": "2", "weight": ""},
                    {"from": "2", "to": "3", "weight": ""}
                ]
            }]
        })
    );
}

#[test]
fn test_non_culture_entries_never_appear() {
    let dir = setup_sky(&[
        ("western", Some(r#"{"constellations": []}"#)),
        ("scratch", None),
    ]);
    std::fs::write(dir.path().join("edges.json"), "{}").unwrap();
    std::fs::write(dir.path().join("nodes.py"), "print()").unwrap();

    let source = DirectorySource::new(dir.path(), "index.json");
    let report = build_edges(&source).unwrap();

    assert_eq!(report.artifact.len(), 1);
    assert!(report.artifact.contains_key("western"));
    assert_eq!(report.missing, vec!["edges.json", "nodes.py", "scratch"]);
}

#[test]
fn test_broken_constellation_leaves_siblings_intact() {
    let dir = setup_sky(&[(
        "maori",
        Some(
            r#"{"constellations": [
                {"id": "A", "common_name": {"english": "Alpha"}, "lines": [["dashed", 10, 11, 12]]},
                {"id": "B", "common_name": {}, "lines": [[1, 2]]},
                {"id": "C", "common_name": {"english": "Gamma"}, "lines": [[20, 21], [21, 22]]},
                {"id": "D", "common_name": {"english": "Delta"}, "lines": [[1, null]]}
            ]}"#,
        ),
    )]);

    let source = DirectorySource::new(dir.path(), "index.json");
    let report = build_edges(&source).unwrap();
    let maori = &report.artifact["maori"];

    let ids: Vec<_> = maori.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "C"]);
    assert!(maori[0].edges.iter().all(|e| e.weight == "dashed"));
    assert_eq!(maori[0].edges.len(), 2);
    assert_eq!(maori[1].edges.len(), 2);

    let skipped = &report.skipped["maori"];
    let skipped_ids: Vec<_> = skipped.iter().filter_map(|s| s.id.as_deref()).collect();
    assert_eq!(skipped_ids, vec!["B", "D"]);
}

#[test]
fn test_unreadable_index_skips_only_that_culture() {
    let dir = setup_sky(&[(
        "western",
        Some(r#"{"constellations": [{"id": "ORI", "common_name": {"english": "Orion"}, "lines": [[1, 2]]}]}"#),
    )]);
    std::fs::create_dir_all(dir.path().join("latin1")).unwrap();
    std::fs::write(
        dir.path().join("latin1/index.json"),
        b"{\"constellations\": [{\"id\": \"Caf\xe9\"}]}",
    )
    .unwrap();
    std::fs::create_dir_all(dir.path().join("odd/index.json")).unwrap();

    let source = DirectorySource::new(dir.path(), "index.json");
    let report = build_edges(&source).unwrap();

    assert_eq!(report.artifact.keys().collect::<Vec<_>>(), vec!["western"]);
    assert_eq!(report.artifact["western"][0].edges.len(), 1);
    assert_eq!(report.invalid, vec!["latin1", "odd"]);
}

#[test]
fn test_rebuild_is_byte_identical() {
    let dir = setup_sky(&[
        ("western", Some(r#"{"constellations": [{"id": "ORI", "common_name": {"english": "Orion"}, "lines": [["thin", 1, 2]]}]}"#)),
        ("chinese", Some(r#"{"constellations": [{"id": "001", "common_name": {"english": "Horn"}, "lines": [[5, 6, 7]]}]}"#)),
        ("arabic", Some(r#"{"constellations": []}"#)),
    ]);
    let source = DirectorySource::new(dir.path(), "index.json");
    let out = TempDir::new().unwrap();

    let first = write_artifact(
        out.path().join("first.json"),
        &build_edges(&source).unwrap().artifact,
    )
    .unwrap();
    let second = write_artifact(
        out.path().join("second.json"),
        &build_edges(&source).unwrap().artifact,
    )
    .unwrap();

    assert_eq!(first.hash, second.hash);
    assert_eq!(
        std::fs::read(&first.path).unwrap(),
        std::fs::read(&second.path).unwrap()
    );
}

#[test]
fn test_configured_root_and_index_file() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("cultures/norse")).unwrap();
    std::fs::write(
        dir.path().join("cultures/norse/figures.json"),
        r#"{"constellations": [{"id": "N1", "common_name": {"english": "Wagon"}, "lines": [[1, 2]]}]}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("skygraph.yaml"),
        "name: norse\nedges:\n  root: cultures\n  index_file: figures.json\n  output: out/edges.json\n",
    )
    .unwrap();

    let config = Config::load(dir.path()).unwrap();
    let source = DirectorySource::new(config.edges_root(), &config.project.edges.index_file);
    let report = build_edges(&source).unwrap();
    let written = write_artifact(config.edges_output(), &report.artifact).unwrap();

    assert_eq!(written.path, dir.path().join("out/edges.json"));
    let contents = std::fs::read_to_string(&written.path).unwrap();
    assert!(contents.starts_with("{\n  \"norse\": [\n"));
}

// =============================================================================
// Node Pipeline Tests
// =============================================================================

#[tokio::test]
async fn test_catalog_to_nodes_with_lookup() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("Complete_with_magnitude.csv");
    std::fs::write(
        &catalog_path,
        "hip,label,ra,dec,magnitude\n11767,,2.529752,89.264109,1.97\n32349,Sirius,6.752481,-16.716116,-1.44\n",
    )
    .unwrap();

    let catalog = read_catalog_file(&catalog_path).unwrap();
    let mut names = HashMap::new();
    names.insert("11767".to_string(), "alf UMi".to_string());
    let report = build_nodes(&catalog.rows, &StaticNames(names)).await;

    assert!(report.unresolved.is_empty());
    let value = serde_json::to_value(&report.artifact).unwrap();
    assert_eq!(value["11767"]["label"], "alf UMi");
    assert_eq!(value["11767"]["y"], 41);
    assert_eq!(value["32349"]["label"], "Sirius");
    assert_eq!(value["32349"]["magnitude"], -10);
}
