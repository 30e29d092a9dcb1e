mod common;

use common::{create_test_dir, create_workflow_dir, read_document, write_document};
use flowmend::pipeline::{run_scaffold, Patterns, ScaffoldOptions};
use serde_json::json;

#[tokio::test]
async fn test_create_mod_scaffolds_blank_documents() {
    let temp_dir = create_test_dir();
    let checkout_dir = create_workflow_dir(temp_dir.path(), "checkout");
    let orders_dir = create_workflow_dir(temp_dir.path(), "orders");

    let options = ScaffoldOptions {
        create_mod: true,
        ..Default::default()
    };

    let report = run_scaffold(temp_dir.path(), &Patterns::default(), options)
        .await
        .expect("Should run");

    assert_eq!(report.created.len(), 2);

    let checkout_doc = read_document(&checkout_dir.join("modified.json"));
    assert_eq!(checkout_doc["workflow"]["name"], "checkout");

    let orders_doc = read_document(&orders_dir.join("modified.json"));
    assert_eq!(orders_doc["workflow"]["name"], "orders");
    assert!(orders_doc["variables"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_quit_flag_deletes_corrected_files_only() {
    let temp_dir = create_test_dir();
    let flow_dir = create_workflow_dir(temp_dir.path(), "billing");

    write_document(&flow_dir, "original.json", &json!({"keep": true}));
    write_document(&flow_dir, "modified.json", &json!({"keep": true}));
    write_document(&flow_dir, "corrected.json", &json!({"stale": true}));
    write_document(&flow_dir, "corrected_old.json", &json!({"stale": true}));

    let options = ScaffoldOptions {
        quit_flag: true,
        ..Default::default()
    };

    let report = run_scaffold(temp_dir.path(), &Patterns::default(), options)
        .await
        .expect("Should run");

    assert_eq!(report.deleted_corrected.len(), 2);
    assert!(!flow_dir.join("corrected.json").exists());
    assert!(!flow_dir.join("corrected_old.json").exists());
    assert!(flow_dir.join("original.json").exists());
    assert!(flow_dir.join("modified.json").exists());
}

#[tokio::test]
async fn test_delete_modified_removes_candidates_without_merging() {
    let temp_dir = create_test_dir();
    let flow_dir = create_workflow_dir(temp_dir.path(), "refunds");

    let original = json!({"workflow": {"name": "refunds"}});
    let original_path = write_document(&flow_dir, "original.json", &original);
    write_document(&flow_dir, "modified.json", &json!({"workflow": {"name": "edited"}}));

    let options = ScaffoldOptions {
        delete_modified: true,
        ..Default::default()
    };

    let report = run_scaffold(temp_dir.path(), &Patterns::default(), options)
        .await
        .expect("Should run");

    assert_eq!(report.deleted_modified.len(), 1);
    assert!(!flow_dir.join("modified.json").exists());

    // No merge happened: the original is untouched, no corrected output.
    assert_eq!(read_document(&original_path), original);
    assert!(!flow_dir.join("corrected.json").exists());
}

#[tokio::test]
async fn test_flags_combine_in_one_run() {
    let temp_dir = create_test_dir();
    let flow_dir = create_workflow_dir(temp_dir.path(), "fulfil");

    write_document(&flow_dir, "corrected.json", &json!({"stale": true}));

    let options = ScaffoldOptions {
        create_mod: true,
        quit_flag: true,
        delete_modified: false,
    };

    let report = run_scaffold(temp_dir.path(), &Patterns::default(), options)
        .await
        .expect("Should run");

    assert_eq!(report.created.len(), 1);
    assert_eq!(report.deleted_corrected.len(), 1);
    assert!(flow_dir.join("modified.json").exists());
    assert!(!flow_dir.join("corrected.json").exists());
}

#[tokio::test]
async fn test_user_scaffold_template_is_used() {
    let temp_dir = create_test_dir();
    let flow_dir = create_workflow_dir(temp_dir.path(), "notify");

    std::fs::write(
        temp_dir.path().join("modified.json.hbs"),
        r#"{"workflow": {"name": "{{directory}}"}, "custom_scaffold": true}"#,
    )
    .expect("Should write template");

    let options = ScaffoldOptions {
        create_mod: true,
        ..Default::default()
    };

    run_scaffold(temp_dir.path(), &Patterns::default(), options)
        .await
        .expect("Should run");

    let document = read_document(&flow_dir.join("modified.json"));
    assert_eq!(document["workflow"]["name"], "notify");
    assert_eq!(document["custom_scaffold"], true);
}
