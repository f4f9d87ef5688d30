//! Integration tests for blobcopy
//!
//! These tests talk to a real storage account.
//! Run with: cargo test --test integration_test -- --ignored

use blobcopy::application::dto::upload_config::UploadConfig;
use blobcopy::driver::{Args, RunOutcome, UploadWorkflow};
use std::fs;
use tempfile::TempDir;

/// Requires AZURE_STORAGE_ACCOUNT and AZURE_STORAGE_ACCESS_KEY
#[tokio::test]
#[ignore]
async fn test_azure_upload_e2e() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "alpha").unwrap();
    fs::create_dir_all(temp_dir.path().join("sub")).unwrap();
    fs::write(temp_dir.path().join("sub/b.txt"), "bravo").unwrap();

    let workflow = UploadWorkflow::new(UploadConfig::default());
    let args = Args {
        source: Some(temp_dir.path().to_string_lossy().to_string()),
        container: None,
        config: None,
    };

    let outcome = workflow.execute(args).await.expect("upload should succeed");

    let RunOutcome::Completed(report) = outcome else {
        panic!("expected a completed run");
    };
    for name in &report.uploaded {
        assert!(report.listed.contains(name), "{} not listed", name);
    }
}
