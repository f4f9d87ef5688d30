//! blobcopy - Azure Blob Storage Uploader
//!
//! ファイルまたはディレクトリを Azure Blob Storage にアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use blobcopy::adapter::config::Config;
use blobcopy::driver::{Args, UploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (defaults when no file is given)
    let config = Config::load_or_default(args.config.as_deref())?;

    // Create workflow with injected dependencies
    let workflow = UploadWorkflow::new(config.to_upload_config());

    workflow.execute(args).await?;
    Ok(())
}
