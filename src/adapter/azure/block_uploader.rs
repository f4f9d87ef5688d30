//! Block Blob Uploader
//!
//! ファイルをブロックBlobとしてアップロードする
//!
//! 単一リクエストの上限以下なら Put Blob、超える場合はブロックに分割して
//! 並列に Put Block を送り、最後に Put Block List でコミットする。

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::block_plan::{BlockIdGenerator, BlockPlan};
use super::client::BlockBlobWriter;
use crate::domain::entities::transfer_options::TransferOptions;

/// Upload a local file to a block blob
pub async fn upload_file_to_block_blob<W>(
    writer: Arc<W>,
    path: &Path,
    options: &TransferOptions,
) -> Result<()>
where
    W: BlockBlobWriter + ?Sized + 'static,
{
    let mut file = File::open(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let size = file
        .metadata()
        .await
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();

    if !options.requires_blocks(size) {
        let mut body = Vec::with_capacity(size as usize);
        file.read_to_end(&mut body)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        writer.put_blob(body).await?;
        debug!("Uploaded {} ({} bytes) in one request", path.display(), size);
        return Ok(());
    }

    let plan = BlockPlan::new(size, options.block_size)?;
    info!(
        "Uploading {} ({} bytes) as {} blocks, parallelism {}",
        path.display(),
        size,
        plan.len(),
        options.parallelism
    );

    let ids = BlockIdGenerator::new();
    let semaphore = Arc::new(Semaphore::new(options.parallelism));
    let mut tasks: JoinSet<Result<()>> = JoinSet::new();
    let mut block_ids = Vec::with_capacity(plan.len());

    for (index, range) in plan.ranges().iter().enumerate() {
        // Acquire before reading so at most `parallelism` blocks sit in memory
        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .context("Semaphore closed")?;

        while let Some(finished) = tasks.try_join_next() {
            finished.context("Block upload task panicked")??;
        }

        let mut chunk = vec![0u8; (range.end - range.start) as usize];
        file.read_exact(&mut chunk).await.with_context(|| {
            format!(
                "Failed to read bytes {}..{} of {}",
                range.start,
                range.end,
                path.display()
            )
        })?;

        let block_id = ids.id(index as u32);
        block_ids.push(block_id.clone());

        let writer = writer.clone();
        tasks.spawn(async move {
            let _permit = permit;
            writer
                .put_block(block_id, chunk)
                .await
                .with_context(|| format!("Put Block {} failed", index))
        });
    }

    while let Some(finished) = tasks.join_next().await {
        finished.context("Block upload task panicked")??;
    }

    writer.put_block_list(block_ids).await?;

    debug!("Committed {} blocks for {}", plan.len(), path.display());
    Ok(())
}
