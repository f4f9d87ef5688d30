//! Azure Client Abstractions
//!
//! 共有キー認証でのクライアント作成と、ブロックBlob書き込みの抽象化

use anyhow::{Context, Result};
use async_trait::async_trait;
use azure_storage::StorageCredentials;
use azure_storage_blobs::blob::{BlobBlockType, BlockList};
use azure_storage_blobs::prelude::{BlobClient, BlockId, ClientBuilder, ContainerClient};
use log::debug;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::container::{ContainerName, UploadTarget};
use crate::domain::entities::credentials::AccountCredentials;

/// Creates a container client authenticated with the account access key
///
/// Building the client performs no network calls.
pub fn create_container_client(
    credentials: &AccountCredentials,
    container: &ContainerName,
) -> ContainerClient {
    let target = UploadTarget::new(credentials.account(), container.clone());
    debug!("Connecting to {}", target.endpoint());

    let storage_credentials = StorageCredentials::access_key(
        credentials.account().to_string(),
        credentials.access_key().to_string(),
    );

    ClientBuilder::new(credentials.account().to_string(), storage_credentials)
        .container_client(container.as_str())
}

/// Trait for the three block blob write operations
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlockBlobWriter: Send + Sync {
    /// Put Blob: 本文全体を1リクエストで書き込む
    async fn put_blob(&self, body: Vec<u8>) -> Result<()>;

    /// Put Block: 未コミットのブロックを1つ送る
    async fn put_block(&self, block_id: Vec<u8>, data: Vec<u8>) -> Result<()>;

    /// Put Block List: 渡した順にブロックをコミットする
    async fn put_block_list(&self, block_ids: Vec<Vec<u8>>) -> Result<()>;
}

/// Real blob client wrapper implementing BlockBlobWriter
pub struct AzureBlockBlobWriter {
    blob: BlobClient,
}

impl AzureBlockBlobWriter {
    pub fn new(blob: BlobClient) -> Self {
        Self { blob }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl BlockBlobWriter for AzureBlockBlobWriter {
    async fn put_blob(&self, body: Vec<u8>) -> Result<()> {
        self.blob
            .put_block_blob(body)
            .await
            .context("Put Blob failed")?;
        Ok(())
    }

    async fn put_block(&self, block_id: Vec<u8>, data: Vec<u8>) -> Result<()> {
        self.blob
            .put_block(BlockId::new(block_id), data)
            .await
            .context("Put Block failed")?;
        Ok(())
    }

    async fn put_block_list(&self, block_ids: Vec<Vec<u8>>) -> Result<()> {
        let blocks = block_ids
            .into_iter()
            .map(|id| BlobBlockType::Uncommitted(BlockId::new(id)))
            .collect();

        self.blob
            .put_block_list(BlockList { blocks })
            .await
            .context("Put Block List failed")?;
        Ok(())
    }
}
