//! Azure Blob Repository Implementation
//!
//! BlobRepositoryのAzure Blob Storage実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use azure_storage_blobs::container::PublicAccess;
use azure_storage_blobs::prelude::ContainerClient;
use futures::stream::BoxStream;
use futures::StreamExt;
use log::debug;
use std::path::Path;
use std::sync::Arc;

use crate::adapter::azure::block_uploader::upload_file_to_block_blob;
use crate::adapter::azure::client::{create_container_client, AzureBlockBlobWriter};
use crate::adapter::azure::errors::is_container_already_exists;
use crate::domain::entities::blob_page::BlobPage;
use crate::domain::entities::container::ContainerName;
use crate::domain::entities::credentials::AccountCredentials;
use crate::domain::entities::transfer_options::TransferOptions;
use crate::domain::repositories::blob_repository::{
    BlobRepository, BlobRepositoryFactory, ContainerCreation,
};

/// Azureコンテナに束縛されたBlobリポジトリ
pub struct AzureBlobRepository {
    container: ContainerClient,
}

impl AzureBlobRepository {
    pub fn new(container: ContainerClient) -> Self {
        Self { container }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl BlobRepository for AzureBlobRepository {
    async fn create_container(&self) -> Result<ContainerCreation> {
        match self
            .container
            .create()
            .public_access(PublicAccess::None)
            .await
        {
            Ok(_) => Ok(ContainerCreation::Created),
            Err(err) if is_container_already_exists(&err) => {
                debug!("Create Container returned ContainerAlreadyExists");
                Ok(ContainerCreation::AlreadyExists)
            }
            Err(err) => Err(err).context("Create Container failed"),
        }
    }

    async fn upload_file(
        &self,
        path: &Path,
        blob_name: &str,
        options: &TransferOptions,
    ) -> Result<()> {
        let writer = Arc::new(AzureBlockBlobWriter::new(
            self.container.blob_client(blob_name),
        ));
        upload_file_to_block_blob(writer, path, options).await
    }

    fn list_pages(&self) -> BoxStream<'static, Result<BlobPage>> {
        self.container
            .list_blobs()
            .into_stream()
            .map(|page| {
                let page = page.context("List Blobs failed")?;
                let names = page.blobs.blobs().map(|blob| blob.name.clone()).collect();
                let next_marker = page.next_marker.map(|marker| marker.as_str().to_string());
                Ok(BlobPage::new(names, next_marker))
            })
            .boxed()
    }
}

/// Production factory creating Azure-backed repositories
pub struct AzureBlobRepositoryFactory;

impl AzureBlobRepositoryFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AzureBlobRepositoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobRepositoryFactory for AzureBlobRepositoryFactory {
    fn connect(
        &self,
        credentials: &AccountCredentials,
        container: &ContainerName,
    ) -> Result<Arc<dyn BlobRepository>> {
        let client = create_container_client(credentials, container);
        Ok(Arc::new(AzureBlobRepository::new(client)))
    }
}
