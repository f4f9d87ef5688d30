//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapter::config::{load_credentials, EnvSource, ProcessEnv};
use crate::adapter::naming::TimeSeededNameGenerator;
use crate::adapter::repositories::azure_blob_repository::AzureBlobRepositoryFactory;
use crate::adapter::repositories::file_system_repository::FileSystemRepository;
use crate::application::dto::upload_config::UploadConfig;
use crate::application::use_cases::discover_files::DiscoverFilesUseCase;
use crate::application::use_cases::list_blobs::ListBlobsUseCase;
use crate::application::use_cases::prepare_container::PrepareContainerUseCase;
use crate::application::use_cases::resolve_container::ResolveContainerUseCase;
use crate::application::use_cases::upload_files::UploadFilesUseCase;
use crate::domain::entities::container::{ContainerStatus, UploadTarget};
use crate::domain::repositories::blob_repository::BlobRepositoryFactory;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::services::container_naming::NameGenerator;

use super::cli::{Args, USAGE};

/// 1回の実行結果
#[derive(Debug, Clone)]
pub struct RunReport {
    pub target: UploadTarget,
    pub container_status: ContainerStatus,
    /// アップロードしたBlob名（アップロード順）
    pub uploaded: Vec<String>,
    /// 最後の一覧で得たBlob名
    pub listed: Vec<String>,
}

/// 実行の終わり方
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// 引数不足で使い方を表示した（正常終了）
    Usage,
    Completed(RunReport),
}

/// Upload Workflow
pub struct UploadWorkflow {
    config: UploadConfig,
    env: Arc<dyn EnvSource>,
    connector: Arc<dyn BlobRepositoryFactory>,
    resolve_use_case: ResolveContainerUseCase<dyn NameGenerator>,
    discover_use_case: DiscoverFilesUseCase<dyn FileRepository>,
}

impl UploadWorkflow {
    /// Create a workflow wired to the process environment and Azure
    pub fn new(config: UploadConfig) -> Self {
        Self::with_dependencies(
            config,
            Arc::new(ProcessEnv),
            Arc::new(AzureBlobRepositoryFactory::new()),
            Arc::new(FileSystemRepository::new()),
            Arc::new(TimeSeededNameGenerator::new()),
        )
    }

    /// Create a workflow with injected dependencies
    pub fn with_dependencies(
        config: UploadConfig,
        env: Arc<dyn EnvSource>,
        connector: Arc<dyn BlobRepositoryFactory>,
        file_repository: Arc<dyn FileRepository>,
        name_generator: Arc<dyn NameGenerator>,
    ) -> Self {
        Self {
            config,
            env,
            connector,
            resolve_use_case: ResolveContainerUseCase::new(name_generator),
            discover_use_case: DiscoverFilesUseCase::new(file_repository),
        }
    }

    /// Execute the upload workflow
    ///
    /// Every step runs to completion before the next starts; the first error
    /// aborts the run.
    pub async fn execute(&self, args: Args) -> Result<RunOutcome> {
        let Some(source) = args.source else {
            println!("{}", USAGE);
            return Ok(RunOutcome::Usage);
        };

        println!("Azure Blob storage upload");

        // Must precede connect()
        let credentials = load_credentials(self.env.as_ref())?;

        let choice = self
            .resolve_use_case
            .execute(args.container.as_deref(), &self.config.container_prefix);
        let target = UploadTarget::new(credentials.account(), choice.name.clone());
        info!("Upload target: {}", target.endpoint());

        let blob_repository = self.connector.connect(&credentials, &choice.name)?;

        if choice.needs_creation() {
            println!("Creating a container named {}", choice.name);
        }
        let container_status = PrepareContainerUseCase::new(blob_repository.clone())
            .execute(&choice)
            .await?;
        if let Some(notice) = container_notice(container_status) {
            println!("{}", notice);
        }

        let source = PathBuf::from(shellexpand::tilde(&source).as_ref());
        let files = self.discover_use_case.execute(&source).await?;

        let summary = UploadFilesUseCase::new(blob_repository.clone())
            .execute(&files, &self.config.transfer, |_, blob_name| {
                println!("Uploading the file with blob name: {}", blob_name)
            })
            .await?;

        println!("Finished uploading! \n\n Listing the blobs in the container:");
        let listed = ListBlobsUseCase::new(blob_repository)
            .execute(|name| println!("\tBlob name: {}", name))
            .await?;

        Ok(RunOutcome::Completed(RunReport {
            target,
            container_status,
            uploaded: summary.uploaded,
            listed,
        }))
    }
}

/// コンテナ準備後に表示する一言
fn container_notice(status: ContainerStatus) -> Option<&'static str> {
    match status {
        ContainerStatus::AlreadyExisted => Some("Received 409. Container already exists"),
        ContainerStatus::Bound | ContainerStatus::Created => None,
    }
}
