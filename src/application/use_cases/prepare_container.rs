//! # Prepare Container Use Case
//!
//! コンテナの作成（自動生成した名前のみ）

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::domain::entities::container::{ContainerChoice, ContainerStatus};
use crate::domain::repositories::blob_repository::{BlobRepository, ContainerCreation};

/// コンテナ準備ユースケース
///
/// 指定されたコンテナには何もしない（存在確認はアップロード時にSDKが行う）。
/// 自動生成したコンテナは作成し、既に存在していてもエラーにしない。
pub struct PrepareContainerUseCase<R: BlobRepository + ?Sized> {
    blob_repository: Arc<R>,
}

impl<R: BlobRepository + ?Sized> PrepareContainerUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `blob_repository` - 対象コンテナに束縛されたリポジトリ
    pub fn new(blob_repository: Arc<R>) -> Self {
        Self { blob_repository }
    }

    /// コンテナを準備する
    ///
    /// # Errors
    ///
    /// "既に存在する" 以外の作成エラーを返す
    pub async fn execute(&self, choice: &ContainerChoice) -> Result<ContainerStatus> {
        if !choice.needs_creation() {
            info!("Binding to existing container {}", choice.name);
            return Ok(ContainerStatus::Bound);
        }

        let creation = self
            .blob_repository
            .create_container()
            .await
            .with_context(|| format!("Failed to create container {}", choice.name))?;

        match creation {
            ContainerCreation::Created => {
                info!("Created container {}", choice.name);
                Ok(ContainerStatus::Created)
            }
            ContainerCreation::AlreadyExists => {
                info!("Container {} already exists", choice.name);
                Ok(ContainerStatus::AlreadyExisted)
            }
        }
    }
}
