//! # Blob Repository Trait
//!
//! オブジェクトストレージ（コンテナ）操作を抽象化

use anyhow::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;
use std::path::Path;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::blob_page::BlobPage;
use crate::domain::entities::container::ContainerName;
use crate::domain::entities::credentials::AccountCredentials;
use crate::domain::entities::transfer_options::TransferOptions;

/// コンテナ作成の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerCreation {
    Created,
    /// サービスが "ContainerAlreadyExists" を返した
    AlreadyExists,
}

/// Blobリポジトリ
///
/// 1つのコンテナに束縛されたストレージ操作
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobRepository: Send + Sync {
    /// コンテナを作成する
    ///
    /// # Errors
    ///
    /// "既に存在する" 以外のサービスエラーはエラーとして返す
    async fn create_container(&self) -> Result<ContainerCreation>;

    /// ローカルファイルをブロックBlobとしてアップロードする
    async fn upload_file(
        &self,
        path: &Path,
        blob_name: &str,
        options: &TransferOptions,
    ) -> Result<()>;

    /// コンテナ内のBlobをページ単位で列挙する
    ///
    /// 継続マーカーがなくなるまでページを返し続ける
    fn list_pages(&self) -> BoxStream<'static, Result<BlobPage>>;
}

/// Blobリポジトリのファクトリ
///
/// 接続の構築のみを行い、ネットワーク通信はしない
#[cfg_attr(test, automock)]
pub trait BlobRepositoryFactory: Send + Sync {
    fn connect(
        &self,
        credentials: &AccountCredentials,
        container: &ContainerName,
    ) -> Result<Arc<dyn BlobRepository>>;
}
