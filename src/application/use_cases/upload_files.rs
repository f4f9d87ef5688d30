//! # Upload Files Use Case
//!
//! ファイルのアップロード

use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::file_set::FileSet;
use crate::domain::entities::transfer_options::TransferOptions;
use crate::domain::repositories::blob_repository::BlobRepository;
use crate::domain::services::blob_naming::BlobNamingService;

/// アップロード結果のサマリー
#[derive(Debug, Clone, Default)]
pub struct UploadSummary {
    /// アップロードしたBlob名（アップロード順）
    pub uploaded: Vec<String>,
}

/// ファイルアップロードユースケース
///
/// ファイルを1つずつ順番にアップロードする。最初のエラーで中断し、
/// 部分的な成功は報告しない。
pub struct UploadFilesUseCase<R: BlobRepository + ?Sized> {
    blob_repository: Arc<R>,
}

impl<R: BlobRepository + ?Sized> UploadFilesUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(blob_repository: Arc<R>) -> Self {
        Self { blob_repository }
    }

    /// ファイルセットをアップロードする
    ///
    /// # Arguments
    ///
    /// * `files` - アップロード対象
    /// * `options` - 転送設定
    /// * `before_each` - 各ファイルのアップロード直前に呼ばれる（パス, Blob名）
    ///
    /// # Errors
    ///
    /// いずれかのファイルのアップロードに失敗した場合にエラーを返す
    pub async fn execute<F>(
        &self,
        files: &FileSet,
        options: &TransferOptions,
        mut before_each: F,
    ) -> Result<UploadSummary>
    where
        F: FnMut(&Path, &str),
    {
        let mut summary = UploadSummary::default();

        for path in files.iter() {
            let blob_name = BlobNamingService::blob_name(path);
            before_each(path, &blob_name);

            self.blob_repository
                .upload_file(path, &blob_name, options)
                .await
                .with_context(|| format!("Failed to upload {}", path.display()))?;

            summary.uploaded.push(blob_name);
        }

        info!("Uploaded {} file(s)", summary.uploaded.len());

        Ok(summary)
    }
}
