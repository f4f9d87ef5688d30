//! # Discover Files Use Case
//!
//! アップロード対象ファイルの列挙

use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::file_set::FileSet;
use crate::domain::repositories::file_repository::{EntryKind, FileRepository};

/// ファイル列挙ユースケース
///
/// ディレクトリなら再帰的に走査し、ファイルならそれ単体を対象にする
pub struct DiscoverFilesUseCase<R: FileRepository + ?Sized> {
    file_repository: Arc<R>,
}

impl<R: FileRepository + ?Sized> DiscoverFilesUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `file_repository` - ファイルリポジトリ
    pub fn new(file_repository: Arc<R>) -> Self {
        Self { file_repository }
    }

    /// アップロード対象を列挙する
    ///
    /// # Arguments
    ///
    /// * `source` - コマンドラインで指定されたファイルまたはディレクトリ
    ///
    /// # Errors
    ///
    /// パスが存在しない場合、または走査に失敗した場合にエラーを返す
    pub async fn execute(&self, source: &Path) -> Result<FileSet> {
        let kind = self
            .file_repository
            .inspect(source)
            .await
            .with_context(|| format!("Failed to stat {}", source.display()))?;

        let file_set = match kind {
            EntryKind::File => FileSet::single(source),
            EntryKind::Directory => {
                let entries = self
                    .file_repository
                    .walk(source)
                    .await
                    .with_context(|| format!("Failed to walk {}", source.display()))?;
                FileSet::from_walk(entries)
            }
        };

        info!(
            "Discovered {} file(s) under {}",
            file_set.len(),
            source.display()
        );

        Ok(file_set)
    }
}
