//! # List Blobs Use Case
//!
//! コンテナ内容の一覧

use anyhow::{Context, Result};
use futures::StreamExt;
use log::debug;
use std::sync::Arc;

use crate::domain::repositories::blob_repository::BlobRepository;

/// Blob一覧ユースケース
///
/// 継続マーカーが尽きるまでページを取得する
pub struct ListBlobsUseCase<R: BlobRepository + ?Sized> {
    blob_repository: Arc<R>,
}

impl<R: BlobRepository + ?Sized> ListBlobsUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(blob_repository: Arc<R>) -> Self {
        Self { blob_repository }
    }

    /// 全ページを取得する
    ///
    /// # Arguments
    ///
    /// * `on_blob` - Blob名ごとに取得順で呼ばれる
    ///
    /// # Returns
    ///
    /// 全Blob名（取得順）
    ///
    /// # Errors
    ///
    /// ページ取得に失敗した場合にエラーを返す
    pub async fn execute<F>(&self, mut on_blob: F) -> Result<Vec<String>>
    where
        F: FnMut(&str),
    {
        let mut pages = self.blob_repository.list_pages();
        let mut names = Vec::new();
        let mut page_count = 0usize;

        while let Some(page) = pages.next().await {
            let page = page.context("Failed to list blobs")?;
            page_count += 1;
            debug!(
                "Listing page {} ({} blobs, last: {})",
                page_count,
                page.names.len(),
                page.is_last()
            );

            for name in page.names {
                on_blob(&name);
                names.push(name);
            }
        }

        Ok(names)
    }
}
