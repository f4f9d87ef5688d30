//! # File Repository Trait
//!
//! ローカルファイルシステムの参照を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::file_set::WalkEntry;

/// パスの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// ディレクトリ以外（通常ファイル、デバイスファイルなど）
    File,
}

/// ファイルリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// パスの種類を調べる（シンボリックリンクは辿る）
    ///
    /// # Errors
    ///
    /// パスが存在しない、または参照できない場合にエラーを返す
    async fn inspect(&self, path: &Path) -> Result<EntryKind>;

    /// ディレクトリを再帰的に走査する
    ///
    /// ルート自身を含む全エントリを走査順に返す
    ///
    /// # Errors
    ///
    /// 走査中のエラーはそのまま返す（スキップしない）
    async fn walk(&self, root: &Path) -> Result<Vec<WalkEntry>>;
}
