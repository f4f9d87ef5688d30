//! File System Repository Implementation
//!
//! FileRepositoryのローカルファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::domain::entities::file_set::WalkEntry;
use crate::domain::repositories::file_repository::{EntryKind, FileRepository};

/// ファイルシステムベースのリポジトリ
pub struct FileSystemRepository;

impl FileSystemRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// パスの種類を調べる（内部実装）
    fn inspect_internal(path: &Path) -> Result<EntryKind> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to stat {}", path.display()))?;

        Ok(if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }

    /// ディレクトリを走査する（内部実装）
    ///
    /// シンボリックリンク先のディレクトリには降りないが、
    /// 分類はリンク先で行う
    fn walk_internal(root: &Path) -> Result<Vec<WalkEntry>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("Failed to walk {}", root.display()))?;
            let path = entry.into_path();
            let is_dir = Self::inspect_internal(&path)? == EntryKind::Directory;

            entries.push(WalkEntry { path, is_dir });
        }

        info!("Walked {} entries in {}", entries.len(), root.display());

        Ok(entries)
    }
}

#[async_trait]
impl FileRepository for FileSystemRepository {
    async fn inspect(&self, path: &Path) -> Result<EntryKind> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::inspect_internal(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn walk(&self, root: &Path) -> Result<Vec<WalkEntry>> {
        let root = root.to_path_buf();
        tokio::task::spawn_blocking(move || Self::walk_internal(&root))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FileSystemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::file_set::FileSet;
    use tempfile::TempDir;

    fn create_tree(dir: &Path) {
        fs::write(dir.join("a.txt"), "a").unwrap();
        fs::create_dir_all(dir.join("sub/empty")).unwrap();
        fs::write(dir.join("sub/b.txt"), "b").unwrap();
    }

    #[test]
    fn test_inspect_file_and_directory() {
        let temp_dir = TempDir::new().unwrap();
        create_tree(temp_dir.path());

        assert_eq!(
            FileSystemRepository::inspect_internal(temp_dir.path()).unwrap(),
            EntryKind::Directory
        );
        assert_eq!(
            FileSystemRepository::inspect_internal(&temp_dir.path().join("a.txt")).unwrap(),
            EntryKind::File
        );
    }

    #[test]
    fn test_inspect_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemRepository::inspect_internal(&temp_dir.path().join("missing"));
        assert!(result.is_err());
    }

    #[test]
    fn test_walk_includes_all_entries_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_tree(root);

        let entries = FileSystemRepository::walk_internal(root).unwrap();

        assert_eq!(
            entries,
            vec![
                WalkEntry::dir(root),
                WalkEntry::file(root.join("a.txt")),
                WalkEntry::dir(root.join("sub")),
                WalkEntry::file(root.join("sub/b.txt")),
                WalkEntry::dir(root.join("sub/empty")),
            ]
        );
    }

    #[test]
    fn test_walk_deep_nesting() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let deep = root.join("a/b/c/d/e");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("leaf.txt"), "leaf").unwrap();
        fs::write(root.join("top.txt"), "top").unwrap();

        let set = FileSet::from_walk(FileSystemRepository::walk_internal(root).unwrap());

        assert_eq!(set.paths(), &[deep.join("leaf.txt"), root.join("top.txt")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_symlinked_directory_not_uploaded() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_tree(root);
        std::os::unix::fs::symlink(root.join("sub"), root.join("link")).unwrap();

        let set = FileSet::from_walk(FileSystemRepository::walk_internal(root).unwrap());

        assert_eq!(set.paths(), &[root.join("a.txt"), root.join("sub/b.txt")]);
    }

    #[tokio::test]
    async fn test_async_walk() {
        let temp_dir = TempDir::new().unwrap();
        create_tree(temp_dir.path());
        let repo = FileSystemRepository::new();

        let entries = repo.walk(temp_dir.path()).await.unwrap();

        assert_eq!(entries.len(), 5);
    }
}
