//! # FileSet Value Object
//!
//! アップロード対象ファイルのコレクション

use std::path::{Path, PathBuf};

/// ディレクトリ走査で得られた1エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    /// シンボリックリンクを辿った結果がディレクトリかどうか
    pub is_dir: bool,
}

impl WalkEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }
}

/// アップロード対象ファイルの順序付きリスト
///
/// メタデータは持たず、パスのみを保持する
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    paths: Vec<PathBuf>,
}

impl FileSet {
    /// 単一ファイルのセットを作成
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self {
            paths: vec![path.into()],
        }
    }

    /// 走査結果からディレクトリ以外を走査順のまま取り出す
    pub fn from_walk<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = WalkEntry>,
    {
        let paths = entries
            .into_iter()
            .filter(|entry| !entry.is_dir)
            .map(|entry| entry.path)
            .collect();

        Self { paths }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}
