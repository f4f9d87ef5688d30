//! # Blob Naming Service
//!
//! ローカルパスからBlob名への変換ルール

use std::path::{Component, Path};

/// Blob命名サービス
pub struct BlobNamingService;

impl BlobNamingService {
    /// ローカルパスからBlob名を作る
    ///
    /// 入力されたパス表記の通常セグメントだけを `/` で連結する。
    /// ルート、`.`、`..` は捨てる。結果はBlob URL上の名前と一致する。
    pub fn blob_name(path: &Path) -> String {
        let normalized = path.to_string_lossy().replace('\\', "/");

        Path::new(&normalized)
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment.to_string_lossy()),
                Component::Prefix(_)
                | Component::RootDir
                | Component::CurDir
                | Component::ParentDir => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
