//! # BlobPage Value Object
//!
//! コンテナ一覧取得の1ページ

/// 一覧取得の1ページ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlobPage {
    /// このページに含まれるBlob名
    pub names: Vec<String>,
    /// 次ページの継続マーカー（`None` なら最終ページ）
    pub next_marker: Option<String>,
}

impl BlobPage {
    pub fn new(names: Vec<String>, next_marker: Option<String>) -> Self {
        Self { names, next_marker }
    }

    /// 最終ページかどうか
    #[inline]
    pub fn is_last(&self) -> bool {
        self.next_marker.is_none()
    }
}
