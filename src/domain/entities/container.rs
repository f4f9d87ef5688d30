//! # Container Value Objects
//!
//! アップロード先コンテナの表現

use std::fmt;

/// コンテナ名
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerName(String);

impl ContainerName {
    /// 新しいコンテナ名を作成
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// 文字列として参照
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// コンテナ名の由来
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerOrigin {
    /// ユーザーが指定した既存コンテナ（作成しない）
    Supplied,
    /// 自動生成した名前（起動時に作成する）
    Generated,
}

/// 解決済みのコンテナ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerChoice {
    pub name: ContainerName,
    pub origin: ContainerOrigin,
}

impl ContainerChoice {
    pub fn supplied(name: impl Into<String>) -> Self {
        Self {
            name: ContainerName::new(name),
            origin: ContainerOrigin::Supplied,
        }
    }

    pub fn generated(name: impl Into<String>) -> Self {
        Self {
            name: ContainerName::new(name),
            origin: ContainerOrigin::Generated,
        }
    }

    /// 作成が必要かどうか
    #[inline]
    pub fn needs_creation(&self) -> bool {
        self.origin == ContainerOrigin::Generated
    }
}

/// コンテナ準備の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerStatus {
    /// 指定されたコンテナにそのまま接続した
    Bound,
    /// 新規作成した
    Created,
    /// 作成しようとしたが既に存在していた
    AlreadyExisted,
}

/// アップロード先（アカウント + コンテナ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub account: String,
    pub container: ContainerName,
}

impl UploadTarget {
    pub fn new(account: impl Into<String>, container: ContainerName) -> Self {
        Self {
            account: account.into(),
            container,
        }
    }

    /// コンテナのエンドポイントURL
    pub fn endpoint(&self) -> String {
        format!(
            "https://{}.blob.core.windows.net/{}",
            self.account, self.container
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplied_does_not_need_creation() {
        let choice = ContainerChoice::supplied("existing");
        assert_eq!(choice.name.as_str(), "existing");
        assert!(!choice.needs_creation());
    }

    #[test]
    fn test_generated_needs_creation() {
        let choice = ContainerChoice::generated("ibmupload42");
        assert!(choice.needs_creation());
    }

    #[test]
    fn test_endpoint() {
        let target = UploadTarget::new("myaccount", ContainerName::new("backups"));
        assert_eq!(
            target.endpoint(),
            "https://myaccount.blob.core.windows.net/backups"
        );
    }
}
