//! # Upload Configuration DTO
//!
//! アップロード設定のData Transfer Object

use crate::domain::entities::transfer_options::TransferOptions;

/// 自動生成するコンテナ名のデフォルトプレフィックス
pub const DEFAULT_CONTAINER_PREFIX: &str = "ibmupload";

/// アップロード設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// ブロック転送の設定
    pub transfer: TransferOptions,
    /// 自動生成するコンテナ名のプレフィックス
    pub container_prefix: String,
}

impl UploadConfig {
    /// 新しいアップロード設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use blobcopy::application::dto::upload_config::UploadConfig;
    /// use blobcopy::domain::entities::transfer_options::TransferOptions;
    ///
    /// let config = UploadConfig::new(
    ///     TransferOptions {
    ///         block_size: 8 * 1024 * 1024,
    ///         parallelism: 4,
    ///         single_shot_limit: 64 * 1024 * 1024,
    ///     },
    ///     "nightly".to_string(),
    /// );
    ///
    /// assert_eq!(config.transfer.parallelism, 4);
    /// assert_eq!(config.container_prefix, "nightly");
    /// ```
    pub fn new(transfer: TransferOptions, container_prefix: String) -> Self {
        Self {
            transfer,
            container_prefix,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::new(TransferOptions::default(), DEFAULT_CONTAINER_PREFIX.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_config_default() {
        let config = UploadConfig::default();

        assert_eq!(config.container_prefix, "ibmupload");
        assert_eq!(config.transfer, TransferOptions::default());
    }
}
