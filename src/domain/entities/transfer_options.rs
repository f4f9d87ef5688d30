//! # TransferOptions Value Object
//!
//! ブロックBlobアップロードの転送設定

/// 1ブロックのデフォルトサイズ（4 MiB）
pub const DEFAULT_BLOCK_SIZE: u64 = 4 * 1024 * 1024;

/// 1ファイルあたりの同時ブロック転送数
pub const DEFAULT_PARALLELISM: usize = 16;

/// このサイズ以下は Put Blob 1回で送る（256 MiB）
pub const DEFAULT_SINGLE_SHOT_LIMIT: u64 = 256 * 1024 * 1024;

/// 転送設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOptions {
    pub block_size: u64,
    pub parallelism: usize,
    pub single_shot_limit: u64,
}

impl TransferOptions {
    /// ブロック分割が必要なサイズかどうか
    #[inline]
    pub fn requires_blocks(&self, file_size: u64) -> bool {
        file_size > self.single_shot_limit
    }
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            parallelism: DEFAULT_PARALLELISM,
            single_shot_limit: DEFAULT_SINGLE_SHOT_LIMIT,
        }
    }
}
