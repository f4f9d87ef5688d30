//! Block Plan
//!
//! ブロックBlobの分割計画とブロックIDの生成

use std::ops::Range;
use thiserror::Error;
use uuid::Uuid;

/// Maximum number of committed blocks in a block blob
pub const MAX_BLOCKS: u64 = 50_000;

/// 分割計画のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("block size must be greater than zero")]
    ZeroBlockSize,
    #[error("file of {size} bytes needs {blocks} blocks of {block_size} bytes (limit {max})")]
    TooManyBlocks {
        size: u64,
        block_size: u64,
        blocks: u64,
        max: u64,
    },
}

/// ファイルをブロック単位のバイト範囲に分割した計画
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPlan {
    ranges: Vec<Range<u64>>,
}

impl BlockPlan {
    /// 分割計画を作成
    ///
    /// 最後のブロックだけが `block_size` より短くなりうる
    ///
    /// # Errors
    ///
    /// ブロック数が `MAX_BLOCKS` を超える場合は通信前にエラーを返す
    pub fn new(size: u64, block_size: u64) -> Result<Self, TransferError> {
        if block_size == 0 {
            return Err(TransferError::ZeroBlockSize);
        }

        let blocks = size.div_ceil(block_size);
        if blocks > MAX_BLOCKS {
            return Err(TransferError::TooManyBlocks {
                size,
                block_size,
                blocks,
                max: MAX_BLOCKS,
            });
        }

        let ranges = (0..blocks)
            .map(|index| {
                let start = index * block_size;
                start..(start + block_size).min(size)
            })
            .collect();

        Ok(Self { ranges })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[Range<u64>] {
        &self.ranges
    }
}

/// ブロックIDの生成器
///
/// ファイルごとのランダムUUIDの末尾4バイトをブロック番号（ビッグエンディアン）で
/// 置き換える。全IDが同じ長さになる。
#[derive(Debug, Clone, Copy)]
pub struct BlockIdGenerator {
    prefix: [u8; 16],
}

impl BlockIdGenerator {
    pub fn new() -> Self {
        Self::with_prefix(Uuid::new_v4())
    }

    pub fn with_prefix(prefix: Uuid) -> Self {
        Self {
            prefix: prefix.into_bytes(),
        }
    }

    /// `index` 番目のブロックID（生バイト、SDKがBase64化する）
    pub fn id(&self, index: u32) -> Vec<u8> {
        let mut bytes = self.prefix;
        bytes[12..].copy_from_slice(&index.to_be_bytes());
        bytes.to_vec()
    }
}

impl Default for BlockIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
