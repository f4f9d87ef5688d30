//! # Application Layer
//!
//! アップロードの流れ（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてフローを実現
//! - Repository traitに依存（Azure SDKには依存しない）
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object
//! - **use_cases**: ユースケース

pub mod dto;
pub mod use_cases;
