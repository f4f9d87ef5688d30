//! Adapter Layer
//!
//! 外部システム（Azure Blob Storage, ファイルシステム, 環境変数）との統合

pub mod azure;
pub mod config;
pub mod naming;
pub mod repositories;
