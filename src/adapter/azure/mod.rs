//! Azure Adapter Modules
//!
//! Azure Blob Storage 統合のためのアダプターモジュール

pub mod block_plan;
pub mod block_uploader;
pub mod client;
pub mod errors;
