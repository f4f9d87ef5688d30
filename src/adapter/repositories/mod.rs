//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod azure_blob_repository;
pub mod file_system_repository;
