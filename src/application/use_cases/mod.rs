//! # Use Cases
//!
//! アップロードの各ステップ
//!
//! ## ユースケース
//!
//! - **ResolveContainerUseCase**: コンテナ名の決定
//! - **PrepareContainerUseCase**: コンテナの作成（自動生成時のみ）
//! - **DiscoverFilesUseCase**: アップロード対象ファイルの列挙
//! - **UploadFilesUseCase**: ファイルのアップロード
//! - **ListBlobsUseCase**: コンテナ内容の一覧

pub mod discover_files;
pub mod list_blobs;
pub mod prepare_container;
pub mod resolve_container;
pub mod upload_files;
