//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **AccountCredentials**: ストレージアカウントの認証情報
//! - **ContainerChoice / UploadTarget**: アップロード先コンテナ
//! - **FileSet**: アップロード対象のファイル一覧
//! - **BlobPage**: 一覧取得の1ページ分
//! - **TransferOptions**: ブロック分割とパラレル度の設定

pub mod blob_page;
pub mod container;
pub mod credentials;
pub mod file_set;
pub mod transfer_options;
