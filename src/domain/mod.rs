//! # Domain Layer
//!
//! このモジュールはアップロード処理の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - Azure SDK やファイルシステムに依存しない
//! - フレームワークに依存しない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（FileSet, ContainerChoiceなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（命名ルール）

pub mod entities;
pub mod repositories;
pub mod services;
