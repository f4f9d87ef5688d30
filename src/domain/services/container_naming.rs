//! # Container Naming Service
//!
//! 自動作成するコンテナの命名ルール

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::container::ContainerChoice;

/// コンテナ名のサフィックス生成器
///
/// 本番では時刻シードの乱数、テストでは固定値を返す実装を注入する
#[cfg_attr(test, automock)]
pub trait NameGenerator: Send + Sync {
    /// 10進数のサフィックスを返す
    fn suffix(&self) -> String;
}

/// コンテナ命名サービス
pub struct ContainerNamingService;

impl ContainerNamingService {
    /// コンテナを決定する
    ///
    /// 名前が指定されていればそれを使い、生成器は呼ばない。
    /// 指定がなければ `prefix + suffix` を生成する。
    ///
    /// # Arguments
    ///
    /// * `requested` - ユーザー指定のコンテナ名
    /// * `prefix` - 自動生成時の固定プレフィックス
    /// * `generator` - サフィックス生成器
    pub fn choose<G>(requested: Option<&str>, prefix: &str, generator: &G) -> ContainerChoice
    where
        G: NameGenerator + ?Sized,
    {
        match requested {
            Some(name) => ContainerChoice::supplied(name),
            None => ContainerChoice::generated(format!("{}{}", prefix, generator.suffix())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::container::ContainerOrigin;

    #[test]
    fn test_choose_generates_with_prefix() {
        let mut generator = MockNameGenerator::new();
        generator
            .expect_suffix()
            .times(1)
            .returning(|| "5577006791947779410".to_string());

        let choice = ContainerNamingService::choose(None, "ibmupload", &generator);

        assert_eq!(choice.name.as_str(), "ibmupload5577006791947779410");
        assert_eq!(choice.origin, ContainerOrigin::Generated);
    }

    #[test]
    fn test_choose_supplied_skips_generator() {
        let mut generator = MockNameGenerator::new();
        generator.expect_suffix().times(0);

        let choice = ContainerNamingService::choose(Some("backups"), "ibmupload", &generator);

        assert_eq!(choice.name.as_str(), "backups");
        assert_eq!(choice.origin, ContainerOrigin::Supplied);
    }
}
