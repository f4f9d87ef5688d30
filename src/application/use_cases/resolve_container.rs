//! # Resolve Container Use Case
//!
//! アップロード先コンテナ名の決定

use std::sync::Arc;

use crate::domain::entities::container::ContainerChoice;
use crate::domain::services::container_naming::{ContainerNamingService, NameGenerator};

/// コンテナ名決定ユースケース
pub struct ResolveContainerUseCase<N: NameGenerator + ?Sized> {
    name_generator: Arc<N>,
}

impl<N: NameGenerator + ?Sized> ResolveContainerUseCase<N> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `name_generator` - 自動生成時に使うサフィックス生成器
    pub fn new(name_generator: Arc<N>) -> Self {
        Self { name_generator }
    }

    /// コンテナを決定する
    ///
    /// # Arguments
    ///
    /// * `requested` - コマンドラインで指定されたコンテナ名
    /// * `prefix` - 自動生成時のプレフィックス
    pub fn execute(&self, requested: Option<&str>, prefix: &str) -> ContainerChoice {
        ContainerNamingService::choose(requested, prefix, self.name_generator.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::container::ContainerOrigin;
    use crate::domain::services::container_naming::MockNameGenerator;

    #[test]
    fn test_resolve_generated() {
        let mut generator = MockNameGenerator::new();
        generator.expect_suffix().returning(|| "123".to_string());
        let use_case = ResolveContainerUseCase::new(Arc::new(generator));

        let choice = use_case.execute(None, "ibmupload");

        assert_eq!(choice.name.as_str(), "ibmupload123");
        assert_eq!(choice.origin, ContainerOrigin::Generated);
    }

    #[test]
    fn test_resolve_supplied() {
        let mut generator = MockNameGenerator::new();
        generator.expect_suffix().times(0);
        let use_case = ResolveContainerUseCase::new(Arc::new(generator));

        let choice = use_case.execute(Some("existing-container"), "ibmupload");

        assert_eq!(choice.name.as_str(), "existing-container");
        assert_eq!(choice.origin, ContainerOrigin::Supplied);
    }

    #[test]
    fn test_resolve_with_trait_object() {
        let mut generator = MockNameGenerator::new();
        generator.expect_suffix().returning(|| "9".to_string());
        let generator: Arc<dyn NameGenerator> = Arc::new(generator);
        let use_case = ResolveContainerUseCase::new(generator);

        let choice = use_case.execute(None, "pre");

        assert_eq!(choice.name.as_str(), "pre9");
    }
}
