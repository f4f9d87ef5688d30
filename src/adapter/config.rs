//! Configuration
//!
//! 設定ファイル（JSON）と環境変数からの認証情報の読み込み

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

use crate::application::dto::upload_config::{UploadConfig, DEFAULT_CONTAINER_PREFIX};
use crate::domain::entities::credentials::{AccountCredentials, CredentialsError};
use crate::domain::entities::transfer_options::{
    TransferOptions, DEFAULT_BLOCK_SIZE, DEFAULT_PARALLELISM, DEFAULT_SINGLE_SHOT_LIMIT,
};

/// Storage account name variable
pub const ACCOUNT_ENV: &str = "AZURE_STORAGE_ACCOUNT";
/// Storage account access key variable
pub const ACCESS_KEY_ENV: &str = "AZURE_STORAGE_ACCESS_KEY";

const MIB: u64 = 1024 * 1024;
/// Largest block the service accepts in a single Put Block
pub const MAX_BLOCK_SIZE: u64 = 4000 * MIB;
/// Largest body the service accepts in a single Put Blob
pub const MAX_SINGLE_SHOT_LIMIT: u64 = 5000 * MIB;

/// 設定値の検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("block_size must be between 1 and {max} bytes, got {value}")]
    BlockSize { value: u64, max: u64 },
    #[error("parallelism must be at least 1")]
    Parallelism,
    #[error("single_shot_limit must be between 1 and {max} bytes, got {value}")]
    SingleShotLimit { value: u64, max: u64 },
    #[error("container_prefix must not be empty")]
    EmptyPrefix,
}

/// 設定ファイルの内容
///
/// すべての項目は省略可能で、省略時はデフォルト値を使う
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub block_size: u64,
    pub parallelism: usize,
    pub single_shot_limit: u64,
    pub container_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            parallelism: DEFAULT_PARALLELISM,
            single_shot_limit: DEFAULT_SINGLE_SHOT_LIMIT,
            container_prefix: DEFAULT_CONTAINER_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// JSONファイルから読み込む（`~` は展開する）
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read config file: {}", expanded))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", expanded))?;
        config.validate()?;

        info!("Loaded configuration from {}", expanded);
        Ok(config)
    }

    /// パスが指定されていれば読み込み、なければデフォルト
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 || self.block_size > MAX_BLOCK_SIZE {
            return Err(ConfigError::BlockSize {
                value: self.block_size,
                max: MAX_BLOCK_SIZE,
            });
        }
        if self.parallelism == 0 {
            return Err(ConfigError::Parallelism);
        }
        if self.single_shot_limit == 0 || self.single_shot_limit > MAX_SINGLE_SHOT_LIMIT {
            return Err(ConfigError::SingleShotLimit {
                value: self.single_shot_limit,
                max: MAX_SINGLE_SHOT_LIMIT,
            });
        }
        if self.container_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        Ok(())
    }

    pub fn to_upload_config(&self) -> UploadConfig {
        UploadConfig::new(
            TransferOptions {
                block_size: self.block_size,
                parallelism: self.parallelism,
                single_shot_limit: self.single_shot_limit,
            },
            self.container_prefix.clone(),
        )
    }
}

/// Source of environment variables, injectable for tests
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// 環境変数から認証情報を読み込む
///
/// # Errors
///
/// どちらかが未設定または空の場合に `CredentialsError::Missing` を返す
pub fn load_credentials<E: EnvSource + ?Sized>(
    env: &E,
) -> Result<AccountCredentials, CredentialsError> {
    let account = env.var(ACCOUNT_ENV).unwrap_or_default();
    let access_key = env.var(ACCESS_KEY_ENV).unwrap_or_default();

    AccountCredentials::new(account, access_key, ACCOUNT_ENV, ACCESS_KEY_ENV)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    struct MapEnv(HashMap<&'static str, &'static str>);

    impl EnvSource for MapEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|v| v.to_string())
        }
    }

    #[test]
    fn test_load_credentials_success() {
        let env = MapEnv(HashMap::from([
            (ACCOUNT_ENV, "myaccount"),
            (ACCESS_KEY_ENV, "a2V5"),
        ]));

        let creds = load_credentials(&env).unwrap();

        assert_eq!(creds.account(), "myaccount");
        assert_eq!(creds.access_key(), "a2V5");
    }

    #[test]
    fn test_load_credentials_missing_key() {
        let env = MapEnv(HashMap::from([(ACCOUNT_ENV, "myaccount")]));

        let err = load_credentials(&env).unwrap_err();

        assert_eq!(
            err,
            CredentialsError::Missing {
                name: ACCESS_KEY_ENV.to_string()
            }
        );
    }

    #[test]
    fn test_load_credentials_empty_account() {
        let env = MapEnv(HashMap::from([(ACCOUNT_ENV, ""), (ACCESS_KEY_ENV, "a2V5")]));

        let err = load_credentials(&env).unwrap_err();

        assert_eq!(
            err,
            CredentialsError::Missing {
                name: ACCOUNT_ENV.to_string()
            }
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.to_upload_config(), UploadConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "parallelism": 4, "container_prefix": "nightly" }"#)
            .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.parallelism, 4);
        assert_eq!(config.container_prefix, "nightly");
        assert_eq!(config.block_size, DEFAULT_BLOCK_SIZE);
        assert_eq!(config.single_shot_limit, DEFAULT_SINGLE_SHOT_LIMIT);
    }

    #[test]
    fn test_load_invalid_config_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "parallelism": 0 }"#).unwrap();

        let err = Config::load(file.path().to_str().unwrap()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::Parallelism)
        );
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load("/nonexistent/blobcopy/config.json").is_err());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_block_size_bounds() {
        let config = Config {
            block_size: MAX_BLOCK_SIZE + 1,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BlockSize { .. })
        ));

        let config = Config {
            block_size: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_prefix() {
        let config = Config {
            container_prefix: String::new(),
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyPrefix));
    }
}
