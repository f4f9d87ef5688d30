//! # AccountCredentials Value Object
//!
//! ストレージアカウントの認証情報

use std::fmt;
use thiserror::Error;

/// 認証情報の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
    /// 環境変数が未設定、または空文字
    #[error("Either the AZURE_STORAGE_ACCOUNT or AZURE_STORAGE_ACCESS_KEY environment variable is not set ({name} is missing)")]
    Missing { name: String },
}

/// ストレージアカウント名とアクセスキー
///
/// `Debug` 出力ではアクセスキーを伏せる
#[derive(Clone, PartialEq, Eq)]
pub struct AccountCredentials {
    account: String,
    access_key: String,
}

impl AccountCredentials {
    /// 新しい認証情報を作成
    ///
    /// # Errors
    ///
    /// どちらかの値が空の場合に `CredentialsError::Missing` を返す
    pub fn new(
        account: impl Into<String>,
        access_key: impl Into<String>,
        account_var: &str,
        key_var: &str,
    ) -> Result<Self, CredentialsError> {
        let account = account.into();
        let access_key = access_key.into();

        if account.is_empty() {
            return Err(CredentialsError::Missing {
                name: account_var.to_string(),
            });
        }
        if access_key.is_empty() {
            return Err(CredentialsError::Missing {
                name: key_var.to_string(),
            });
        }

        Ok(Self {
            account,
            access_key,
        })
    }

    /// アカウント名
    pub fn account(&self) -> &str {
        &self.account
    }

    /// アクセスキー
    pub fn access_key(&self) -> &str {
        &self.access_key
    }
}

impl fmt::Debug for AccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCredentials")
            .field("account", &self.account)
            .field("access_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_credentials() {
        let creds = AccountCredentials::new("myaccount", "c2VjcmV0", "ACCOUNT", "KEY").unwrap();
        assert_eq!(creds.account(), "myaccount");
        assert_eq!(creds.access_key(), "c2VjcmV0");
    }

    #[test]
    fn test_empty_account_is_missing() {
        let result = AccountCredentials::new("", "key", "ACCOUNT", "KEY");
        assert_eq!(
            result.unwrap_err(),
            CredentialsError::Missing {
                name: "ACCOUNT".to_string()
            }
        );
    }

    #[test]
    fn test_empty_key_is_missing() {
        let result = AccountCredentials::new("myaccount", "", "ACCOUNT", "KEY");
        assert_eq!(
            result.unwrap_err(),
            CredentialsError::Missing {
                name: "KEY".to_string()
            }
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let creds = AccountCredentials::new("myaccount", "topsecret", "ACCOUNT", "KEY").unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("myaccount"));
        assert!(!debug.contains("topsecret"));
    }
}
