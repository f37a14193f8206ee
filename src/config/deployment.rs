use crate::utils::error::{Result, UtilError};
use crate::utils::validation::{validate_hostname, validate_non_empty_string, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MARKETING_DOMAIN: &str = "inventhora.com";
pub const PRODUCTION_BRANCH: &str = "master";

pub const BRANCH_ENV_VAR: &str = "VERCEL_GITHUB_COMMIT_REF";
pub const ENVIRONMENT_ENV_VAR: &str = "NODE_ENV";
pub const MARKETING_DOMAIN_ENV_VAR: &str = "INVENTHORA_MARKETING_DOMAIN";

static ENV_VAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// 部署環境設定：分支名稱、執行環境與行銷網域
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    #[serde(default = "default_marketing_domain")]
    pub marketing_domain: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeploymentFile {
    deployment: DeploymentConfig,
}

fn default_marketing_domain() -> String {
    DEFAULT_MARKETING_DOMAIN.to_string()
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            marketing_domain: default_marketing_domain(),
            branch: None,
            environment: None,
        }
    }
}

impl DeploymentConfig {
    pub fn new(branch: Option<String>) -> Self {
        Self {
            branch,
            ..Self::default()
        }
    }

    /// 從環境變數讀取設定
    pub fn from_env() -> Self {
        let config = Self {
            marketing_domain: std::env::var(MARKETING_DOMAIN_ENV_VAR)
                .unwrap_or_else(|_| default_marketing_domain()),
            branch: std::env::var(BRANCH_ENV_VAR).ok(),
            environment: std::env::var(ENVIRONMENT_ENV_VAR).ok(),
        };
        tracing::debug!(
            "Deployment config from env: branch={:?}, environment={:?}",
            config.branch,
            config.environment
        );
        config
    }

    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UtilError::IoError)?;
        tracing::debug!("Loading deployment config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定，`[deployment]` 區段
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let file: DeploymentFile =
            toml::from_str(&processed_content).map_err(|e| UtilError::ConfigValidationError {
                field: "deployment_toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        Ok(file.deployment)
    }

    /// 替換 `${VAR}`，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| {
                    tracing::warn!("Environment variable {} is not set", var_name);
                    format!("${{{}}}", var_name)
                })
            })
            .to_string()
    }

    /// Branch name the way preview deployments spell it in subdomains:
    /// lowercase, with the first `/` and the first `_` turned into `-`.
    pub fn normalized_branch(&self) -> Option<String> {
        self.branch
            .as_ref()
            .map(|branch| branch.to_lowercase().replacen('/', "-", 1).replacen('_', "-", 1))
    }

    pub fn is_production_branch(&self) -> bool {
        self.normalized_branch().as_deref() == Some(PRODUCTION_BRANCH)
    }

    pub fn is_dev(&self) -> bool {
        self.environment.as_deref() == Some("development")
    }
}

impl Validate for DeploymentConfig {
    fn validate(&self) -> Result<()> {
        validate_hostname("deployment.marketing_domain", &self.marketing_domain)?;

        if let Some(branch) = &self.branch {
            validate_non_empty_string("deployment.branch", branch)?;
        }

        Ok(())
    }
}
