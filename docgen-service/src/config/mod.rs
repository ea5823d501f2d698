use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

/// Default maximum output length requested from the completion service.
const DEFAULT_MAX_TOKENS: i32 = 500;

#[derive(Debug, Deserialize, Clone)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3000
}

impl CommonConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug, Clone)]
pub struct DocgenConfig {
    pub common: CommonConfig,
    pub completion: CompletionConfig,
    pub profile: ProfileConfig,
    pub spool: SpoolConfig,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub max_tokens: i32,
}

/// Fixed text interpolated into every prompt.
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub company_name: String,
    pub service_description: String,
}

#[derive(Debug, Clone)]
pub struct SpoolConfig {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub backend: ProviderBackend,
    /// Whether the mock backend answers requests. Only meaningful in tests.
    pub mock_enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProviderBackend {
    OpenAi,
    Mock,
}

impl DocgenConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = CommonConfig::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(DocgenConfig {
            common,
            completion: CompletionConfig {
                api_key: get_env("OPENAI_API_KEY", None, is_prod)?,
                api_base: get_env("OPENAI_API_BASE", Some("https://api.openai.com/v1"), is_prod)?,
                model: get_env("OPENAI_MODEL", Some("gpt-4"), is_prod)?,
                max_tokens: get_env(
                    "DOCGEN_MAX_TOKENS",
                    Some(&DEFAULT_MAX_TOKENS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_MAX_TOKENS),
            },
            profile: ProfileConfig {
                company_name: get_env("DOCGEN_COMPANY_NAME", Some("S K IT SOLUTION"), is_prod)?,
                service_description: get_env(
                    "DOCGEN_SERVICE_DESCRIPTION",
                    Some("Product Supply"),
                    is_prod,
                )?,
            },
            spool: SpoolConfig {
                path: get_env("DOCGEN_SPOOL_PATH", Some("spool"), is_prod)?,
            },
            provider: ProviderConfig {
                backend: get_env("DOCGEN_PROVIDER", Some("openai"), is_prod)?
                    .parse()
                    .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
                mock_enabled: get_env("DOCGEN_MOCK_ENABLED", Some("true"), is_prod)?
                    .parse()
                    .unwrap_or(true),
            },
        })
    }
}

impl std::str::FromStr for ProviderBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderBackend::OpenAi),
            "mock" => Ok(ProviderBackend::Mock),
            _ => Err(format!("Invalid provider backend: {}", s)),
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_key_without_value_errors() {
        assert!(get_env("DOCGEN_TEST_NEVER_SET", None, false).is_err());
        assert!(get_env("DOCGEN_TEST_NEVER_SET", Some("fallback"), true).is_err());
    }

    #[test]
    fn unset_key_falls_back_to_default_in_dev() {
        let value = get_env("DOCGEN_TEST_NEVER_SET", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn provider_backend_parses_known_values() {
        assert_eq!("openai".parse(), Ok(ProviderBackend::OpenAi));
        assert_eq!("Mock".parse(), Ok(ProviderBackend::Mock));
        assert!("gemini".parse::<ProviderBackend>().is_err());
    }
}
