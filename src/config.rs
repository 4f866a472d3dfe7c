use crate::error::{AdmissionCalcError, Result};
use admission_calc_common::{ALL_SECTORS, DEFAULT_TOP_N};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// サーバーURLを上書きする環境変数
pub const BASE_URL_ENV: &str = "ADMISSION_CALC_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub default_top_n: i64,
    pub default_sector: String,
    /// 未設定ならタイムアウトなし
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".into(),
            default_top_n: DEFAULT_TOP_N,
            default_sector: ALL_SECTORS.into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AdmissionCalcError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("admission-calc").join("config.json"))
    }

    /// サーバーURL（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_base_url(&self, cli_base_url: Option<&str>) -> Result<String> {
        let env_url = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        let url = cli_base_url
            .map(str::to_string)
            .or(env_url)
            .unwrap_or_else(|| self.base_url.clone());
        validate_base_url(&url)?;
        Ok(url)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        validate_base_url(&url)?;
        self.base_url = url;
        Ok(())
    }

    pub fn set_default_top_n(&mut self, top_n: i64) -> Result<()> {
        if top_n < 1 {
            return Err(AdmissionCalcError::InvalidArgument(format!(
                "topN は1以上を指定してください: {}",
                top_n
            )));
        }
        self.default_top_n = top_n;
        Ok(())
    }
}

/// http(s) のURLか確認
pub fn validate_base_url(url: &str) -> Result<()> {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(AdmissionCalcError::Config(format!(
            "サーバーURLは http:// または https:// で始めてください: {}",
            url
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.default_top_n, 10);
        assert_eq!(config.default_sector, "All");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("http://localhost:5000").is_ok());
        assert!(validate_base_url("https://calc.example.com").is_ok());
        assert!(validate_base_url("localhost:5000").is_err());
        assert!(validate_base_url("").is_err());
    }

    #[test]
    fn test_cli_base_url_wins() {
        let config = Config::default();
        let url = config.resolve_base_url(Some("https://override.example.com")).unwrap();
        assert_eq!(url, "https://override.example.com");
    }

    #[test]
    fn test_set_default_top_n() {
        let mut config = Config::default();
        config.set_default_top_n(5).unwrap();
        assert_eq!(config.default_top_n, 5);
        assert!(config.set_default_top_n(0).is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = serde_json::from_str(r#"{"base_url": "https://x.example"}"#).unwrap();
        assert_eq!(config.base_url, "https://x.example");
        assert_eq!(config.default_top_n, 10);
        assert_eq!(config.timeout_seconds, None);
    }
}
