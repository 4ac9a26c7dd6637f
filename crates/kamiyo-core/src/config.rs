//! Runtime configuration
//!
//! Read from `<config_dir>/kamiyo/config.toml` (or an explicit path). A
//! missing file yields defaults; a malformed one is an error.

use crate::api::DEFAULT_LOSS_WINDOW_DAYS;
use crate::dashboard::{DashboardOptions, DEFAULT_SIGN_IN_URL, RECENT_ACTIVITY_LIMIT};
use crate::error::{CoreError, Result};
use crate::tier::Tier;
use serde::{Deserialize, Serialize};
#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KamiyoConfig {
    /// Origin the API routes live on; empty means same-origin
    pub api_base: String,
    /// Where unauthenticated dashboard visitors are sent
    pub sign_in_url: String,
    /// Lowest tier that gets usage analytics
    pub usage_min_tier: Tier,
    /// Trailing window for the home page loss total
    pub loss_window_days: u32,
    pub recent_activity_limit: usize,
}

impl Default for KamiyoConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            sign_in_url: DEFAULT_SIGN_IN_URL.to_string(),
            usage_min_tier: Tier::Team,
            loss_window_days: DEFAULT_LOSS_WINDOW_DAYS,
            recent_activity_limit: RECENT_ACTIVITY_LIMIT,
        }
    }
}

impl KamiyoConfig {
    /// Default config file location
    #[cfg(feature = "native")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("kamiyo").join("config.toml"))
    }

    /// Load `path`, falling back to defaults when it does not exist
    #[cfg(feature = "native")]
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CoreError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_toml(&content, path)
    }

    /// Load from `path` if given, else the default location
    #[cfg(feature = "native")]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => Self::load(&p),
            None => Ok(Self::default()),
        }
    }

    #[cfg(feature = "native")]
    fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| CoreError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.api_base.is_empty()
            && !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://"))
        {
            return Err(CoreError::InvalidConfig {
                message: format!("api_base must be an http(s) URL, got {:?}", self.api_base),
            });
        }
        if !(1..=RECENT_ACTIVITY_LIMIT).contains(&self.recent_activity_limit) {
            return Err(CoreError::InvalidConfig {
                message: format!(
                    "recent_activity_limit must be between 1 and {}, got {}",
                    RECENT_ACTIVITY_LIMIT, self.recent_activity_limit
                ),
            });
        }
        if self.loss_window_days == 0 {
            return Err(CoreError::InvalidConfig {
                message: "loss_window_days must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            usage_min_tier: self.usage_min_tier,
            recent_activity_limit: self.recent_activity_limit,
            sign_in_url: self.sign_in_url.clone(),
        }
    }

    /// `api_base` joined with an endpoint path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = KamiyoConfig::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, KamiyoConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_base = \"https://kamiyo.ai/\"\nusage_min_tier = \"pro\"\n",
        )
        .unwrap();

        let config = KamiyoConfig::load(&path).unwrap();
        assert_eq!(config.usage_min_tier, Tier::Pro);
        assert_eq!(config.recent_activity_limit, RECENT_ACTIVITY_LIMIT);
        assert_eq!(
            config.url_for("/api/health"),
            "https://kamiyo.ai/api/health"
        );
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base = [").unwrap();
        assert!(matches!(
            KamiyoConfig::load(&path),
            Err(CoreError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_rejects_non_http_base() {
        let config = KamiyoConfig {
            api_base: "ftp://kamiyo.ai".into(),
            ..KamiyoConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_activity_limit_above_five() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "recent_activity_limit = 50\n").unwrap();
        assert!(matches!(
            KamiyoConfig::load(&path),
            Err(CoreError::InvalidConfig { .. })
        ));

        let smaller = KamiyoConfig {
            recent_activity_limit: 3,
            ..KamiyoConfig::default()
        };
        assert!(smaller.validate().is_ok());
    }
}
