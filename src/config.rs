use std::{env, fs, path::PathBuf};

use crate::services::DEFAULT_URL_TTL;
use directories::BaseDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::{debug, warn};

const CONFIG: &str = include_str!("../.config/config.json5");

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
}

/// Where the dataset and images live, and how long signed links stay valid
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    pub bucket: String,
    pub dataset_key: String,
    /// Key template with `{assign_class}` and `{file_attachment_id}` placeholders
    pub image_key_template: String,
    pub url_ttl_secs: u64,
    pub fetch_timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: "derm-data-general".to_string(),
            dataset_key: "dev_set_2.csv".to_string(),
            image_key_template:
                "DATASETS/TRAINING/cropped_images/v2_crop_256/{assign_class}/{file_attachment_id}_0.jpg"
                    .to_string(),
            url_ttl_secs: DEFAULT_URL_TTL.as_secs(),
            fetch_timeout_secs: 30,
        }
    }
}

/// Storage credentials. Never logged.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Secrets {
    #[serde(default)]
    pub aws_access_key_id: Option<String>,
    #[serde(default)]
    pub aws_secret_access_key: Option<String>,
    #[serde(default)]
    pub aws_region: Option<String>,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |v: &Option<String>| if v.is_some() { "<set>" } else { "<unset>" };
        f.debug_struct("Secrets")
            .field("aws_access_key_id", &mask(&self.aws_access_key_id))
            .field("aws_secret_access_key", &mask(&self.aws_secret_access_key))
            .field("aws_region", &self.aws_region)
            .finish()
    }
}

impl Secrets {
    /// Fill unset values from the standard AWS environment variables.
    /// Blank values count as unset.
    pub fn with_env_fallback(self) -> Self {
        self.with_fallback(|name| env::var(name).ok())
    }

    fn with_fallback(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |current: Option<String>, names: &[&str]| {
            non_blank(current).or_else(|| names.iter().find_map(|n| non_blank(lookup(n))))
        };
        Self {
            aws_access_key_id: pick(self.aws_access_key_id, &["AWS_ACCESS_KEY_ID"]),
            aws_secret_access_key: pick(self.aws_secret_access_key, &["AWS_SECRET_ACCESS_KEY"]),
            aws_region: pick(self.aws_region, &["AWS_REGION", "AWS_DEFAULT_REGION"]),
        }
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// Nominal image width in pixels; scaled down to fit the panel
    pub image_width_px: u32,
    /// Upper bound on terminal columns spent on the image
    pub image_max_columns: u16,
    /// Optional JSON file overriding the default keybindings
    #[serde(default)]
    pub keybindings_file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            image_width_px: 300,
            image_max_columns: 48,
            keybindings_file: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub secrets: Secrets,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Built-in defaults for when the layered config cannot be read.
    /// AWS credentials are still taken from the environment.
    pub fn fallback() -> Self {
        Self::fallback_from(|name| env::var(name).ok())
    }

    fn fallback_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            secrets: Secrets::default().with_fallback(lookup),
            ..Self::default()
        }
    }

    /// Build the layered configuration: embedded defaults, then the user file,
    /// then `DERMVIEW_<SECTION>__<KEY>` environment variables. Secrets still
    /// unset afterwards fall back to the standard AWS variables.
    pub fn from_path(config_path: Option<&PathBuf>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        builder = match config_path {
            Some(p) => {
                let path = expand_tilde(p);
                debug!("Using config file {}", path.display());
                builder.add_source(
                    config::File::from(path)
                        .format(config::FileFormat::Json5)
                        .required(true),
                )
            }
            None => {
                let home_cfg = default_home_config_path();
                if !home_cfg.exists() {
                    // Write embedded defaults so the user has something to edit
                    if let Some(parent) = home_cfg.parent() {
                        let _ = fs::create_dir_all(parent);
                    }
                    if let Err(e) = fs::write(&home_cfg, CONFIG) {
                        warn!("Could not write default config to {}: {e}", home_cfg.display());
                    }
                }
                builder.add_source(
                    config::File::from(home_cfg)
                        .format(config::FileFormat::Json5)
                        .required(false),
                )
            }
        };

        builder = builder.add_source(
            config::Environment::with_prefix(PROJECT_NAME.as_str())
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.secrets = cfg.secrets.with_env_fallback();
        debug!("Loaded config: storage={:?} secrets={:?}", cfg.storage, cfg.secrets);
        Ok(cfg)
    }
}

fn expand_tilde(path: &PathBuf) -> PathBuf {
    if let Some(s) = path.to_str() {
        if s.starts_with('~') {
            if let Some(base) = BaseDirs::new() {
                return PathBuf::from(s.replacen('~', base.home_dir().to_str().unwrap_or(""), 1));
            }
        }
    }
    path.clone()
}

fn default_home_config_path() -> PathBuf {
    if let Some(base) = BaseDirs::new() {
        return base.home_dir().join(".dermview-config.json5");
    }
    PathBuf::from(".dermview-config.json5")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_defaults_match_struct_defaults() {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.storage, StorageConfig::default());
        assert_eq!(cfg.storage.url_ttl_secs, DEFAULT_URL_TTL.as_secs());
        assert_eq!(cfg.ui, UiConfig::default());
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.json5");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"{{ storage: {{ dataset_key: "other.csv" }}, secrets: {{ aws_region: "eu-west-1" }} }}"#
        )
        .unwrap();
        drop(f);

        let cfg = Config::from_path(Some(&path)).unwrap();
        assert_eq!(cfg.storage.dataset_key, "other.csv");
        assert_eq!(cfg.storage.bucket, "derm-data-general");
        assert_eq!(cfg.secrets.aws_region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json5");
        assert!(Config::from_path(Some(&path)).is_err());
    }

    #[test]
    fn test_secret_fallback_fills_only_unset_values() {
        let vars: HashMap<&str, &str> = [
            ("AWS_ACCESS_KEY_ID", "env-key"),
            ("AWS_SECRET_ACCESS_KEY", "env-secret"),
            ("AWS_DEFAULT_REGION", "us-west-2"),
        ]
        .into_iter()
        .collect();
        let secrets = Secrets {
            aws_access_key_id: Some("file-key".to_string()),
            aws_secret_access_key: Some("   ".to_string()),
            aws_region: None,
        }
        .with_fallback(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(secrets.aws_access_key_id.as_deref(), Some("file-key"));
        assert_eq!(secrets.aws_secret_access_key.as_deref(), Some("env-secret"));
        assert_eq!(secrets.aws_region.as_deref(), Some("us-west-2"));
    }

    #[test]
    fn test_fallback_config_keeps_env_credentials() {
        let vars: HashMap<&str, &str> = [
            ("AWS_ACCESS_KEY_ID", "AKIDENV"),
            ("AWS_SECRET_ACCESS_KEY", "env-secret"),
            ("AWS_REGION", "eu-central-1"),
        ]
        .into_iter()
        .collect();
        let cfg = Config::fallback_from(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(cfg.storage, StorageConfig::default());
        assert_eq!(cfg.secrets.aws_access_key_id.as_deref(), Some("AKIDENV"));
        assert_eq!(cfg.secrets.aws_secret_access_key.as_deref(), Some("env-secret"));
        assert_eq!(cfg.secrets.aws_region.as_deref(), Some("eu-central-1"));
    }

    #[test]
    fn test_secrets_debug_is_masked() {
        let secrets = Secrets {
            aws_access_key_id: Some("AKIAEXAMPLE".to_string()),
            aws_secret_access_key: Some("very-secret".to_string()),
            aws_region: Some("us-east-1".to_string()),
        };
        let shown = format!("{secrets:?}");
        assert!(!shown.contains("AKIAEXAMPLE"));
        assert!(!shown.contains("very-secret"));
        assert!(shown.contains("us-east-1"));
    }
}
