use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Name of the configuration file searched for in the working directory and
/// its ancestors.
pub const CONFIG_FILE_NAME: &str = "supplyscore.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{key} default weight must be between 0.0 and 1.0, got {value}")]
    InvalidWeight { key: &'static str, value: f64 },
}

/// Default decimal weights applied to a KPI metric that arrives without a
/// weight of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultWeights {
    /// Default weight for the OTIF (on-time-in-full) delivery KPI
    #[serde(default = "default_otif_weight")]
    pub otif: f64,

    /// Default weight for the corrective-actions (CAPA closure) KPI
    #[serde(default = "default_corrective_actions_weight")]
    pub corrective_actions: f64,

    /// Default weight for the ESG compliance KPI
    #[serde(default = "default_esg_compliance_weight")]
    pub esg_compliance: f64,
}

fn default_otif_weight() -> f64 {
    0.4
}

fn default_corrective_actions_weight() -> f64 {
    0.35
}

fn default_esg_compliance_weight() -> f64 {
    0.25
}

impl Default for DefaultWeights {
    fn default() -> Self {
        Self {
            otif: default_otif_weight(),
            corrective_actions: default_corrective_actions_weight(),
            esg_compliance: default_esg_compliance_weight(),
        }
    }
}

impl DefaultWeights {
    /// Default weight for a KPI key. Unknown keys have no default; a metric
    /// under such a key needs an explicit weight to participate in scoring.
    pub fn weight_for(&self, key: &str) -> Option<f64> {
        match key {
            "otif" => Some(self.otif),
            "corrective_actions" => Some(self.corrective_actions),
            "esg_compliance" => Some(self.esg_compliance),
            _ => None,
        }
    }

    fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    fn validate_weight(weight: f64, key: &'static str) -> Result<(), ConfigError> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(ConfigError::InvalidWeight { key, value: weight })
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_weight(self.otif, "otif")?;
        Self::validate_weight(self.corrective_actions, "corrective_actions")?;
        Self::validate_weight(self.esg_compliance, "esg_compliance")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplyscoreConfig {
    #[serde(default)]
    pub weights: DefaultWeights,
}

/// Load and validate a configuration file from an explicit path.
pub fn load_config_from(path: &Path) -> Result<SupplyscoreConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: SupplyscoreConfig =
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.weights.validate()?;
    Ok(config)
}

fn try_load_config_from_path(path: &Path) -> Option<SupplyscoreConfig> {
    if !path.exists() {
        return None;
    }
    match load_config_from(path) {
        Ok(config) => {
            log::debug!("Loaded configuration from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Ignoring invalid configuration: {}", e);
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| dir.parent().map(Path::to_path_buf))
        .take(max_depth)
}

/// Load configuration from the nearest `supplyscore.toml`, falling back to
/// the documented defaults when none is found.
pub fn load_config() -> SupplyscoreConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using defaults.", e);
            return SupplyscoreConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No {} found. Using default weights.", CONFIG_FILE_NAME);
            SupplyscoreConfig::default()
        })
}

static CONFIG: OnceLock<SupplyscoreConfig> = OnceLock::new();

/// Get the cached configuration.
pub fn get_config() -> &'static SupplyscoreConfig {
    CONFIG.get_or_init(load_config)
}

/// Get the default per-KPI weights from the cached configuration.
pub fn get_default_weights() -> &'static DefaultWeights {
    &get_config().weights
}
