use crate::classifiers::RandomForest;
use crate::classifiers::split_criteria::GiniSplitCriterion;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

fn default_dataset_path() -> PathBuf {
    PathBuf::from("consumer_electronics_sales_data.csv")
}
fn default_listen_addr() -> String {
    "127.0.0.1:8000".to_string()
}
fn default_test_fraction() -> f64 {
    0.25
}
fn default_split_seed() -> u64 {
    42
}
fn default_n_estimators() -> usize {
    100
}
fn default_max_depth() -> Option<usize> {
    Some(10)
}
fn default_min_samples_split() -> usize {
    2
}
fn default_bootstrap() -> bool {
    true
}
fn default_forest_seed() -> u64 {
    0
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ForestParameters {
    #[serde(default = "default_n_estimators")]
    #[schemars(
        title = "Trees",
        description = "Number of trees in the forest",
        range(min = 1),
        default = "default_n_estimators"
    )]
    pub n_estimators: usize,

    #[serde(default = "default_max_depth")]
    #[schemars(
        title = "Max depth",
        description = "Depth cap of every tree; null grows until leaves are pure",
        range(min = 1),
        default = "default_max_depth"
    )]
    pub max_depth: Option<usize>,

    #[serde(default = "default_min_samples_split")]
    #[schemars(
        title = "Min samples split",
        description = "Rows a node needs before it may split",
        range(min = 2),
        default = "default_min_samples_split"
    )]
    pub min_samples_split: usize,

    #[serde(default)]
    #[schemars(
        title = "Max features",
        description = "Features examined per split; null means floor(sqrt(features))",
        range(min = 1)
    )]
    pub max_features: Option<usize>,

    #[serde(default = "default_bootstrap")]
    #[schemars(
        title = "Bootstrap",
        description = "Fit every tree on a bootstrap sample of the training rows",
        default = "default_bootstrap"
    )]
    pub bootstrap: bool,

    #[serde(default = "default_forest_seed")]
    #[schemars(title = "Seed", description = "Forest PRNG seed", default = "default_forest_seed")]
    pub seed: u64,
}

impl Default for ForestParameters {
    fn default() -> Self {
        Self {
            n_estimators: default_n_estimators(),
            max_depth: default_max_depth(),
            min_samples_split: default_min_samples_split(),
            max_features: None,
            bootstrap: default_bootstrap(),
            seed: default_forest_seed(),
        }
    }
}

impl From<&ForestParameters> for RandomForest {
    fn from(params: &ForestParameters) -> Self {
        RandomForest::new(
            params.n_estimators,
            params.max_depth,
            params.min_samples_split,
            params.max_features,
            params.bootstrap,
            params.seed,
            Box::new(GiniSplitCriterion::new()),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrainingParameters {
    #[serde(default = "default_test_fraction")]
    #[schemars(
        title = "Test fraction",
        description = "Share of labelled rows held out for evaluation (exclusive bounds 0 and 1)",
        range(min = 0.0, max = 1.0),
        default = "default_test_fraction"
    )]
    pub test_fraction: f64,

    #[serde(default = "default_split_seed")]
    #[schemars(
        title = "Split seed",
        description = "PRNG seed of the train/test shuffle",
        default = "default_split_seed"
    )]
    pub split_seed: u64,

    #[serde(default)]
    #[schemars(title = "Forest", description = "Random forest hyper-parameters")]
    pub forest: ForestParameters,
}

impl Default for TrainingParameters {
    fn default() -> Self {
        Self {
            test_fraction: default_test_fraction(),
            split_seed: default_split_seed(),
            forest: ForestParameters::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_dataset_path")]
    #[schemars(
        with = "String",
        title = "Dataset path",
        description = "CSV file with the purchase records",
        extend("format" = "path", "x-file" = true, "x-extensions" = ["csv"])
    )]
    pub dataset_path: PathBuf,

    #[serde(default = "default_listen_addr")]
    #[schemars(
        title = "Listen address",
        description = "host:port the HTTP server binds to",
        default = "default_listen_addr"
    )]
    pub listen_addr: String,

    #[serde(default)]
    pub training: TrainingParameters,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            listen_addr: default_listen_addr(),
            training: TrainingParameters::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let training = &self.training;
        let forest = &training.forest;
        if !(training.test_fraction > 0.0 && training.test_fraction < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "test_fraction must be in (0, 1), got {}",
                training.test_fraction
            )));
        }
        if forest.n_estimators == 0 {
            return Err(ConfigError::Invalid("n_estimators must be >= 1".into()));
        }
        if forest.min_samples_split < 2 {
            return Err(ConfigError::Invalid(
                "min_samples_split must be >= 2".into(),
            ));
        }
        if forest.max_depth == Some(0) {
            return Err(ConfigError::Invalid("max_depth must be >= 1".into()));
        }
        if forest.max_features == Some(0) {
            return Err(ConfigError::Invalid("max_features must be >= 1".into()));
        }
        if self.listen_addr.trim().is_empty() {
            return Err(ConfigError::Invalid("listen_addr must not be empty".into()));
        }
        Ok(())
    }
}

/// Reads and validates a JSON config file. Missing keys take their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

pub fn config_schema() -> Schema {
    schema_for!(AppConfig)
}
