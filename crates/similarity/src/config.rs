use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::Similarity;

/// Verdict for a pair that is re-entered while it is still being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Report the revisited pair as [`Similarity::Unknown`].
    #[default]
    Unknown,
    /// Report the revisited pair as [`Similarity::Same`].
    AssumeSimilar,
}

impl CyclePolicy {
    pub fn verdict(&self) -> Similarity {
        match self {
            Self::Unknown => Similarity::Unknown,
            Self::AssumeSimilar => Similarity::Same,
        }
    }
}

impl FromStr for CyclePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "unknown" => Ok(Self::Unknown),
            "assume_similar" => Ok(Self::AssumeSimilar),
            _ => Err(format!(
                "Invalid cycle policy: '{}'. Valid options are: unknown, assume-similar",
                s
            )),
        }
    }
}

impl std::fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::AssumeSimilar => write!(f, "assume-similar"),
        }
    }
}

/// Which side of a comparison goes through the rename tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Only the first (left) argument is normalized.
    #[default]
    LeftOnly,
    /// Both arguments are normalized.
    BothSides,
}

/// One rename rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameEntry {
    pub from: String,
    pub to: String,
    /// Treat `from` as a regular expression and `to` as its replacement.
    #[serde(default)]
    pub regex: bool,
}

impl RenameEntry {
    pub fn exact(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            regex: false,
        }
    }

    pub fn pattern(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            regex: true,
        }
    }
}

/// Rename tables per name category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    pub classifier: Vec<RenameEntry>,
    pub compilation_unit: Vec<RenameEntry>,
    pub package: Vec<RenameEntry>,
    pub namespace: Vec<RenameEntry>,
}

impl NormalizationConfig {
    pub fn is_empty(&self) -> bool {
        self.classifier.is_empty()
            && self.compilation_unit.is_empty()
            && self.package.is_empty()
            && self.namespace.is_empty()
    }
}

/// Settings for a [`SimilarityChecker`](crate::SimilarityChecker).
///
/// # Example
///
/// ```
/// use java_similarity::{CyclePolicy, SimilarityConfig};
///
/// let config = SimilarityConfig::from_yaml_str(
///     r#"
/// check_statement_position: false
/// cycle_policy: assume_similar
/// normalization:
///   classifier:
///     - from: old.pkg.Foo
///       to: new.pkg.Foo
/// "#,
/// )
/// .unwrap();
/// assert!(!config.check_statement_position);
/// assert_eq!(config.cycle_policy, CyclePolicy::AssumeSimilar);
/// assert_eq!(config.normalization.classifier.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Default for whether neighboring statements take part in statement comparisons.
    pub check_statement_position: bool,
    pub cycle_policy: CyclePolicy,
    pub normalization_mode: NormalizationMode,
    pub normalization: NormalizationConfig,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            check_statement_position: true,
            cycle_policy: CyclePolicy::default(),
            normalization_mode: NormalizationMode::default(),
            normalization: NormalizationConfig::default(),
        }
    }
}

impl SimilarityConfig {
    pub fn from_yaml_str(source: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a configuration file, choosing the format by extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let read = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&read()?),
            Some("json") => Self::from_json_str(&read()?),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
