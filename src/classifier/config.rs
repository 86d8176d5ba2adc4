//! Classifier Configuration
//!
//! Settings of the `Id3Classifier` and the json persistence shared by
//! classifiers, configurations and trees.
use crate::constants::{EPSILON, LABEL_FEATURE};
use crate::errors::Id3Error;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_label_feature() -> String {
    LABEL_FEATURE.to_string()
}
fn default_epsilon() -> f64 {
    EPSILON
}
fn default_record_trace() -> bool {
    true
}

/// Configuration for the `Id3Classifier`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Id3Config {
    /// Name of the label feature.
    #[serde(default = "default_label_feature")]
    pub label_feature: String,
    /// Gains within this distance of the best gain count as ties.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Keep the diagnostic trace of each fit.
    #[serde(default = "default_record_trace")]
    pub record_trace: bool,
    /// Number of threads for parallel prediction, `None` uses the global pool.
    #[serde(default)]
    pub num_threads: Option<usize>,
}

impl Default for Id3Config {
    fn default() -> Self {
        Id3Config {
            label_feature: LABEL_FEATURE.to_string(),
            epsilon: EPSILON,
            record_trace: true,
            num_threads: None,
        }
    }
}

impl Id3Config {
    pub fn validate(&self) -> Result<(), Id3Error> {
        if self.label_feature.is_empty() {
            return Err(Id3Error::InvalidParameter(
                "label_feature".to_string(),
                "a non-empty feature name".to_string(),
                "an empty name".to_string(),
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Id3Error::InvalidParameter(
                "epsilon".to_string(),
                "a finite value >= 0".to_string(),
                self.epsilon.to_string(),
            ));
        }
        if self.num_threads == Some(0) {
            return Err(Id3Error::InvalidParameter(
                "num_threads".to_string(),
                "at least 1".to_string(),
                "0".to_string(),
            ));
        }
        Ok(())
    }
}

/// IO
pub trait ModelIO: Serialize + DeserializeOwned + Sized {
    /// Save as a json object to a file.
    ///
    /// * `path` - Path to save to.
    fn save_model<P: AsRef<Path>>(&self, path: P) -> Result<(), Id3Error> {
        fs::write(path, self.json_dump()?).map_err(|e| Id3Error::UnableToWrite(e.to_string()))
    }

    /// Dump as a json object
    fn json_dump(&self) -> Result<String, Id3Error> {
        serde_json::to_string(self).map_err(|e| Id3Error::UnableToWrite(e.to_string()))
    }

    /// Load from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, Id3Error> {
        serde_json::from_str::<Self>(json_str).map_err(|e| Id3Error::UnableToRead(e.to_string()))
    }

    /// Load from a path to a json object.
    ///
    /// * `path` - Path to load from.
    fn load_model<P: AsRef<Path>>(path: P) -> Result<Self, Id3Error> {
        let path = path.as_ref();
        let json_str =
            fs::read_to_string(path).map_err(|e| Id3Error::UnableToRead(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json_str)
    }
}

impl ModelIO for Id3Config {}
