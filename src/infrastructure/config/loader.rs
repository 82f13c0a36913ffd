use std::path::Path;
use tracing::debug;

use crate::domain::models::ConfigDocument;
use crate::domain::LoadError;

/// Loader for the proxy's YAML configuration file
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a configuration file into a generic YAML tree
    ///
    /// No structural checks happen here; a root that is not a mapping
    /// still loads and is reported by the validator.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<ConfigDocument, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::parse(path, &contents)?;
        debug!(path = %path.display(), "loaded configuration file");
        Ok(document)
    }

    /// Parse YAML text, attributing errors to `path`
    pub fn parse(path: impl AsRef<Path>, contents: &str) -> Result<ConfigDocument, LoadError> {
        if contents.trim().is_empty() {
            return Ok(ConfigDocument::new(serde_yaml::Value::Null));
        }

        serde_yaml::from_str(contents)
            .map(ConfigDocument::new)
            .map_err(|err| LoadError::Parse {
                path: path.as_ref().to_path_buf(),
                message: err.to_string(),
            })
    }
}
